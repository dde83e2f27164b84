use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phone_input_core::{AsYouTypeFormatter, extract, is_valid_phone_number};

type TestEntity = (&'static str, &'static str);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("us", "2025551234"),
        ("ke", "712345678"),
        ("gb", "7911123456"),
        ("fr", "612345678"),
        ("in", "9876543210"),
        ("de", "3012345678"),
        ("br", "11987654321"),
        ("jp", "9012345678"),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Input core");

    group.bench_function("as-you-type: input_digits", |b| {
        b.iter(|| {
            for (region, digits) in &numbers {
                let mut formatter = AsYouTypeFormatter::new(region);
                black_box(formatter.input_digits(black_box(digits)));
            }
        })
    });

    group.bench_function("as-you-type: format_with_mapping", |b| {
        let formatter = AsYouTypeFormatter::new("us");
        b.iter(|| {
            for (_, digits) in &numbers {
                black_box(formatter.format_with_mapping(black_box(digits)));
            }
        })
    });

    let full_numbers: Vec<String> = numbers
        .iter()
        .map(|(region, digits)| {
            let mut formatter = AsYouTypeFormatter::new(region);
            formatter.input_digits(digits);
            formatter.country().full_number(formatter.digits())
        })
        .collect();

    group.bench_function("extract: country + remainder", |b| {
        b.iter(|| {
            for number in &full_numbers {
                black_box(extract(black_box(number)));
            }
        })
    });

    group.bench_function("validate: length check", |b| {
        b.iter(|| {
            for number in &full_numbers {
                black_box(is_valid_phone_number(black_box(number)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
