mod region_code;

mod extractor_tests;
mod search_tests;
mod validator_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Initializes trace logging exactly once across the whole suite.
pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}
