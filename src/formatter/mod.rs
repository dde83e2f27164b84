mod as_you_type;
mod grouping_patterns;

pub use as_you_type::{AsYouTypeFormatter, MappedFormat};
