mod country;
mod dataset;
mod preferred_regions;
mod registry;

use std::sync::LazyLock;

pub use country::Country;
pub use registry::CountryRegistry;

pub(crate) use preferred_regions::preferred_region_for;

pub static COUNTRY_REGISTRY: LazyLock<CountryRegistry> = LazyLock::new(|| {
    CountryRegistry::new()
});
