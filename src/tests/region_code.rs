pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn au() -> &'static str {
        "au"
    }

    pub fn bs() -> &'static str {
        "bs"
    }

    pub fn ca() -> &'static str {
        "ca"
    }

    pub fn ci() -> &'static str {
        "ci"
    }

    pub fn fi() -> &'static str {
        "fi"
    }

    pub fn gb() -> &'static str {
        "gb"
    }

    pub fn gp() -> &'static str {
        "gp"
    }

    pub fn ke() -> &'static str {
        "ke"
    }

    pub fn kz() -> &'static str {
        "kz"
    }

    pub fn no() -> &'static str {
        "no"
    }

    pub fn re() -> &'static str {
        "re"
    }

    pub fn ru() -> &'static str {
        "ru"
    }

    pub fn tz() -> &'static str {
        "tz"
    }

    pub fn ug() -> &'static str {
        "ug"
    }

    pub fn us() -> &'static str {
        "us"
    }

    pub fn va() -> &'static str {
        "va"
    }

    pub fn yt() -> &'static str {
        "yt"
    }

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "zz"
    }
}
