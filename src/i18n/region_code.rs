pub struct RegionCode {
}

impl RegionCode {
    /// Returns the region code the registry falls back to when a lookup
    /// cannot be resolved.
    pub fn get_default() -> &'static str {
        return Self::us();
    }

    pub fn us() -> &'static str {
        return "us";
    }

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "zz";
    }
}
