/// Phone number validation API used to isolate the underlying
/// implementation of the validator and allow different implementations to be
/// swapped in easily, e.g. a platform-native numbering-plan engine in place
/// of the built-in data tables.
pub trait PhoneNumberValidator {
    /// Returns whether the given full international number (expected to start
    /// with "+" followed by the country calling code and subscriber digits)
    /// has an acceptable digit count. Implementations must not panic on
    /// malformed input; any string that does not satisfy the text contract is
    /// simply reported as invalid.
    fn is_valid_phone_number(&self, full_number: &str) -> bool;
}
