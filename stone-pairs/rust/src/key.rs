/// Hashable stand-in for an `f64` in the complement maps.
///
/// Two keys are equal exactly when the weights they were built from compare
/// equal with `==`: NaN is rejected up front and `-0.0` is folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct WeightKey(u64);

impl WeightKey {
    pub(crate) fn new(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }

        let value = if value == 0.0 { 0.0 } else { value };
        Some(Self(value.to_bits()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_has_no_key() {
        assert_eq!(WeightKey::new(f64::NAN), None);
        assert_eq!(WeightKey::new(-f64::NAN), None);
    }

    #[test]
    fn signed_zeros_share_a_key() {
        assert_eq!(WeightKey::new(-0.0), WeightKey::new(0.0));
    }

    #[test]
    fn keys_follow_float_equality() {
        assert_eq!(WeightKey::new(1.5), WeightKey::new(3.0 / 2.0));
        assert_ne!(WeightKey::new(0.1 + 0.2), WeightKey::new(0.3));
        assert_eq!(WeightKey::new(f64::INFINITY), WeightKey::new(f64::INFINITY));
        assert_ne!(WeightKey::new(f64::INFINITY), WeightKey::new(f64::NEG_INFINITY));
    }
}
