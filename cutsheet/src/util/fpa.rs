use std::cmp::Ordering;

/// Absolute tolerance, in millimetres, below which two coordinates are considered equal.
pub const TOLERANCE_MM: f32 = 1e-3;

/// Floating point coordinate with approximate comparisons.
/// Two values are equal if they lie within [`TOLERANCE_MM`] or 4 ulps of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = TOLERANCE_MM, ulps = 4)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_errors_compare_equal() {
        let shifted = 100.0 + 1e-4;
        assert!(FPA(shifted) == FPA(100.0));
        assert!(FPA(shifted) <= FPA(100.0));
        assert!(FPA(100.0) < FPA(100.1));
        assert!(FPA(100.0) != FPA(100.01));
    }
}
