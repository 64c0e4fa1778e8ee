use serde::Serialize;

/// Population variance of the Laplacian response. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct SharpnessScore(f64);

impl SharpnessScore {
    pub fn from_variance(variance: f64) -> Self {
        Self(variance.max(0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_below(self, threshold: f64) -> bool {
        self.0 < threshold
    }
}

impl std::fmt::Display for SharpnessScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_variance_clamps_rounding_noise_below_zero() {
        assert_eq!(SharpnessScore::from_variance(-1e-12).value(), 0.0);
    }

    #[test]
    fn test_is_below_is_strict() {
        let score = SharpnessScore::from_variance(10.0);

        assert!(!score.is_below(10.0));
        assert!(score.is_below(10.5));
    }
}
