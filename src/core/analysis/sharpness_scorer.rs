use crate::core::models::{EdgeResponseBuffer, SharpnessScore};
use crate::global_constants::LOG_TAG_SHARPNESS;

/// Population variance (divisor N) of the edge response.
///
/// Sums are accumulated exactly in integers and combined as
/// `(N * sum(x^2) - sum(x)^2) / N^2`, so the only rounding happens in the
/// final division.
pub fn score(edges: &EdgeResponseBuffer) -> SharpnessScore {
    let samples = edges.samples();
    if samples.is_empty() {
        return SharpnessScore::from_variance(0.0);
    }

    let (sum, sum_of_squares) = samples.iter().fold((0i128, 0i128), |(sum, squares), &sample| {
        let sample = i128::from(sample);
        (sum + sample, squares + sample * sample)
    });

    let count = samples.len() as i128;
    let numerator = count * sum_of_squares - sum * sum;
    let variance = numerator as f64 / (count * count) as f64;

    log::debug!(
        "{} {} samples, variance={:.4}",
        LOG_TAG_SHARPNESS,
        samples.len(),
        variance
    );

    SharpnessScore::from_variance(variance)
}
