use crate::error::{NucleiError, Result};

/// Evenly spaced log-scale parameters in the half-open range `[start, end)`.
///
/// The count is `ceil((end - start) / step)`, so a floating-point end point
/// that lands a hair above the last step is excluded like any other bound.
pub fn scale_range(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) {
        return Err(NucleiError::InvalidParameters(format!(
            "scale range must be finite, got {start}..{end} step {step}"
        )));
    }
    if step <= 0.0 || end <= start {
        return Err(NucleiError::InvalidParameters(format!(
            "empty scale range {start}..{end} step {step}"
        )));
    }
    let count = ((end - start) / step).ceil() as usize;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

/// Check that a scale list can seed a scale space.
pub fn validate_scales(sigmas: &[f64]) -> Result<()> {
    if sigmas.len() < 2 {
        return Err(NucleiError::InvalidParameters(format!(
            "at least 2 scales are required, got {}",
            sigmas.len()
        )));
    }
    if sigmas.iter().any(|s| !s.is_finite()) {
        return Err(NucleiError::InvalidParameters(
            "scale values must be finite".into(),
        ));
    }
    if let Some(pair) = sigmas.windows(2).find(|w| w[1] <= w[0]) {
        return Err(NucleiError::InvalidParameters(format!(
            "scales must be strictly increasing, got {} then {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_has_three_scales() {
        let s = scale_range(0.4, 0.7, 0.1).unwrap();
        assert_eq!(s.len(), 3);
        assert!((s[2] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn range_rejects_bad_step() {
        assert!(scale_range(0.4, 0.7, 0.0).is_err());
        assert!(scale_range(0.7, 0.4, 0.1).is_err());
        assert!(scale_range(f64::NAN, 0.4, 0.1).is_err());
    }

    #[test]
    fn validate_requires_increasing() {
        assert!(validate_scales(&[0.1]).is_err());
        assert!(validate_scales(&[0.1, 0.1]).is_err());
        assert!(validate_scales(&[0.2, 0.1, 0.3]).is_err());
        assert!(validate_scales(&[0.1, 0.2]).is_ok());
    }
}
