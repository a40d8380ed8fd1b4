use crate::error::TrackerError;
use glam::Quat;

/// Norms below this are treated as degenerate rather than divided through.
const MIN_NORM: f32 = 1e-9;

/// Scale a raw orientation quaternion to unit length.
///
/// The sensor occasionally hands over garbage (all zeros on a cold read,
/// NaN after a bus glitch); those fail with [`TrackerError::DegenerateInput`]
/// instead of letting a NaN flow through the pipeline.
pub fn normalize(raw: Quat) -> Result<Quat, TrackerError> {
    let norm = raw.length();
    if !norm.is_finite() || norm < MIN_NORM {
        return Err(TrackerError::DegenerateInput);
    }
    Ok(raw * (1.0 / norm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_scales_to_unit_length() {
        let q = normalize(Quat::from_xyzw(2.0, 0.0, 0.0, 2.0)).unwrap();
        assert!((q.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn unit_input_is_unchanged() {
        let input = Quat::from_rotation_z(0.5);
        let q = normalize(input).unwrap();
        assert!((q.x - input.x).abs() < 1e-6);
        assert!((q.w - input.w).abs() < 1e-6);
    }

    #[test]
    fn zero_norm_is_degenerate() {
        let err = normalize(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, TrackerError::DegenerateInput);
    }

    #[test]
    fn non_finite_input_is_degenerate() {
        let err = normalize(Quat::from_xyzw(f32::NAN, 0.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(err, TrackerError::DegenerateInput);

        let err = normalize(Quat::from_xyzw(f32::INFINITY, 0.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(err, TrackerError::DegenerateInput);
    }
}
