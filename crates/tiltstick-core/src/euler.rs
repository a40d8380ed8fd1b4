use crate::types::{CalibrationOffset, EulerAngles};
use glam::Quat;

/// Decompose a unit quaternion into yaw/pitch/roll degrees.
///
/// Intrinsic Z-Y-X order: yaw about Z, then pitch about Y, then roll
/// about X. Closed-form conversion; the only branch is the gimbal-lock
/// clamp when the pitch term leaves asin's domain.
pub fn decompose(q: Quat) -> EulerAngles {
    let (w, x, y, z) = (q.w, q.x, q.y, q.z);

    let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));

    // Gimbal lock: |s| can exceed 1 by float error (or exactly reach it at
    // pitch = +/-90). Clamp to a quarter turn carrying the sign of s so the
    // output stays continuous through the singularity.
    let s = 2.0 * (w * y - z * x);
    let pitch = if s.abs() >= 1.0 {
        (std::f32::consts::FRAC_PI_2).copysign(s)
    } else {
        s.asin()
    };

    let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

    EulerAngles {
        yaw: yaw.to_degrees(),
        pitch: pitch.to_degrees(),
        roll: roll.to_degrees(),
    }
}

/// Wrap an angle into (-180, 180] by repeated full-turn adjustment.
///
/// Exactly +180 is preserved, not flipped to -180, so a reading sitting on
/// the boundary doesn't flap between the two ends of the range.
pub fn wrap_degrees(mut angle: f32) -> f32 {
    while angle > 180.0 {
        angle -= 360.0;
    }
    while angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

/// Subtract the calibration offset and wrap each component back into
/// (-180, 180]. Idempotent for a zero offset.
pub fn apply_offset(raw: EulerAngles, offset: &CalibrationOffset) -> EulerAngles {
    EulerAngles {
        yaw: wrap_degrees(raw.yaw - offset.yaw),
        pitch: wrap_degrees(raw.pitch - offset.pitch),
        roll: wrap_degrees(raw.roll - offset.roll),
    }
}
