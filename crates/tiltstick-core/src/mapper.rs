use crate::types::{AxisSample, EulerAngles};

/// Input domain: wrapped angles in degrees.
const IN_MIN: f32 = -180.0;
const IN_MAX: f32 = 180.0;

/// Maps wrapped angles from [-180, 180] degrees onto the output device's
/// signed axis range.
#[derive(Debug, Clone, Copy)]
pub struct AxisMapper {
    out_min: i16,
    out_max: i16,
}

impl AxisMapper {
    pub fn new(out_min: i16, out_max: i16) -> Self {
        Self { out_min, out_max }
    }

    /// Linearly map one angle to an axis value, rounded to the nearest
    /// integer. Wrapping upstream already keeps the input inside the
    /// domain; the clamp catches a boundary off-by-one before the value
    /// narrows to i16.
    pub fn map(&self, angle_deg: f32) -> i16 {
        let span = (self.out_max - self.out_min) as f32;
        let value = (angle_deg - IN_MIN) * span / (IN_MAX - IN_MIN) + self.out_min as f32;
        value
            .round()
            .clamp(self.out_min as f32, self.out_max as f32) as i16
    }

    /// Map a full angle triple: yaw to x, pitch to y, roll to z.
    pub fn map_angles(&self, angles: &EulerAngles) -> AxisSample {
        AxisSample {
            x: self.map(angles.yaw),
            y: self.map(angles.pitch),
            z: self.map(angles.roll),
        }
    }
}
