use glam::Quat;
use tiltstick_core::{Accuracy, OrientationSample, OrientationSource};

/// Stand-in orientation source for running without hardware.
///
/// Sweeps a slow sinusoidal head motion and comes up empty on every 16th
/// poll, which keeps the "nothing ready" path exercised.
pub struct SimulatedSensor {
    tick: u64,
}

impl SimulatedSensor {
    pub fn new() -> Self {
        Self { tick: 0 }
    }
}

impl OrientationSource for SimulatedSensor {
    fn try_get_orientation(&mut self) -> Option<OrientationSample> {
        self.tick += 1;
        if self.tick % 16 == 0 {
            return None;
        }

        let t = self.tick as f32 / 200.0;
        let yaw = (t * 0.31).sin() * 40.0;
        let pitch = (t * 0.47).sin() * 15.0;
        let roll = (t * 0.23).sin() * 10.0;

        let quaternion = Quat::from_rotation_z(yaw.to_radians())
            * Quat::from_rotation_y(pitch.to_radians())
            * Quat::from_rotation_x(roll.to_radians());

        Some(OrientationSample {
            quaternion,
            accuracy: Accuracy::High,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_unit_quaternions() {
        let mut sensor = SimulatedSensor::new();
        for _ in 0..100 {
            if let Some(sample) = sensor.try_get_orientation() {
                assert!((sample.quaternion.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn periodically_reports_not_ready() {
        let mut sensor = SimulatedSensor::new();
        let misses = (0..160)
            .filter(|_| sensor.try_get_orientation().is_none())
            .count();
        assert_eq!(misses, 10);
    }
}
