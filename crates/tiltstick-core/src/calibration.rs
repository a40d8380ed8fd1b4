use crate::error::TrackerError;
use crate::euler;
use crate::quat;
use crate::source::OrientationSource;
use crate::types::CalibrationOffset;
use std::time::Duration;

/// Attempt budget as a multiple of the requested sample count. A source
/// that misses three polls for every hit still completes.
const MAX_ATTEMPT_FACTOR: u32 = 4;

/// Gather `samples` fresh orientation readings spaced by `interval`,
/// average their Euler decompositions, and return the average as a new
/// zero reference.
///
/// Fetch misses and degenerate quaternions are skipped without counting
/// toward the sample total, so transiently-unready sensors just stretch
/// the operation. If the source stays dry past the attempt budget the
/// operation fails with [`TrackerError::SensorUnavailable`] and the caller
/// keeps its previous offset.
pub async fn gather_offset(
    source: &mut dyn OrientationSource,
    samples: u32,
    interval: Duration,
) -> Result<CalibrationOffset, TrackerError> {
    debug_assert!(samples > 0);

    let max_attempts = samples * MAX_ATTEMPT_FACTOR;
    let mut collected = 0u32;
    let mut sum = CalibrationOffset::default();

    for attempt in 0..max_attempts {
        if let Some(sample) = source.try_get_orientation() {
            match quat::normalize(sample.quaternion) {
                Ok(unit) => {
                    let angles = euler::decompose(unit);
                    sum.yaw += angles.yaw;
                    sum.pitch += angles.pitch;
                    sum.roll += angles.roll;
                    collected += 1;
                    if collected == samples {
                        break;
                    }
                }
                Err(_) => {
                    tracing::trace!(attempt, "Skipping degenerate sample during recenter");
                }
            }
        }
        tokio::time::sleep(interval).await;
    }

    if collected < samples {
        tracing::warn!(
            collected,
            wanted = samples,
            "Recenter aborted, source never delivered enough samples"
        );
        return Err(TrackerError::SensorUnavailable);
    }

    let n = collected as f32;
    Ok(CalibrationOffset {
        yaw: sum.yaw / n,
        pitch: sum.pitch / n,
        roll: sum.roll / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrientationSample;
    use glam::Quat;

    /// Scripted source: yields each entry in order, `None` entries model
    /// "nothing ready yet" polls.
    struct ScriptedSource {
        script: Vec<Option<Quat>>,
        cursor: usize,
    }

    impl ScriptedSource {
        fn new(script: Vec<Option<Quat>>) -> Self {
            Self { script, cursor: 0 }
        }
    }

    impl OrientationSource for ScriptedSource {
        fn try_get_orientation(&mut self) -> Option<OrientationSample> {
            let entry = self.script.get(self.cursor).copied().flatten();
            self.cursor += 1;
            entry.map(OrientationSample::new)
        }
    }

    fn yaw_quat(deg: f32) -> Quat {
        Quat::from_rotation_z(deg.to_radians())
    }

    #[tokio::test(start_paused = true)]
    async fn averages_constant_orientation() {
        let mut source = ScriptedSource::new(vec![Some(yaw_quat(10.0)); 10]);
        let offset = gather_offset(&mut source, 10, Duration::from_millis(100))
            .await
            .unwrap();
        assert!((offset.yaw - 10.0).abs() < 1e-3);
        assert!(offset.pitch.abs() < 1e-3);
        assert!(offset.roll.abs() < 1e-3);
    }

    #[tokio::test(start_paused = true)]
    async fn averages_across_varying_samples() {
        let script = (0..10).map(|i| Some(yaw_quat(i as f32))).collect();
        let mut source = ScriptedSource::new(script);
        let offset = gather_offset(&mut source, 10, Duration::from_millis(100))
            .await
            .unwrap();
        assert!((offset.yaw - 4.5).abs() < 1e-3);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_misses_do_not_count() {
        // Every other poll comes up empty; 10 real samples still arrive
        // within the attempt budget.
        let script = (0..20)
            .map(|i| if i % 2 == 0 { Some(yaw_quat(20.0)) } else { None })
            .collect();
        let mut source = ScriptedSource::new(script);
        let offset = gather_offset(&mut source, 10, Duration::from_millis(100))
            .await
            .unwrap();
        assert!((offset.yaw - 20.0).abs() < 1e-3);
    }

    #[tokio::test(start_paused = true)]
    async fn degenerate_samples_are_skipped() {
        let mut script = vec![Some(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)); 3];
        script.extend(vec![Some(yaw_quat(5.0)); 10]);
        let mut source = ScriptedSource::new(script);
        let offset = gather_offset(&mut source, 10, Duration::from_millis(100))
            .await
            .unwrap();
        assert!((offset.yaw - 5.0).abs() < 1e-3);
    }

    #[tokio::test(start_paused = true)]
    async fn dry_source_fails_within_attempt_budget() {
        let mut source = ScriptedSource::new(vec![None; 64]);
        let err = gather_offset(&mut source, 10, Duration::from_millis(100))
            .await
            .unwrap_err();
        assert_eq!(err, TrackerError::SensorUnavailable);
        // The budget bounds how far the script was consumed.
        assert_eq!(source.cursor, 40);
    }
}
