use crate::calibration;
use crate::error::TrackerError;
use crate::euler;
use crate::mapper::AxisMapper;
use crate::quat;
use crate::source::OrientationSource;
use crate::types::{AxisSample, CalibrationOffset, EulerAngles};
use glam::Quat;
use std::time::Duration;

/// Run one raw quaternion through the full pipeline against a fixed
/// offset: normalize, decompose, subtract-and-wrap, map.
///
/// Pure apart from the error path; the driver loop owns fetching and
/// emission, so the core stays decoupled from polling and timing.
pub fn process_sample(
    raw: Quat,
    offset: &CalibrationOffset,
    mapper: &AxisMapper,
) -> Result<AxisSample, TrackerError> {
    let unit = quat::normalize(raw)?;
    let angles = euler::decompose(unit);
    let centered = euler::apply_offset(angles, offset);
    Ok(mapper.map_angles(&centered))
}

/// Pipeline state: the calibration offset plus the output mapping.
///
/// Owned by the single processing task. The offset has exactly one writer
/// ([`Tracker::recenter`]) and is replaced in one assignment on
/// completion, so per-sample processing sees either the old or the new
/// triple in full, and keeps using the old one while a recenter is
/// gathering samples.
pub struct Tracker {
    offset: CalibrationOffset,
    mapper: AxisMapper,
    recenter_samples: u32,
    recenter_interval: Duration,
}

impl Tracker {
    pub fn new(mapper: AxisMapper, recenter_samples: u32, recenter_interval: Duration) -> Self {
        Self {
            offset: CalibrationOffset::default(),
            mapper,
            // An average needs at least one sample.
            recenter_samples: recenter_samples.max(1),
            recenter_interval,
        }
    }

    pub fn offset(&self) -> CalibrationOffset {
        self.offset
    }

    /// Process one raw sample into an axis sample, or `None` when the
    /// sample is degenerate (that cycle emits nothing).
    pub fn process(&self, raw: Quat) -> Option<AxisSample> {
        match process_sample(raw, &self.offset, &self.mapper) {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::trace!(?e, "Dropping sample");
                None
            }
        }
    }

    /// Decompose one raw sample into centered angles, for diagnostics.
    pub fn centered_angles(&self, raw: Quat) -> Option<EulerAngles> {
        let unit = quat::normalize(raw).ok()?;
        Some(euler::apply_offset(euler::decompose(unit), &self.offset))
    }

    /// Establish a new zero reference from fresh sensor samples.
    ///
    /// Blocks its task for the duration of the gather loop; on failure
    /// the previous offset stays in effect.
    pub async fn recenter(
        &mut self,
        source: &mut dyn OrientationSource,
    ) -> Result<(), TrackerError> {
        let offset =
            calibration::gather_offset(source, self.recenter_samples, self.recenter_interval)
                .await?;
        self.offset = offset;
        tracing::info!(
            yaw = offset.yaw,
            pitch = offset.pitch,
            roll = offset.roll,
            "Zero reference set"
        );
        Ok(())
    }
}
