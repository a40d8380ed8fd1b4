use crate::types::{AxisSample, OrientationSample};

/// Non-blocking poll over whatever transport delivers fused orientation
/// samples. `None` means nothing is ready yet, a normal condition for a
/// polled sensor, not an error.
pub trait OrientationSource {
    fn try_get_orientation(&mut self) -> Option<OrientationSample>;
}

/// Outbound side of the pipeline. Implementations own device readiness:
/// a sink whose transport is not ready silently drops the sample.
pub trait AxisSink {
    fn emit(&mut self, sample: AxisSample);
}
