use glam::Quat;

/// Confidence level reported by the sensor's fusion engine alongside each
/// orientation sample. Passed through to diagnostics unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accuracy {
    Unreliable,
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accuracy::Unreliable => write!(f, "unreliable"),
            Accuracy::Low => write!(f, "low"),
            Accuracy::Medium => write!(f, "medium"),
            Accuracy::High => write!(f, "high"),
            Accuracy::Unknown => write!(f, "unknown"),
        }
    }
}

/// One raw reading from the orientation source.
///
/// The quaternion comes straight off the sensor and is not assumed to be
/// unit-norm; the pipeline normalizes it before use.
#[derive(Debug, Clone, Copy)]
pub struct OrientationSample {
    pub quaternion: Quat,
    pub accuracy: Accuracy,
}

impl OrientationSample {
    pub fn new(quaternion: Quat) -> Self {
        Self {
            quaternion,
            accuracy: Accuracy::Unknown,
        }
    }
}

/// Orientation decomposed into yaw/pitch/roll, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Rotation about Z, (-180, 180].
    pub yaw: f32,
    /// Rotation about Y, [-90, 90].
    pub pitch: f32,
    /// Rotation about X, (-180, 180].
    pub roll: f32,
}

impl EulerAngles {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }
}

/// Zero-reference established by recentering, in degrees.
///
/// One writer (the recenter operation), replaced wholesale on completion;
/// every per-sample pipeline run reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalibrationOffset {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

/// One mapped output sample for the axis device: x = yaw, y = pitch,
/// z = roll, each within the configured output range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}
