use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Target processing rate in Hz. The pipeline itself is rate-agnostic;
    /// this just paces the driver loop.
    pub update_rate_hz: u32,
    /// Output axis range.
    pub axis: AxisConfig,
    /// Recenter (zero-reference) sampling.
    pub recenter: RecenterConfig,
    /// Throttled status reporting.
    pub diagnostics: DiagnosticsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            update_rate_hz: 200,
            axis: AxisConfig::default(),
            recenter: RecenterConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Lower bound of the device axis range.
    pub out_min: i16,
    /// Upper bound of the device axis range.
    pub out_max: i16,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            out_min: -127,
            out_max: 127,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecenterConfig {
    /// Number of successful sensor samples averaged into the offset.
    pub samples: u32,
    /// Delay between recenter sample polls, in milliseconds.
    pub interval_ms: u64,
}

impl Default for RecenterConfig {
    fn default() -> Self {
        Self {
            samples: 10,
            interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Whether the periodic status report is logged at all.
    pub enabled: bool,
    /// Minimum gap between status reports, in milliseconds.
    pub interval_ms: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 100,
        }
    }
}
