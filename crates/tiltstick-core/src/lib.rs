//! Orientation-to-axis control pipeline.
//!
//! Takes raw orientation quaternions from an external fusion engine and
//! turns them into bounded axis values for an input device:
//! normalize -> decompose to yaw/pitch/roll -> subtract the calibration
//! offset and wrap -> map onto the device's axis range.
//!
//! The crate is transport-agnostic: sensors and output devices sit behind
//! the [`source::OrientationSource`] and [`source::AxisSink`] traits, and
//! the driver loop lives in the binary.

pub mod calibration;
pub mod command;
pub mod error;
pub mod euler;
pub mod mapper;
pub mod pipeline;
pub mod quat;
pub mod source;
pub mod types;

pub use command::{parse_command, Command};
pub use error::TrackerError;
pub use mapper::AxisMapper;
pub use pipeline::{process_sample, Tracker};
pub use source::{AxisSink, OrientationSource};
pub use types::{Accuracy, AxisSample, CalibrationOffset, EulerAngles, OrientationSample};
