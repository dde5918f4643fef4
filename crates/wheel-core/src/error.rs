//! Framework error type.
//!
//! Sub-crates may define their own error enums and wrap `WheelError` as one
//! variant, or convert into it via `From`. Both patterns appear in this
//! workspace; prefer whichever keeps error sites clean.

use std::time::Duration;

use thiserror::Error;

use crate::device::{ControllerRole, DeviceClass};
use crate::ids::DeviceIndex;

/// The top-level error type for `wheel-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum WheelError {
    /// Raised while building a node graph: a named dependency was never
    /// bound (construction-time error, per the design's "construction
    /// errors" class).
    #[error("node {node}: missing dependency '{dependency}'")]
    MissingDependency { node: String, dependency: String },

    /// No device matches the requested class/role at mapping-construction
    /// time, or became unreachable afterward.
    #[error("no device found for class {class:?}, role {role:?}")]
    NoSuchDevice { class: DeviceClass, role: ControllerRole },

    /// `wait_for_required_devices` exceeded its timeout.
    #[error("timed out after {0:?} waiting for required VR devices")]
    DeviceWaitTimeout(Duration),

    /// A specific device index was requested but the runtime has never
    /// reported it.
    #[error("device {0} not present in VR state package")]
    DeviceNotPresent(DeviceIndex),

    /// The virtual HID device rejected a write (fatal: spec.md classifies
    /// output-device failures as fatal, not transient).
    #[error("virtual device error: {0}")]
    VirtualDevice(String),

    /// The VR runtime reported an unrecoverable error (fatal).
    #[error("VR runtime error: {0}")]
    VrRuntime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `wheel-core` and, where convenient, sub-crates.
pub type WheelResult<T> = Result<T, WheelError>;
