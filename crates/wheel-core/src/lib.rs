//! `wheel-core` — foundational types for the VR-to-joystick dataflow engine.
//!
//! This crate is a dependency of every other `wheel-*` crate. It intentionally
//! has no `wheel-*` dependencies and only one external one (`thiserror`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                    |
//! |-------------|--------------------------------------------------------------|
//! | [`ids`]     | `DeviceIndex`                                                |
//! | [`time`]    | `Tick`, `TickClock`, `TickContext`                           |
//! | [`geometry`]| `Vec3`, `Pose3x4`, `Axis2`                                   |
//! | [`vr_state`]| `ControllerRawState`, `DevicePoseState`, `DeviceButtonState`, `VrStatePackage`, `DeviceSnapshot` |
//! | [`button`]  | `TickState`, `ButtonState`, `tick_state_for`                 |
//! | [`ops`]     | `Comparator`                                                 |
//! | [`device`]  | `DeviceClass`, `ControllerRole`, `ButtonEvent`                |
//! | [`error`]   | `WheelError`, `WheelResult`                                  |

pub mod button;
pub mod device;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod ops;
pub mod time;
pub mod vr_state;


pub use button::{tick_state_for, ButtonState, TickState};
pub use device::{ButtonEvent, ControllerRole, DeviceClass};
pub use error::{WheelError, WheelResult};
pub use geometry::{Axis2, Pose3x4, Vec3};
pub use ids::DeviceIndex;
pub use ops::Comparator;
pub use time::{Tick, TickClock, TickContext};
pub use vr_state::{ControllerRawState, DeviceButtonState, DevicePoseState, DeviceSnapshot, VrStatePackage};
