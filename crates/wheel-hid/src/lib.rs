//! `wheel-hid` — the virtual joystick/gamepad external collaborator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|--------------------------------------------------------------|
//! | [`device`] | `VirtualDevice` trait, `StandardAxis`, `AXIS_PRECISION`        |
//! | [`memory`] | `MemoryDevice` — in-memory test double                        |
//! | [`error`]  | `HidError`, `HidResult<T>`                                     |

pub mod device;
pub mod error;
pub mod memory;

#[cfg(test)]
mod tests;

pub use device::{scale_axis_value, StandardAxis, VirtualDevice, AXIS_PRECISION};
pub use error::{HidError, HidResult};
pub use memory::MemoryDevice;
