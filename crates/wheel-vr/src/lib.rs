//! `wheel-vr` — the VR State Source: the dataflow graph's root node.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|---------------------------------------------------------|
//! | [`runtime`]     | `VrRuntime` trait, `VrEvent` — the external collaborator|
//! | [`device_index`]| `DeviceIndexTable` — (class, role) -> device index       |
//! | [`source`]      | `VrStateSource`, `DeviceWaitPolicy`                      |
//! | [`error`]       | `VrError`, `VrResult<T>`                                 |

pub mod device_index;
pub mod error;
pub mod runtime;
pub mod source;

#[cfg(test)]
mod tests;

pub use device_index::DeviceIndexTable;
pub use error::{VrError, VrResult};
pub use runtime::{VrEvent, VrEventKind, VrRuntime};
pub use source::{DeviceWaitPolicy, VrStateSource};
