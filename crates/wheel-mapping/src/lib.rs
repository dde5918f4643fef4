//! `wheel-mapping` — the Mapping Host: binds terminal axis/button nodes to
//! virtual-device ids, waits for required VR devices, and owns the
//! fixed-frequency tick loop that drives the node graph and publishes its
//! results (§4.6).
//!
//! | module | contents |
//! |---|---|
//! | [`config`] | `MappingConfig` — tick rate, device-wait policy, required devices |
//! | [`observer`] | `MappingObserver`, `NoopObserver` |
//! | [`builder`] | `MappingHostBuilder` |
//! | [`host`] | `MappingHost` and its tick loop |
//! | [`error`] | `MappingError`, `MappingResult` |

mod builder;
mod config;
mod error;
mod host;
mod observer;

#[cfg(test)]
mod tests;

pub use builder::MappingHostBuilder;
pub use config::MappingConfig;
pub use error::{MappingError, MappingResult};
pub use host::MappingHost;
pub use observer::{MappingObserver, NoopObserver};
