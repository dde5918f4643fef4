use thiserror::Error;

use wheel_hid::HidError;
use wheel_node::NodeError;
use wheel_vr::VrError;

/// Errors the Mapping Host can raise. Construction and device-timeout
/// errors come from `wheel-vr`/`wheel-node`; a fatal virtual-device write
/// failure is the only error a running host can produce per tick (spec.md
/// §7 classifies it as `runtime-fatal`, not swallowed like a transient).
#[derive(Debug, Error)]
pub enum MappingError {
    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Vr(#[from] VrError),

    #[error(transparent)]
    Hid(#[from] HidError),

    #[error("mapping configuration error: {0}")]
    Config(String),
}

pub type MappingResult<T> = Result<T, MappingError>;
