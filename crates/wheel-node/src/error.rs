use thiserror::Error;
use wheel_core::WheelError;
use wheel_vr::VrError;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error(transparent)]
    Core(#[from] WheelError),

    #[error(transparent)]
    Vr(#[from] VrError),
}

pub type NodeResult<T> = Result<T, NodeError>;
