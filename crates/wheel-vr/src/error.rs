use thiserror::Error;
use wheel_core::WheelError;

#[derive(Debug, Error)]
pub enum VrError {
    #[error(transparent)]
    Core(#[from] WheelError),
}

pub type VrResult<T> = Result<T, VrError>;
