use thiserror::Error;
use wheel_core::WheelError;

#[derive(Debug, Error)]
pub enum HidError {
    #[error(transparent)]
    Core(#[from] WheelError),
}

pub type HidResult<T> = Result<T, HidError>;
