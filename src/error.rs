use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("invalid interval: left endpoint {left} is greater than right endpoint {right}")]
    InvalidInterval { left: String, right: String },
}

impl IntervalError {
    pub(crate) fn invalid<N: Debug>(left: &N, right: &N) -> Self {
        IntervalError::InvalidInterval {
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    }
}

pub type IntervalResult<T> = std::result::Result<T, IntervalError>;
