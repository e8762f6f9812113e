use crate::RpcMethod;
use std::result;
use thiserror::Error;

pub type DpResult<T> = result::Result<T, DpError>;

#[derive(Debug, Error)]
pub enum DpError {
    #[error("`{method}` failed with status {code}: {message}")]
    Status {
        method: RpcMethod,
        code: u32,
        message: String,
    },

    #[error("Deadline exceeded before calling `{method}`")]
    DeadlineExceeded { method: RpcMethod },

    #[error("Call to `{method}` was cancelled")]
    Cancelled { method: RpcMethod },

    #[cfg(test)]
    #[error("InjectedError")]
    InjectedError,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DpError {
    /// Returns the remote status code, if this error came from dpservice.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            DpError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
impl PartialEq<DpError> for DpError {
    fn eq(&self, other: &DpError) -> bool {
        self.to_string() == other.to_string()
    }
}
