use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a remote call, as reported by dpservice.
///
/// A zero `code` means success; anything else is an error, which the flat
/// client either raises or (for ignored codes) leaves on the returned object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub code: u32,
    pub message: String,
}

impl Status {
    pub fn new(code: u32, message: impl AsRef<str>) -> Self {
        Self {
            code,
            message: message.as_ref().into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} ({})", self.code, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!("0", Status::default().to_string());
        assert_eq!("201 (not found)", Status::new(201, "not found").to_string());
    }

    #[test]
    fn is_ok() {
        assert!(Status::default().is_ok());
        assert!(!Status::new(201, "").is_ok());
    }
}
