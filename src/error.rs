use std::error::Error;
use std::fmt;

/// Error type for the validating surfaces (solver, scenario loading, CLI).
///
/// The integrator itself never fails: bad numbers propagate as NaN or
/// infinity. Only callers that ask for validation see these.
#[derive(Debug)]
pub enum ProjectileError {
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    Io(std::io::Error),
    Config(serde_yaml::Error),
    Message(String),
}

impl fmt::Display for ProjectileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectileError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid {}: {} ({})", name, value, reason)
            }
            ProjectileError::Io(e) => write!(f, "IO error: {}", e),
            ProjectileError::Config(e) => write!(f, "Scenario parse error: {}", e),
            ProjectileError::Message(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for ProjectileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProjectileError::Io(e) => Some(e),
            ProjectileError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProjectileError {
    fn from(err: std::io::Error) -> Self {
        ProjectileError::Io(err)
    }
}

impl From<serde_yaml::Error> for ProjectileError {
    fn from(err: serde_yaml::Error) -> Self {
        ProjectileError::Config(err)
    }
}

impl From<String> for ProjectileError {
    fn from(msg: String) -> Self {
        ProjectileError::Message(msg)
    }
}

impl From<&str> for ProjectileError {
    fn from(msg: &str) -> Self {
        ProjectileError::Message(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ProjectileError::InvalidParameter {
            name: "mass",
            value: 0.0,
            reason: "must be greater than zero",
        };
        assert_eq!(err.to_string(), "Invalid mass: 0 (must be greater than zero)");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_str_and_string() {
        let a: ProjectileError = "boom".into();
        let b: ProjectileError = String::from("boom").into();
        assert_eq!(a.to_string(), "boom");
        assert_eq!(b.to_string(), "boom");
    }

    #[test]
    fn test_io_error_has_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
        let err = ProjectileError::from(io);
        assert!(err.to_string().starts_with("IO error:"));
        assert!(err.source().is_some());
    }
}
