use deadpool_redis::{redis::RedisError, CreatePoolError, PoolError};
use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // serde errors
    #[error("JSON Serialization/Deserialization Error")]
    JsonError(#[from] serde_json::Error),
    // storage errors
    #[error("Storage I/O Error: {0}")]
    IoError(#[from] std::io::Error),
    // redis errors
    #[error(transparent)]
    PoolInit(#[from] CreatePoolError),
    #[error("Redis pool error: {0}")]
    PoolGet(#[from] PoolError),
    #[error("Redis error")]
    RedisError(#[from] RedisError),
    #[error("Configuration Error: {0}")]
    Config(Cow<'static, str>),
    // Custom Errors
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Conflict: {0}")]
    Conflict(Cow<'static, str>),
    #[error("Invalid: {0}")]
    Invalid(Cow<'static, str>),
}

impl From<validator::ValidationErrors> for SystemError {
    fn from(err: validator::ValidationErrors) -> Self {
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect::<Vec<_>>();

        if message.is_empty() {
            SystemError::Invalid(err.to_string().into())
        } else {
            SystemError::Invalid(message.join(", ").into())
        }
    }
}

impl SystemError {
    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn config(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Config(msg.into())
    }

    /// Text suitable for showing to the user, without the kind prefix.
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            SystemError::NotFound(msg)
            | SystemError::Conflict(msg)
            | SystemError::Invalid(msg)
            | SystemError::Config(msg) => msg.clone(),
            _ => {
                log::error!("Internal Error: {:?}", self);
                "An error occurred".into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_message_strips_kind_prefix() {
        let err = SystemError::conflict("Email already in use");
        assert_eq!(err.to_string(), "Conflict: Email already in use");
        assert_eq!(err.message(), "Email already in use");
    }

    #[test]
    fn test_infrastructure_errors_are_masked() {
        let err: SystemError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.message(), "An error occurred");
    }

    #[test]
    fn test_validation_errors_become_invalid() {
        let probe = Probe { email: "not-an-email".into() };
        let err: SystemError = probe.validate().unwrap_err().into();
        assert!(matches!(err, SystemError::Invalid(ref msg) if msg == "Invalid email format"));
    }
}
