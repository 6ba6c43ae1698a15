use crate::http::HttpError;

/// A form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Everything an admin API call can fail with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Non-2xx status. `message` comes from the body when it has one.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx response whose envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to decode {what} response: {reason}")]
    Decode { what: &'static str, reason: String },
    #[error("Not signed in")]
    Unauthenticated,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The session is missing or was rejected by the server.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthenticated) || self.status() == Some(401)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_server_message() {
        let err = ApiError::Status {
            status: 409,
            message: "Role already assigned".to_owned(),
        };
        assert_eq!(err.to_string(), "Role already assigned");
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::Unauthenticated.is_unauthorized());
        let err = ApiError::Status {
            status: 401,
            message: "expired".to_owned(),
        };
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_validation_display() {
        let err: ApiError = ValidationError::new("limit", "must be at most 100").into();
        assert_eq!(err.to_string(), "limit: must be at most 100");
    }
}
