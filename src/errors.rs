use std::fmt;

#[derive(Debug, Clone)]
pub enum GolinksError {
    BackendConnection(String),
    BackendOperation(String),
    BackendNotFound(String),
    Serialization(String),
}

impl GolinksError {
    pub fn code(&self) -> &'static str {
        match self {
            GolinksError::BackendConnection(_) => "E001",
            GolinksError::BackendOperation(_) => "E002",
            GolinksError::BackendNotFound(_) => "E003",
            GolinksError::Serialization(_) => "E004",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            GolinksError::BackendConnection(_) => "Backend Connection Error",
            GolinksError::BackendOperation(_) => "Backend Operation Error",
            GolinksError::BackendNotFound(_) => "Backend Not Found",
            GolinksError::Serialization(_) => "Serialization Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GolinksError::BackendConnection(msg) => msg,
            GolinksError::BackendOperation(msg) => msg,
            GolinksError::BackendNotFound(msg) => msg,
            GolinksError::Serialization(msg) => msg,
        }
    }
}

impl fmt::Display for GolinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for GolinksError {}

// 便捷的构造函数
impl GolinksError {
    pub fn backend_connection<T: Into<String>>(msg: T) -> Self {
        GolinksError::BackendConnection(msg.into())
    }

    pub fn backend_not_found<T: Into<String>>(msg: T) -> Self {
        GolinksError::BackendNotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        GolinksError::Serialization(msg.into())
    }
}

impl From<sled::Error> for GolinksError {
    fn from(err: sled::Error) -> Self {
        GolinksError::BackendOperation(err.to_string())
    }
}

impl From<redis::RedisError> for GolinksError {
    fn from(err: redis::RedisError) -> Self {
        GolinksError::BackendOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GolinksError {
    fn from(err: serde_json::Error) -> Self {
        GolinksError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GolinksError>;
