/// Return for Postbox operations that can succeed (OK) or fail (Err)
pub type Result<T> = std::result::Result<T, PostboxError>;

/// All the possible errors from Postbox operations
#[derive(Debug)]
pub enum PostboxError {
    Redis(redis::RedisError),
    Pool(deadpool_redis::PoolError),
    CreatePool(deadpool_redis::CreatePoolError),
    Http(reqwest::Error),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Store(String),           // error message reported by the store itself
    UnexpectedReply(String), // description of the reply we could not interpret
    MissingEnvVar(&'static str),
    PlaceholderEnvVar(&'static str),
    InvalidConfig(String), // message with details what is invalid
}

impl PostboxError {
    /// Whether the error looks like a connectivity problem rather than a protocol or data one.
    ///
    /// Only used to pick log wording; callers never branch on it.
    pub fn is_network(&self) -> bool {
        use PostboxError::*;
        match self {
            Redis(err) => {
                err.is_io_error()
                    || err.is_connection_refusal()
                    || err.is_connection_dropped()
                    || err.is_timeout()
            }
            Pool(deadpool_redis::PoolError::Backend(err)) => {
                err.is_io_error() || err.is_connection_refusal() || err.is_timeout()
            }
            Pool(deadpool_redis::PoolError::Timeout(_)) => true,
            Http(err) => err.is_connect() || err.is_timeout() || err.is_request(),
            Io(_) => true,
            _ => false,
        }
    }
}

impl From<redis::RedisError> for PostboxError {
    fn from(err: redis::RedisError) -> Self {
        PostboxError::Redis(err)
    }
}

impl From<deadpool_redis::PoolError> for PostboxError {
    fn from(err: deadpool_redis::PoolError) -> Self {
        PostboxError::Pool(err)
    }
}

impl From<deadpool_redis::CreatePoolError> for PostboxError {
    fn from(err: deadpool_redis::CreatePoolError) -> Self {
        PostboxError::CreatePool(err)
    }
}

impl From<reqwest::Error> for PostboxError {
    fn from(err: reqwest::Error) -> Self {
        PostboxError::Http(err)
    }
}

impl From<std::io::Error> for PostboxError {
    fn from(err: std::io::Error) -> Self {
        PostboxError::Io(err)
    }
}

impl From<serde_json::Error> for PostboxError {
    fn from(err: serde_json::Error) -> Self {
        PostboxError::Serialization(err)
    }
}

impl std::fmt::Display for PostboxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PostboxError::*;
        match self {
            Redis(err) => write!(f, "Redis error: {}", err),
            Pool(err) => write!(f, "Connection pool error: {}", err),
            CreatePool(err) => write!(f, "Could not create connection pool: {}", err),
            Http(err) => write!(f, "HTTP error: {}", err),
            Io(err) => write!(f, "I/O error: {}", err),
            Serialization(err) => write!(f, "Serialization error: {}", err),
            Store(msg) => write!(f, "Store error: {}", msg),
            UnexpectedReply(msg) => write!(f, "Unexpected store reply: {}", msg),
            MissingEnvVar(var) => write!(f, "Missing environment variable: {}", var),
            PlaceholderEnvVar(var) => {
                write!(f, "Environment variable still has its placeholder value: {}", var)
            }
            InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for PostboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use PostboxError::*;
        match self {
            Redis(err) => Some(err),
            Pool(err) => Some(err),
            CreatePool(err) => Some(err),
            Http(err) => Some(err),
            Io(err) => Some(err),
            Serialization(err) => Some(err),
            Store(_) => None,
            UnexpectedReply(_) => None,
            MissingEnvVar(_) => None,
            PlaceholderEnvVar(_) => None,
            InvalidConfig(_) => None,
        }
    }
}
