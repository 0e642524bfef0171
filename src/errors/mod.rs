mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    ValidationError,
};
pub use error::{GatewayError, GatewayResult};
pub use mapping::{ErrorMapper, GatewayErrorDetail, GatewayErrorResponse};
