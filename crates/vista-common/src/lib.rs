pub mod errors;
pub mod id;
pub mod types;

pub use errors::{AccessDenied, ConfigError, PlatformError, VistaError};
pub use id::{new_id, SessionId};
pub use types::{Dimension, DimensionParseError};
