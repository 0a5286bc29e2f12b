pub mod errors;
pub mod id;

pub use errors::{ConfigError, NovaError, SpeechError};
pub use id::{new_id, UtteranceId};

pub type Result<T> = std::result::Result<T, NovaError>;
