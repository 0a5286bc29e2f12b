use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised by the speech bridge.
///
/// `NotSupported` is the capability-absence condition: callers show a notice
/// and disable the feature rather than treating it as fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("not supported: {0}")]
    NotSupported(String),

    #[error("speech engine error: {0}")]
    Engine(String),

    #[error("voice call failed: {0}")]
    CallFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NovaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("speech.rate = 20 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: speech.rate = 20 is out of range"
        );
    }

    #[test]
    fn speech_error_display() {
        let err = SpeechError::NotSupported("speech recognition".into());
        assert_eq!(err.to_string(), "not supported: speech recognition");

        let err = SpeechError::Engine("not-allowed".into());
        assert_eq!(err.to_string(), "speech engine error: not-allowed");

        let err = SpeechError::CallFailed("dial timeout".into());
        assert_eq!(err.to_string(), "voice call failed: dial timeout");
    }

    #[test]
    fn nova_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let nova_err: NovaError = config_err.into();
        assert!(matches!(nova_err, NovaError::Config(_)));
        assert!(nova_err.to_string().contains("bad toml"));
    }

    #[test]
    fn nova_error_from_speech() {
        let speech_err = SpeechError::Engine("audio-capture".into());
        let nova_err: NovaError = speech_err.into();
        assert!(matches!(nova_err, NovaError::Speech(_)));
        assert!(nova_err.to_string().contains("audio-capture"));
    }

    #[test]
    fn nova_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let nova_err: NovaError = io_err.into();
        assert!(matches!(nova_err, NovaError::Io(_)));
        assert!(nova_err.to_string().contains("file missing"));
    }

    #[test]
    fn nova_error_other_variants() {
        let err = NovaError::Ai("model unavailable".into());
        assert_eq!(err.to_string(), "ai error: model unavailable");

        let err = NovaError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
