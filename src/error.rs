use std::path::PathBuf;

/// Errors that can occur when loading configuration.
///
/// Game rule conditions (column full, game over, out-of-range column)
/// are not errors: the engine reports them as `DropResult` values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.width must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.width must be >= 4"
        );
    }
}
