use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that halt a build before anything is emitted
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Plugin configuration not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse plugin configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required field '{0}' in plugin configuration")]
    MissingField(&'static str),

    #[error("Invalid plugin name '{0}': must be a single path segment")]
    InvalidName(String),
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = ConfigError::MissingField("name");
        assert_eq!(
            err.to_string(),
            "Missing required field 'name' in plugin configuration"
        );
    }

    #[test]
    fn test_not_found_shows_path() {
        let err = ConfigError::NotFound(PathBuf::from("/tmp/plugin.toml"));
        assert!(err.to_string().contains("/tmp/plugin.toml"));
    }
}
