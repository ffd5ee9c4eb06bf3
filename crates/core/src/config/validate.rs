use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - TMDB API key is present (fatal at startup, not per request)
/// - Server port is not 0
/// - Suggestion limits are usable
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.tmdb.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "tmdb.api_key is required".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.suggestions.max_suggestions == 0 {
        return Err(ConfigError::ValidationError(
            "suggestions.max_suggestions cannot be 0".to_string(),
        ));
    }

    if config.suggestions.min_query_len == 0 {
        return Err(ConfigError::ValidationError(
            "suggestions.min_query_len cannot be 0".to_string(),
        ));
    }

    Ok(())
}
