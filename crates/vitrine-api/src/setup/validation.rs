//! Startup configuration validation

use anyhow::{bail, Result};
use vitrine_core::Config;

/// Validate configuration invariants that env parsing alone cannot catch.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.upload_dir.trim().is_empty() {
        bail!("UPLOAD_DIR must not be empty");
    }

    if !config.public_base_url.starts_with("http://")
        && !config.public_base_url.starts_with("https://")
    {
        bail!(
            "PUBLIC_BASE_URL must be an absolute http(s) URL, got '{}'",
            config.public_base_url
        );
    }

    if config.max_file_size_bytes == 0 {
        bail!("MAX_FILE_SIZE_MB must be at least 1");
    }

    if config.max_files_per_upload == 0 {
        bail!("MAX_FILES_PER_UPLOAD must be at least 1");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server_port: 3000,
            database_url: "postgres://localhost/vitrine".to_string(),
            db_max_connections: 5,
            db_timeout_seconds: 30,
            upload_dir: "uploads".to_string(),
            public_base_url: "http://localhost:3000".to_string(),
            max_file_size_bytes: 40 * 1024 * 1024,
            max_files_per_upload: 10,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let mut config = base_config();
        config.public_base_url = "localhost:3000".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut config = base_config();
        config.max_files_per_upload = 0;
        assert!(validate_config(&config).is_err());

        let mut config = base_config();
        config.max_file_size_bytes = 0;
        assert!(validate_config(&config).is_err());
    }
}
