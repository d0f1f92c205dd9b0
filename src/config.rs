use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for overriding default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Create PathConfig from CLI arguments and environment variables
    ///
    /// Priority: CLI args → ENV var (EASEL_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| {
            std::env::var("EASEL_CONFIG_DIR").ok().map(PathBuf::from)
        });

        Self { config_dir }
    }
}

/// Get path to a configuration file
///
/// Priority:
/// 1. CLI --config-dir argument
/// 2. EASEL_CONFIG_DIR environment variable
/// 3. Platform-specific config directory from dirs-next (default)
///
/// Platform paths:
/// - Linux: ~/.config/easel/{name}
/// - macOS: ~/Library/Application Support/easel/{name}
/// - Windows: %APPDATA%\easel\{name}
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    get_dir(config, dirs_next::config_dir).join(name)
}

/// Get path to a data file (logs, etc.)
///
/// Same priority as `config_file`, but falls back to the platform data
/// directory (~/.local/share/easel on Linux).
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    get_dir(config, dirs_next::data_dir).join(name)
}

/// Ensure that configuration and data directories exist
///
/// Creates directories if they don't exist. Returns error if creation fails.
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = get_dir(config, dirs_next::config_dir);
    let data_dir = get_dir(config, dirs_next::data_dir);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;
    }

    // Only create data_dir if it's different from config_dir
    if data_dir != config_dir && !data_dir.exists() {
        std::fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory: {}", data_dir.display())
        })?;
    }

    Ok(())
}

/// Resolve a directory: custom override first, then platform default
fn get_dir(config: &PathConfig, platform_dir: fn() -> Option<PathBuf>) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    if let Some(dir) = platform_dir() {
        return dir.join("easel");
    }

    // Fallback: "." if everything else fails
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        let path = config_file("test.json", &config);
        assert_eq!(path, PathBuf::from("/custom/test.json"));
    }

    #[test]
    fn test_data_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        let path = data_file("easel.log", &config);
        assert_eq!(path, PathBuf::from("/custom/easel.log"));
    }

    #[test]
    fn test_config_file_uses_platform_defaults() {
        let config = PathConfig { config_dir: None };

        let path = config_file("test.json", &config);
        // Should contain "easel" and "test.json" in the path
        assert!(path.to_string_lossy().contains("easel"));
        assert!(path.to_string_lossy().contains("test.json"));
    }

    #[test]
    fn test_env_var_is_picked_up_by_from_env_and_cli() {
        // CLI dir takes priority over everything
        let config = PathConfig::from_env_and_cli(Some(PathBuf::from("/cli-dir")));
        assert_eq!(config.config_dir, Some(PathBuf::from("/cli-dir")));
    }
}
