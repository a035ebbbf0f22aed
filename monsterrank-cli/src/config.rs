//! Config file loading and creation for the monsterrank CLI.
//!
//! Config lives at ~/.config/monsterrank/config.toml.
//! All fields are optional. CLI args override config values.

use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::battle::{BattleConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
pub struct MonsterrankConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# monsterrank configuration
# All values here can be overridden by CLI flags.

# Battle service base URL. Requests go to <endpoint>/battle/<first>+<second>
# endpoint = \"https://ob6la3c120.execute-api.ap-northeast-1.amazonaws.com/Prod\"

# Per-request timeout in seconds
# timeout_secs = 10
";

impl MonsterrankConfig {
    /// Merge CLI values over config values over built-in defaults.
    pub fn battle_config(&self, endpoint: Option<String>, timeout_secs: Option<u64>) -> BattleConfig {
        let endpoint = endpoint
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let secs = timeout_secs
            .or(self.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        BattleConfig {
            endpoint,
            timeout: Duration::from_secs(secs),
        }
    }
}

/// `~/.config/monsterrank/config.toml`, or an error when `HOME` is unset.
pub fn config_path() -> Result<PathBuf, String> {
    let home = std::env::var_os("HOME").ok_or("HOME environment variable not set")?;
    Ok(config_path_in(Path::new(&home)))
}

fn config_path_in(home: &Path) -> PathBuf {
    home.join(".config").join("monsterrank").join("config.toml")
}

pub fn parse_config(content: &str) -> Result<MonsterrankConfig, toml::de::Error> {
    toml::from_str(content)
}

/// A missing file yields the all-`None` config; anything else unreadable is an error.
pub fn load_config(path: &Path) -> Result<MonsterrankConfig, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(MonsterrankConfig::default()),
        Err(e) => return Err(format!("Failed to read config at {}: {e}", path.display())),
    };
    parse_config(&content).map_err(|e| format!("Failed to parse config at {}: {e}", path.display()))
}

/// Write the commented template to `path`, refusing to overwrite.
pub fn create_default_config(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {e}", parent.display()))?;
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => format!("Config file already exists at {}", path.display()),
            _ => format!("Failed to create config at {}: {e}", path.display()),
        })?;
    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())
        .map_err(|e| format!("Failed to write config to {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_empty_config() {
        let cfg = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(cfg, MonsterrankConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let cfg = parse_config("timeout_secs = 3\n").unwrap();
        assert_eq!(cfg.endpoint, None);
        assert_eq!(cfg.timeout_secs, Some(3));
    }

    #[test]
    fn test_precedence_cli_over_config_over_default() {
        let cfg = MonsterrankConfig {
            endpoint: Some("http://config.local".to_string()),
            timeout_secs: Some(5),
        };

        let merged = cfg.battle_config(Some("http://cli.local".to_string()), None);
        assert_eq!(merged.endpoint, "http://cli.local");
        assert_eq!(merged.timeout, Duration::from_secs(5));

        let merged = cfg.battle_config(None, Some(2));
        assert_eq!(merged.endpoint, "http://config.local");
        assert_eq!(merged.timeout, Duration::from_secs(2));

        let merged = MonsterrankConfig::default().battle_config(None, None);
        assert_eq!(merged.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(merged.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("monsterrank-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_config_path_layout() {
        assert_eq!(
            config_path_in(Path::new("/home/ana")),
            PathBuf::from("/home/ana/.config/monsterrank/config.toml")
        );
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = scratch_dir("missing");
        let cfg = load_config(&dir.join("config.toml")).unwrap();
        assert_eq!(cfg, MonsterrankConfig::default());
    }

    #[test]
    fn test_load_invalid_config_is_error() {
        let dir = scratch_dir("invalid");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse config"), "{err}");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_create_default_config_once() {
        let dir = scratch_dir("create");
        let path = dir.join("nested").join("config.toml");

        create_default_config(&path).unwrap();
        assert_eq!(load_config(&path).unwrap(), MonsterrankConfig::default());

        let err = create_default_config(&path).unwrap_err();
        assert!(err.contains("already exists"), "{err}");
        fs::remove_dir_all(&dir).unwrap();
    }
}
