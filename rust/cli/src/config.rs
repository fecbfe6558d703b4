//! Player configuration for the CLI.
//!
//! Values are layered: built-in defaults, then a TOML file named by
//! `FOCUS_CONFIG`, then `FOCUS_PLAYER_{A,B}_{NAME,COLOR}` environment
//! variables. The origin of every value is kept so `focus cfg` can show it.

use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub player_a: PlayerConfig,
    pub player_b: PlayerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSources {
    pub name: ValueSource,
    pub color: ValueSource,
}

impl Default for PlayerSources {
    fn default() -> Self {
        Self {
            name: ValueSource::Default,
            color: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSources {
    pub player_a: PlayerSources,
    pub player_b: PlayerSources,
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_a: PlayerConfig {
                name: "Mitch".into(),
                color: "R".into(),
            },
            player_b: PlayerConfig {
                name: "Hannah".into(),
                color: "W".into(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FOCUS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(p) = f.player_a {
            apply_file(&mut cfg.player_a, &mut sources.player_a, p);
        }
        if let Some(p) = f.player_b {
            apply_file(&mut cfg.player_b, &mut sources.player_b, p);
        }
    }

    apply_env(&mut cfg.player_a, &mut sources.player_a, "A");
    apply_env(&mut cfg.player_b, &mut sources.player_b, "B");

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    player_a: Option<FilePlayer>,
    #[serde(default)]
    player_b: Option<FilePlayer>,
}

#[derive(Debug, Deserialize)]
struct FilePlayer {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

fn apply_file(cfg: &mut PlayerConfig, sources: &mut PlayerSources, file: FilePlayer) {
    if let Some(v) = file.name {
        cfg.name = v;
        sources.name = ValueSource::File;
    }
    if let Some(v) = file.color {
        cfg.color = v;
        sources.color = ValueSource::File;
    }
}

fn apply_env(cfg: &mut PlayerConfig, sources: &mut PlayerSources, slot: &str) {
    if let Ok(v) = std::env::var(format!("FOCUS_PLAYER_{}_NAME", slot))
        && !v.is_empty()
    {
        cfg.name = v;
        sources.name = ValueSource::Env;
    }
    if let Ok(v) = std::env::var(format!("FOCUS_PLAYER_{}_COLOR", slot))
        && !v.is_empty()
    {
        cfg.color = v;
        sources.color = ValueSource::Env;
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    for (label, p) in [("player_a", &cfg.player_a), ("player_b", &cfg.player_b)] {
        if p.name.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: {}.name must not be empty",
                label
            )));
        }
        if p.color.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: {}.color must not be empty",
                label
            )));
        }
    }
    if cfg.player_a.name == cfg.player_b.name {
        return Err(ConfigError::Invalid(
            "Invalid configuration: players must have different names".into(),
        ));
    }
    if cfg.player_a.color == cfg.player_b.color {
        return Err(ConfigError::Invalid(
            "Invalid configuration: players must have different colors".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = Config::default();
        assert!(validate(&cfg).is_ok());
        assert_eq!(cfg.player_a.name, "Mitch");
        assert_eq!(cfg.player_b.color, "W");
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let mut cfg = Config::default();
        cfg.player_b.color = "R".into();
        let e = validate(&cfg).unwrap_err();
        assert!(e.to_string().contains("different colors"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut cfg = Config::default();
        cfg.player_a.name = "  ".into();
        let e = validate(&cfg).unwrap_err();
        assert!(e.to_string().contains("player_a.name"));
    }

    #[test]
    fn test_partial_file_player_keeps_defaults() {
        let f: FileConfig = toml::from_str("[player_b]\nname = \"Ada\"\n").unwrap();
        let mut cfg = Config::default();
        let mut sources = ConfigSources::default();
        if let Some(p) = f.player_b {
            apply_file(&mut cfg.player_b, &mut sources.player_b, p);
        }
        assert!(f.player_a.is_none());
        assert_eq!(cfg.player_b.name, "Ada");
        assert_eq!(cfg.player_b.color, "W");
        assert_eq!(sources.player_b.name, ValueSource::File);
        assert_eq!(sources.player_b.color, ValueSource::Default);
    }
}
