use crate::presentation::config::{keybindings, strings, styles, thumbnails};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub strings: strings::Strings,
    #[serde(default)]
    pub thumbnails: thumbnails::Thumbnails,
}

impl Config {
    /// Loads the user configuration from the standard directories on top of the built-in defaults.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// The embedded default configuration alone.
    pub fn builtin() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::builtin()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        Ok(cfg)
    }

    /// Fills every entry the user left out with the default one.
    fn merge_defaults(&mut self, default_config: Config) {
        // Actions the user rebound keep only the user's keys.
        let user_actions: HashSet<keybindings::Action> =
            self.keybindings.values().copied().collect();
        for (keyseq, action) in default_config.keybindings.0 {
            if !user_actions.contains(&action) {
                self.keybindings.entry(keyseq).or_insert(action);
            }
        }
        for (token, style) in default_config.styles.0 {
            self.styles.entry(token).or_insert(style);
        }
        for (key, text) in default_config.strings.0 {
            self.strings.entry(key).or_insert(text);
        }
        for (id, thumbnail) in default_config.thumbnails.0 {
            self.thumbnails.entry(id).or_insert(thumbnail);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::post::ImageId,
        presentation::config::{keybindings::Action, strings::StringKey, styles::ThemeToken},
    };

    fn scratch_dir(name: &str) -> std::io::Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!(
            "{}-config-test-{}-{name}",
            env!("CARGO_PKG_NAME"),
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn key(code: KeyCode) -> Vec<KeyEvent> {
        vec![KeyEvent::new(code, KeyModifiers::NONE)]
    }

    #[test]
    fn test_builtin_config() -> color_eyre::Result<()> {
        let cfg = Config::builtin()?;

        assert_eq!(cfg.keybindings.get(&key(KeyCode::Char('q'))), Some(&Action::Quit));
        assert_eq!(cfg.keybindings.get(&key(KeyCode::Enter)), Some(&Action::TapCard));
        assert_eq!(cfg.strings.text(StringKey::HomeAudioSectionTitle), "Audio stories");
        assert!(cfg.styles.contains_key(&ThemeToken::Accent));
        assert_eq!(cfg.thumbnails.len(), 7);
        Ok(())
    }

    #[test]
    fn test_load_without_user_file_uses_defaults() -> color_eyre::Result<()> {
        let dir = scratch_dir("empty")?;
        let cfg = Config::load_from(&dir, &dir)?;

        assert_eq!(cfg.config._config_dir, dir);
        assert_eq!(cfg.keybindings.get(&key(KeyCode::Char('j'))), Some(&Action::ScrollDown));
        assert!(cfg.thumbnails.contains_key(&ImageId::from("thumbnail_7")));
        Ok(())
    }

    #[test]
    fn test_every_default_binding_survives_merge() -> color_eyre::Result<()> {
        let dir = scratch_dir("all-defaults")?;
        let builtin = Config::builtin()?;
        let cfg = Config::load_from(&dir, &dir)?;

        assert_eq!(cfg.keybindings.len(), builtin.keybindings.len());
        for (keyseq, action) in builtin.keybindings.iter() {
            assert_eq!(cfg.keybindings.get(keyseq), Some(action), "{keyseq:?}");
        }
        Ok(())
    }

    #[test]
    fn test_user_binding_keeps_other_default_actions() -> color_eyre::Result<()> {
        let dir = scratch_dir("partial")?;
        fs::write(
            dir.join("config.json5"),
            r#"{ keybindings: { "<x>": "Quit" } }"#,
        )?;

        let cfg = Config::load_from(&dir, &dir)?;

        for code in [KeyCode::Char('j'), KeyCode::Down] {
            assert_eq!(cfg.keybindings.get(&key(code)), Some(&Action::ScrollDown));
        }
        for code in [KeyCode::Char('k'), KeyCode::Up] {
            assert_eq!(cfg.keybindings.get(&key(code)), Some(&Action::ScrollUp));
        }
        Ok(())
    }

    #[test]
    fn test_user_file_overrides_defaults() -> color_eyre::Result<()> {
        let dir = scratch_dir("override")?;
        fs::write(
            dir.join("config.json5"),
            r#"{
                keybindings: { "<x>": "Quit" },
                strings: { home_play_all: "Listen" },
            }"#,
        )?;

        let cfg = Config::load_from(&dir, &dir)?;

        assert_eq!(cfg.keybindings.get(&key(KeyCode::Char('x'))), Some(&Action::Quit));
        // The user rebound Quit, so the default <q> binding is not merged back in
        assert_eq!(cfg.keybindings.get(&key(KeyCode::Char('q'))), None);
        assert_eq!(cfg.strings.text(StringKey::HomePlayAll), "Listen");
        assert_eq!(cfg.strings.text(StringKey::HomeMore), "More");
        Ok(())
    }
}
