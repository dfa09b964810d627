use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::hero::HeroOptions;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub preview: PreviewConfig,
    pub contact: ContactConfig,
    pub hero: HeroConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SiteConfig {
    // "auto" follows $LANG, otherwise a locale tag such as "vi" or "en"
    pub language: String,
    pub output_dir: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PreviewConfig {
    pub fps: u32,
    // Whether to use terminal alternate screen
    pub alt_screen: bool,
    pub mouse: bool,
    pub carousel_interval_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u64,
    pub reset_delay_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HeroConfig {
    pub particles: usize,
    pub seed: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            output_dir: PathBuf::from("site"),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            alt_screen: true,
            mouse: true,
            carousel_interval_ms: 5000,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            reset_delay_ms: 3000,
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        let options = HeroOptions::default();
        Self {
            particles: options.particles,
            seed: options.seed,
        }
    }
}

impl Config {
    /// Load the user config, writing the defaults on first run.
    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();
            if let Err(err) = config.save_to(&config_path) {
                // A read-only home should not stop the tool from running.
                tracing::warn!(path = %config_path.display(), "could not write default config: {err:#}");
            }
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn get_config_path() -> PathBuf {
        if let Some(path) = std::env::var_os("AGENCY_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".agency")
            .join("config.toml")
    }

    pub fn get_effective_language(&self) -> String {
        resolve_language(&self.site.language, std::env::var("LANG").ok())
    }

    pub fn hero_options(&self) -> HeroOptions {
        HeroOptions {
            particles: self.hero.particles,
            seed: self.hero.seed,
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact.submit_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.contact.reset_delay_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.preview.carousel_interval_ms)
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.preview.fps.clamp(1, 120)))
    }
}

fn resolve_language(setting: &str, env_lang: Option<String>) -> String {
    if setting.eq_ignore_ascii_case("auto") {
        // "vi_VN.UTF-8" -> "vi_VN"
        env_lang
            .unwrap_or_else(|| "vi_VN".to_string())
            .split('.')
            .next()
            .unwrap_or("vi")
            .to_string()
    } else {
        setting.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_site() {
        let config = Config::default();
        assert_eq!(config.site.language, "auto");
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.reset_delay(), Duration::from_secs(3));
        assert_eq!(config.carousel_interval(), Duration::from_secs(5));
        assert_eq!(config.hero_options().particles, 100);
        assert_eq!(config.frame_time(), Duration::from_millis(33));
    }

    #[test]
    fn save_and_load_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.site.language = "en".to_string();
        config.contact.submit_delay_ms = 10;
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.site.language, "en");
        assert_eq!(loaded.contact.submit_delay_ms, 10);
        assert_eq!(loaded.contact.reset_delay_ms, 3000);
        Ok(())
    }

    #[test]
    fn partial_file_fills_in_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[preview]\nfps = 60\n")?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.preview.fps, 60);
        assert!(loaded.preview.alt_screen);
        assert_eq!(loaded.site.output_dir, PathBuf::from("site"));
        Ok(())
    }

    #[test]
    fn broken_file_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "site = 3")?;
        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn language_resolution() {
        assert_eq!(resolve_language("en", Some("vi_VN.UTF-8".into())), "en");
        assert_eq!(resolve_language("auto", Some("en_US.UTF-8".into())), "en_US");
        assert_eq!(resolve_language("AUTO", None), "vi_VN");
    }
}
