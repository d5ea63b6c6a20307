//! Configuration management using the prefer crate for file discovery.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::ServiceCatalog;
use crate::error::Result;
use crate::interactive::VideoPolicy;

/// Name prefer uses to discover config files.
const CONFIG_NAME: &str = "masonry-site";

/// Default bind address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Hero media settings for the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSettings {
    pub poster_src: String,
    pub poster_low_src: String,
    /// `None` disables the background video.
    pub video_src: Option<String>,
    pub policy: VideoPolicy,
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self {
            poster_src: "/hero-poster.jpg".to_string(),
            poster_low_src: "/hero-poster-low.jpg".to_string(),
            video_src: Some("/background.mp4".to_string()),
            policy: VideoPolicy::default(),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Business name used in titles and the header.
    pub site_name: String,
    /// Absolute base URL for the sitemap.
    pub base_url: String,
    /// Directory served under `/media`.
    pub media_dir: PathBuf,
    /// Content file replacing the built-in services.
    pub content_file: Option<PathBuf>,
    /// Address `serve` binds to.
    pub bind: String,
    pub hero: HeroSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "Legacy Masonry & Restoration".to_string(),
            base_url: "http://localhost:3030".to_string(),
            media_dir: PathBuf::from("public"),
            content_file: None,
            bind: DEFAULT_BIND.to_string(),
            hero: HeroSettings::default(),
        }
    }
}

impl Settings {
    /// Load the service catalog from the content file, or the built-in one.
    pub fn load_catalog(&self) -> Result<ServiceCatalog> {
        match &self.content_file {
            Some(path) => ServiceCatalog::load_from_path(path),
            None => Ok(ServiceCatalog::builtin()),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Hero section of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_low_src: Option<String>,
    /// Background video path. An empty string disables video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_on_slow_connection: Option<bool>,
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(default)]
    pub hero: HeroConfig,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Discover and load a config file with prefer, falling back to defaults.
    pub async fn load() -> Self {
        match prefer::load(CONFIG_NAME).await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> std::result::Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory of the config file, if it came from one.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref name) = self.site_name {
            settings.site_name = name.clone();
        }
        if let Some(ref url) = self.base_url {
            settings.base_url = url.clone();
        }
        // The default media_dir is relative too and resolves the same way.
        settings.media_dir = match self.media_dir {
            Some(ref dir) => self.resolve_path(dir, base_dir),
            None if settings.media_dir.is_relative() => base_dir.join(&settings.media_dir),
            None => settings.media_dir.clone(),
        };
        if let Some(ref file) = self.content_file {
            settings.content_file = Some(self.resolve_path(file, base_dir));
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }

        let hero = &mut settings.hero;
        if let Some(ref src) = self.hero.poster_src {
            hero.poster_src = src.clone();
        }
        if let Some(ref src) = self.hero.poster_low_src {
            hero.poster_low_src = src.clone();
        }
        if let Some(ref src) = self.hero.video_src {
            hero.video_src = Some(src.clone()).filter(|s| !s.is_empty());
        }
        if let Some(skip) = self.hero.skip_on_slow_connection {
            hero.policy.skip_on_slow_connection = skip;
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file directory.
    pub use_cwd: bool,
}

/// Load config from file sources.
async fn load_file_config(options: &LoadOptions) -> Config {
    // Priority 1: Explicit --config flag
    if let Some(ref config_path) = options.config_path {
        return match Config::load_from_path(config_path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}: {}", config_path.display(), e);
                Config::default()
            }
        };
    }

    // Priority 2: Auto-discover via prefer
    Config::load().await
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(options: LoadOptions) -> (Settings, Config) {
    let config = load_file_config(&options).await;
    let mut settings = Settings::default();

    let cwd = || std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base_dir = if options.use_cwd {
        cwd()
    } else {
        config.base_dir().unwrap_or_else(cwd)
    };

    config.apply_to_settings(&mut settings, &base_dir);

    if let Some(bind) = env_override("MASONRY_SITE_BIND") {
        tracing::debug!("Using MASONRY_SITE_BIND from environment: {}", bind);
        settings.bind = bind;
    }
    if let Some(url) = env_override("MASONRY_SITE_BASE_URL") {
        tracing::debug!("Using MASONRY_SITE_BASE_URL from environment: {}", url);
        settings.base_url = url;
    }

    (settings, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("masonry-site.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
site_name = "Stone & Sons"
media_dir = "assets"
content_file = "services.json"

[hero]
video_src = ""
skip_on_slow_connection = true
"#
        )
        .unwrap();

        let (settings, config) = load_settings_with_options(LoadOptions {
            config_path: Some(path.clone()),
            use_cwd: false,
        })
        .await;

        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
        assert_eq!(settings.site_name, "Stone & Sons");
        assert_eq!(settings.media_dir, dir.path().join("assets"));
        assert_eq!(
            settings.content_file,
            Some(dir.path().join("services.json"))
        );
        assert_eq!(settings.hero.video_src, None);
        assert!(settings.hero.policy.skip_on_slow_connection);
    }

    #[tokio::test]
    async fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (settings, config) = load_settings_with_options(LoadOptions {
            config_path: Some(dir.path().join("missing.toml")),
            use_cwd: true,
        })
        .await;

        assert!(config.source_path.is_none());
        assert_eq!(settings.hero, HeroSettings::default());
        assert_eq!(settings.content_file, None);
    }

    #[test]
    fn test_resolve_path() {
        let config = Config::default();
        let base = Path::new("/srv/site");
        assert_eq!(
            config.resolve_path("public", base),
            PathBuf::from("/srv/site/public")
        );
        assert_eq!(
            config.resolve_path("/var/media", base),
            PathBuf::from("/var/media")
        );
    }

    #[test]
    fn test_base_url_trims_slash() {
        let settings = Settings {
            base_url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.base_url(), "https://example.com");
    }

    #[test]
    fn test_default_catalog_is_builtin() {
        let catalog = Settings::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), ServiceCatalog::builtin().len());
    }
}
