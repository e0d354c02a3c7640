//! Configuration management for docsite.
//!
//! Parses `docsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Values without `${` are kept verbatim, so a literal `$` is safe there.
//! Once a value contains `${`, bare `$VAR` references in it are expanded too.
//!
//! Expanded fields:
//! - `site.hostname`
//! - `site.og_image`
//!
//! ## Locales
//!
//! The built-in English and Chinese locales are used unless
//! `site.builtin_locales = false`. Tables under `[locales.<code>]` add new
//! locales or replace a built-in one with the same code.

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use docsite_site::{GlobalSettings, LocaleDescriptor, builtin_locales};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override version manifest path.
    pub manifest: Option<PathBuf>,
    /// Override output file path.
    pub output: Option<PathBuf>,
    /// Override sitemap hostname.
    pub hostname: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

const DEFAULT_MANIFEST: &str = "versions.json";
const DEFAULT_OUTPUT: &str = ".docsite/site-config.json";

/// Output path that writes the site config to stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteSettings,
    /// Manifest location (relative string from TOML).
    manifest: PathConfigRaw,
    /// Output location (relative string from TOML).
    output: PathConfigRaw,
    /// Extra or replacement locale descriptors keyed by locale code.
    pub locales: BTreeMap<String, LocaleDescriptor>,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Site title used in head metadata.
    pub title: String,
    /// Site description used in head metadata.
    pub description: String,
    /// Public origin for sitemap and canonical URLs.
    pub hostname: String,
    /// Favicon path.
    pub logo: String,
    /// Apple touch icon path.
    pub touch_icon: String,
    /// Social sharing image.
    pub og_image: String,
    /// Whether the built-in locales are included.
    pub builtin_locales: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        let defaults = GlobalSettings::new(
            "Docsite",
            "Versioned, multi-locale documentation",
            "https://docs.example.com",
        );
        Self {
            title: defaults.title,
            description: defaults.description,
            hostname: defaults.hostname,
            logo: defaults.logo,
            touch_icon: defaults.touch_icon,
            og_image: defaults.og_image,
            builtin_locales: true,
        }
    }
}

impl SiteSettings {
    /// Global settings for site assembly.
    #[must_use]
    pub fn global_settings(&self) -> GlobalSettings {
        GlobalSettings {
            title: self.title.clone(),
            description: self.description.clone(),
            hostname: self.hostname.clone(),
            logo: self.logo.clone(),
            touch_icon: self.touch_icon.clone(),
            og_image: self.og_image.clone(),
        }
    }
}

/// Raw path section as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PathConfigRaw {
    path: Option<String>,
}

/// Resolved input and output paths.
#[derive(Debug, Default)]
pub struct PathsConfig {
    /// Version manifest file.
    pub manifest: PathBuf,
    /// Assembled site config output file.
    pub output: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.hostname`").
        field: String,
        /// Error message (e.g., "${`DOCS_HOST`} environment variable not found").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docsite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(manifest) = &settings.manifest {
            self.paths.manifest.clone_from(manifest);
        }
        if let Some(output) = &settings.output {
            self.paths.output.clone_from(output);
        }
        if let Some(hostname) = &settings.hostname {
            self.site.hostname.clone_from(hostname);
        }
    }

    /// Locale descriptors to assemble, in declaration order.
    ///
    /// Built-ins come first (unless disabled); a `[locales.<code>]` table
    /// with a built-in code replaces that built-in in place.
    #[must_use]
    pub fn locale_descriptors(&self) -> Vec<LocaleDescriptor> {
        let mut descriptors = if self.site.builtin_locales {
            builtin_locales()
        } else {
            Vec::new()
        };

        for (code, declared) in &self.locales {
            let mut descriptor = declared.clone();
            descriptor.code.clone_from(code);
            if let Some(existing) = descriptors.iter_mut().find(|d| d.code == *code) {
                *existing = descriptor;
            } else {
                descriptors.push(descriptor);
            }
        }

        descriptors
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSettings::default(),
            manifest: PathConfigRaw::default(),
            output: PathConfigRaw::default(),
            locales: BTreeMap::new(),
            paths: PathsConfig {
                manifest: base.join(DEFAULT_MANIFEST),
                output: base.join(DEFAULT_OUTPUT),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_locales()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.hostname, "site.hostname")?;
        require_http_url(&self.site.hostname, "site.hostname")?;

        if !self.site.builtin_locales && self.locales.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [locales.<code>] table is required when site.builtin_locales is false"
                    .to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_locales(&self) -> Result<(), ConfigError> {
        for code in self.locales.keys() {
            if code.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "locale code cannot be empty".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.hostname = expand::expand_env(&self.site.hostname, "site.hostname")?;
        self.site.og_image = expand::expand_env(&self.site.og_image, "site.og_image")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        // `-` selects stdout and must not become a file in the config dir
        let output = match self.output.path.as_deref() {
            Some(STDOUT_PATH) => PathBuf::from(STDOUT_PATH),
            other => resolve(other, DEFAULT_OUTPUT),
        };

        self.paths = PathsConfig {
            manifest: resolve(self.manifest.path.as_deref(), DEFAULT_MANIFEST),
            output,
        };
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    const FRENCH: &str = r#"
[locales.fr]
label = "Français"
lang = "fr-FR"
title = "Docsite"
description = "Documentation versionnée"
logo = { src = "/logo.svg", alt = "Logo" }
footer = { message = "Licence MIT.", copyright = "© Docsite" }
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Docsite");
        assert_eq!(config.site.hostname, "https://docs.example.com");
        assert!(config.site.builtin_locales);
        assert_eq!(config.paths.manifest, PathBuf::from("/test/versions.json"));
        assert_eq!(
            config.paths.output,
            PathBuf::from("/test/.docsite/site-config.json")
        );
        assert!(config.locales.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.title, "Docsite");
        assert_eq!(config.site.og_image, "/og-image.png");
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
title = "Acme Docs"
description = "Docs for Acme"
hostname = "https://acme.dev"
logo = "/acme.svg"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Acme Docs");
        assert_eq!(config.site.description, "Docs for Acme");
        assert_eq!(config.site.hostname, "https://acme.dev");
        assert_eq!(config.site.logo, "/acme.svg");
        assert_eq!(config.site.touch_icon, "/apple-touch-icon.png");
    }

    #[test]
    fn test_global_settings_copies_site_fields() {
        let config = Config::default_with_base(Path::new("/test"));
        let settings = config.site.global_settings();
        assert_eq!(settings.title, config.site.title);
        assert_eq!(settings.hostname, config.site.hostname);
        assert_eq!(settings.og_image, config.site.og_image);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[manifest]
path = "data/versions.yaml"

[output]
path = "dist/config.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.paths.manifest,
            PathBuf::from("/project/data/versions.yaml")
        );
        assert_eq!(config.paths.output, PathBuf::from("/project/dist/config.json"));
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.paths.manifest, PathBuf::from("/project/versions.json"));
        assert_eq!(
            config.paths.output,
            PathBuf::from("/project/.docsite/site-config.json")
        );
    }

    #[test]
    fn test_resolve_paths_keeps_stdout_output() {
        let toml = r#"
[output]
path = "-"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.paths.output, PathBuf::from(STDOUT_PATH));
        assert_eq!(config.paths.manifest, PathBuf::from("/project/versions.json"));
    }

    #[test]
    fn test_expand_env_vars_literal_dollar_unchanged() {
        let toml = r#"
[site]
og_image = "/img/card$2x.png"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.og_image, "/img/card$2x.png");
    }

    #[test]
    fn test_apply_cli_settings_manifest() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            manifest: Some(PathBuf::from("/other/versions.json")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.paths.manifest, PathBuf::from("/other/versions.json"));
        assert_eq!(
            config.paths.output,
            PathBuf::from("/test/.docsite/site-config.json")
        ); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            output: Some(PathBuf::from("/out/site.json")),
            hostname: Some("https://override.dev".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.paths.output, PathBuf::from("/out/site.json"));
        assert_eq!(config.site.hostname, "https://override.dev");
        assert_eq!(config.paths.manifest, PathBuf::from("/test/versions.json"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.hostname, before.site.hostname);
        assert_eq!(config.paths.manifest, before.paths.manifest);
        assert_eq!(config.paths.output, before.paths.output);
    }

    #[test]
    fn test_expand_env_vars_hostname() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_HOST", "https://docs.test.dev");
        }

        let toml = r#"
[site]
hostname = "${DOCSITE_TEST_HOST}"
og_image = "${DOCSITE_TEST_OG_IMAGE_UNSET:-/card.png}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.hostname, "https://docs.test.dev");
        assert_eq!(config.site.og_image, "/card.png");

        unsafe {
            std::env::remove_var("DOCSITE_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_DOCSITE_TEST");
        }

        let toml = r#"
[site]
hostname = "${MISSING_VAR_DOCSITE_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_DOCSITE_TEST"));
        assert!(err.to_string().contains("site.hostname"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_title_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = String::new();
        assert_validation_error(&config, &["site.title", "empty"]);
    }

    #[test]
    fn test_validate_hostname_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.hostname = String::new();
        assert_validation_error(&config, &["site.hostname", "empty"]);
    }

    #[test]
    fn test_validate_hostname_invalid_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.hostname = "docs.example.com".to_owned();
        assert_validation_error(&config, &["site.hostname", "http"]);
    }

    #[test]
    fn test_validate_no_locales_when_builtins_disabled() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.builtin_locales = false;
        assert_validation_error(&config, &["builtin_locales"]);
    }

    #[test]
    fn test_validate_empty_locale_code() {
        let toml = r#"
[locales.""]
label = "Empty"
lang = "xx"
title = "T"
description = "D"
logo = { src = "/logo.svg", alt = "Logo" }
footer = { message = "M", copyright = "C" }
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_validation_error(&config, &["locale code"]);
    }

    #[test]
    fn test_locale_descriptors_default_to_builtins() {
        let config = Config::default_with_base(Path::new("/test"));
        let codes: Vec<_> = config
            .locale_descriptors()
            .into_iter()
            .map(|d| d.code)
            .collect();
        assert_eq!(codes, ["en", "zh"]);
    }

    #[test]
    fn test_locale_descriptors_appends_declared_locale() {
        let config: Config = toml::from_str(FRENCH).unwrap();
        let descriptors = config.locale_descriptors();

        let codes: Vec<_> = descriptors.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, ["en", "zh", "fr"]);
        assert_eq!(descriptors[2].lang, "fr-FR");
        assert!(descriptors[2].sidebar.is_empty());
    }

    #[test]
    fn test_locale_descriptors_replaces_builtin_in_place() {
        let toml = r#"
[locales.zh]
label = "中文"
lang = "zh-TW"
title = "Docsite"
description = "多版本文件"
logo = { src = "/logo.svg", alt = "標誌" }
footer = { message = "MIT", copyright = "©" }
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let descriptors = config.locale_descriptors();

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[1].code, "zh");
        assert_eq!(descriptors[1].lang, "zh-TW");
    }

    #[test]
    fn test_locale_descriptors_without_builtins() {
        let toml = format!("[site]\nbuiltin_locales = false\n{FRENCH}");
        let config: Config = toml::from_str(&toml).unwrap();

        let codes: Vec<_> = config
            .locale_descriptors()
            .into_iter()
            .map(|d| d.code)
            .collect();

        assert_eq!(codes, ["fr"]);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("docsite.toml");

        let err = Config::load(Some(missing.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsite.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[manifest]\npath = \"meta/versions.json\"\n")
            .unwrap();

        let config = Config::load(Some(path.as_path()), None).unwrap();

        assert_eq!(
            config.paths.manifest,
            dir.path().join("meta/versions.json")
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_applies_and_validates_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsite.toml");
        std::fs::write(&path, "").unwrap();

        let overrides = CliSettings {
            hostname: Some("ftp://bad".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(path.as_path()), Some(&overrides)).unwrap_err();

        assert!(err.to_string().contains("site.hostname"));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsite.toml");
        std::fs::write(&path, "[site\ntitle = ").unwrap();

        let err = Config::load(Some(path.as_path()), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_discover_config_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsite.toml");
        std::fs::write(&path, "").unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Config::discover_config_from(nested).unwrap();

        assert_eq!(found, path);
    }
}
