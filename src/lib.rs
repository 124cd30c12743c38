//! Staffdesk: a console for browsing and maintaining employee records held by a
//! remote record store.
//!
//! Staffdesk provides:
//! - Filtered search over employee rows (keyword, period, department, status)
//! - A record dialog for creating, editing, and viewing one employee
//! - Batch deletion of selected rows
//! - A minimum-duration busy indicator that also serializes workflows
//! - English and Traditional Chinese display strings
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Host (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Workflows
//! │  - Console and events                               │
//! │  - List, dialog, loading gate, notifications        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ i18n          │
//! │ (ui/)         │   │ (store/)      │   │ (i18n/)       │
//! │ - Rendering   │   │ - Store trait │   │ - en / zh     │
//! │ - Theming     │   │ - HTTP client │   │ - Templates   │
//! │ - Pagination  │   │ - Envelopes   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Employee, row, and criteria types                │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber                               │
//! │  - File-based OpenTelemetry span export             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Console, coordinators, and the loading gate
//! - [`domain`]: Core domain types (Employee, Criteria, errors)
//! - [`store`]: Remote store trait and its HTTP implementation
//! - [`i18n`]: Display strings per locale
//! - [`ui`]: Text rendering with theme support
//! - [`observability`]: Tracing setup and span export
//!
//! # Configuration
//!
//! Configuration is a TOML file, environment variables, or both:
//!
//! ```toml
//! base_url = "http://localhost:8080/api/employee"
//! locale = "en"
//! min_busy_ms = 500
//! notification_ms = 3000
//! request_timeout_secs = 30
//! trace_level = "debug"
//! trace_file = "/tmp/staffdesk/traces.jsonl"
//! theme = "catppuccin-latte"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use staffdesk::app::{Event, SearchPanel};
//! use staffdesk::{initialize, Config};
//!
//! # async fn run() -> staffdesk::Result<()> {
//! let config = Config::from_env()?;
//! let mut console = initialize(&config)?;
//!
//! let mut panel = SearchPanel::new();
//! panel.set_department("D002");
//! console.handle(Event::from(panel.submit())).await;
//!
//! print!("{}", staffdesk::ui::render(&console.view(), &config.theme()));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod i18n;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{Console, Event};
pub use domain::{ConsoleError, Result};
pub use i18n::Locale;
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Prefix of the environment variables read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "STAFFDESK_";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the record store; endpoints are resolved relative to it.
    pub base_url: String,

    /// Initial display locale. Default: `zh`
    pub locale: Locale,

    /// Minimum time the busy indicator stays visible. Default: 500 ms
    pub min_busy: Duration,

    /// Time a notice stays visible. Default: 3000 ms
    pub notification_ttl: Duration,

    /// HTTP request timeout in seconds. Default: 30
    pub request_timeout_secs: u64,

    /// `EnvFilter` directive used when `RUST_LOG` is not set. Default: `"info"`
    pub trace_level: String,

    /// File receiving exported spans as JSON lines. Export is off when absent.
    pub trace_file: Option<PathBuf>,

    /// Built-in theme name; see [`Theme::from_name`].
    pub theme_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/employee".to_string(),
            locale: Locale::Zh,
            min_busy: app::gate::DEFAULT_MIN_VISIBLE,
            notification_ttl: app::notification::DEFAULT_TTL,
            request_timeout_secs: 30,
            trace_level: "info".to_string(),
            trace_file: None,
            theme_name: None,
        }
    }
}

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    locale: Option<String>,
    min_busy_ms: Option<u64>,
    notification_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
    trace_level: Option<String>,
    trace_file: Option<PathBuf>,
    theme: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Keys are the same as in the TOML file. Missing keys and values that do
    /// not parse keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use staffdesk::{Config, Locale};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("locale".to_string(), "en".to_string());
    /// map.insert("min_busy_ms".to_string(), "not-a-number".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.locale, Locale::En);
    /// assert_eq!(config.min_busy, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();
        config.overlay(map);
        config
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a TOML error for malformed documents, unknown keys, or values of
    /// the wrong type, and a configuration error for an unsupported locale.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        let defaults = Self::default();

        let locale = match file.locale {
            Some(tag) => tag.parse::<Locale>().map_err(ConsoleError::Config)?,
            None => defaults.locale,
        };

        Ok(Self {
            base_url: file.base_url.unwrap_or(defaults.base_url),
            locale,
            min_busy: file.min_busy_ms.map_or(defaults.min_busy, Duration::from_millis),
            notification_ttl: file
                .notification_ms
                .map_or(defaults.notification_ttl, Duration::from_millis),
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            trace_level: file.trace_level.unwrap_or(defaults.trace_level),
            trace_file: file.trace_file,
            theme_name: file.theme,
        })
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise the errors of
    /// [`Config::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration file");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builds the configuration from the process environment.
    ///
    /// `STAFFDESK_CONFIG` names a TOML file to start from; every other
    /// `STAFFDESK_<KEY>` variable then overrides `<key>` as in
    /// [`Config::from_map`].
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Config::from_file`] for `STAFFDESK_CONFIG`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// [`Config::from_env`] over an explicit set of variables.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Config::from_file`] for `STAFFDESK_CONFIG`.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut file = None;
        let mut overrides = BTreeMap::new();

        for (name, value) in vars {
            let Some(key) = name.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            if key == "CONFIG" {
                file = Some(PathBuf::from(value));
            } else {
                overrides.insert(key.to_ascii_lowercase(), value);
            }
        }

        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.overlay(&overrides);
        Ok(config)
    }

    fn overlay(&mut self, map: &BTreeMap<String, String>) {
        fn set<T>(slot: &mut T, value: Option<T>) -> bool {
            value.map(|v| *slot = v).is_some()
        }
        fn number(value: &str) -> Option<u64> {
            value.trim().parse().ok()
        }
        fn non_empty(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        for (key, value) in map {
            let applied = match key.as_str() {
                "base_url" => set(&mut self.base_url, non_empty(value)),
                "locale" => set(&mut self.locale, value.parse().ok()),
                "min_busy_ms" => set(&mut self.min_busy, number(value).map(Duration::from_millis)),
                "notification_ms" => set(
                    &mut self.notification_ttl,
                    number(value).map(Duration::from_millis),
                ),
                "request_timeout_secs" => set(&mut self.request_timeout_secs, number(value)),
                "trace_level" => set(&mut self.trace_level, non_empty(value)),
                "trace_file" => set(&mut self.trace_file, non_empty(value).map(|v| Some(v.into()))),
                "theme" => set(&mut self.theme_name, non_empty(value).map(Some)),
                _ => false,
            };
            if !applied {
                tracing::debug!(key = %key, value = %value, "ignoring configuration entry");
            }
        }
    }

    /// The configured theme, falling back to the default for unknown names.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds a console talking to the HTTP store named in `config`.
///
/// # Errors
///
/// Returns a transport error if the HTTP client cannot be built.
pub fn initialize(config: &Config) -> Result<Console> {
    tracing::debug!(base_url = %config.base_url, locale = %config.locale, "initializing console");

    let store = store::HttpStore::new(config.base_url.clone(), config.request_timeout_secs)?;
    Ok(Console::from_config(Arc::new(store), config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_defaults() {
        let config = Config::from_toml_str(
            r#"
            base_url = "http://store.test/api/employee"
            locale = "en"
            min_busy_ms = 50
            trace_file = "/tmp/traces.jsonl"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://store.test/api/employee");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.min_busy, Duration::from_millis(50));
        assert_eq!(config.notification_ttl, Duration::from_millis(3000));
        assert_eq!(config.trace_file, Some(PathBuf::from("/tmp/traces.jsonl")));
    }

    #[test]
    fn toml_rejects_unknown_keys_and_locales() {
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(ConsoleError::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml_str("locale = \"fr\""),
            Err(ConsoleError::Config(_))
        ));
    }

    #[test]
    fn environment_overrides_apply_on_top_of_defaults() {
        let vars = [
            ("STAFFDESK_LOCALE", "en"),
            ("STAFFDESK_NOTIFICATION_MS", "1000"),
            ("STAFFDESK_TRACE_LEVEL", "debug"),
            ("HOME", "/root"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let config = Config::from_vars(vars).unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.notification_ttl, Duration::from_millis(1000));
        assert_eq!(config.trace_level, "debug");
        assert_eq!(config.base_url, Config::default().base_url);
    }

    #[test]
    fn config_file_is_overridden_by_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staffdesk.toml");
        std::fs::write(
            &path,
            "base_url = \"http://hr.internal/api/employee\"\nlocale = \"en\"\nmin_busy_ms = 200\n",
        )
        .unwrap();

        let vars = [
            ("STAFFDESK_CONFIG".to_string(), path.display().to_string()),
            ("STAFFDESK_LOCALE".to_string(), "zh".to_string()),
        ];
        let config = Config::from_vars(vars).unwrap();

        assert_eq!(config.base_url, "http://hr.internal/api/employee");
        assert_eq!(config.locale, Locale::Zh);
        assert_eq!(config.min_busy, Duration::from_millis(200));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConsoleError::Io(_))));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".into()),
            ..Config::default()
        };
        assert_eq!(config.theme(), Theme::default());
    }
}
