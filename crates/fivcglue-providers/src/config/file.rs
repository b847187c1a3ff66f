//! File-backed configuration provider
//!
//! Reads a JSON, YAML or TOML document whose top-level keys are session
//! names and whose second-level keys are values:
//!
//! ```yaml
//! redis:
//!   url: redis://localhost:6379
//!   db: 0
//! app:
//!   name: demo
//! ```
//!
//! Scalars are exposed as strings; nested structures as their JSON text.

use crate::constants::{FILE_CONFIG_CLASS, PROVIDER_LOG_TOPIC};
use fivcglue_application::{ComponentFactory, ComponentSite};
use fivcglue_domain::constants::CONFIG_INTERFACE;
use fivcglue_domain::error::{Error, Result};
use fivcglue_domain::ports::{ConfigProvider, ConfigSession, LoggerProvider};
use fivcglue_domain::value_objects::ComponentArgs;
use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// One named group of configuration values
#[derive(Debug, Clone, Default)]
pub struct FileConfigSession {
    values: BTreeMap<String, String>,
}

impl FileConfigSession {
    /// Create a session from already-stringified values
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl ConfigSession for FileConfigSession {
    fn get_value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

/// Configuration provider loaded once from a file
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
    sessions: BTreeMap<String, Arc<FileConfigSession>>,
}

impl FileConfigProvider {
    /// Load a configuration file
    ///
    /// The format is chosen from the extension: `.json`, `.yaml`/`.yml`, or
    /// `.toml`.
    ///
    /// # Errors
    /// `Configuration` if the file is missing, has an unknown extension, or
    /// is not a map of maps.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Figment::from(Json::file(path)),
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("toml") => Figment::from(Toml::file(path)),
            _ => {
                return Err(Error::configuration(format!(
                    "Unsupported configuration format: {}",
                    path.display()
                )));
            }
        };

        let raw: BTreeMap<String, BTreeMap<String, Value>> = figment.extract().map_err(|e| {
            Error::configuration_with_source(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let sessions = raw
            .into_iter()
            .map(|(name, values)| {
                let values = values
                    .into_iter()
                    .map(|(key, value)| (key, stringify(value)))
                    .collect();
                (name, Arc::new(FileConfigSession::new(values)))
            })
            .collect::<BTreeMap<_, _>>();

        debug!(path = %path.display(), sessions = sessions.len(), "Loaded configuration file");

        Ok(Self {
            path: path.to_path_buf(),
            sessions,
        })
    }

    /// Construct from component arguments
    ///
    /// Arguments: `path` (required).
    pub fn from_args(site: &ComponentSite, args: &ComponentArgs) -> Result<Self> {
        let path: PathBuf = args.require("path")?;
        let provider = Self::load(&path)?;

        if let Some(loggers) = site.query_component::<dyn LoggerProvider>(None) {
            loggers
                .get_logger(PROVIDER_LOG_TOPIC)
                .info(&format!("configuration loaded from {}", path.display()));
        }

        Ok(provider)
    }

    /// Path the configuration was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all sessions
    pub fn session_names(&self) -> Vec<&str> {
        self.sessions.keys().map(String::as_str).collect()
    }
}

impl ConfigProvider for FileConfigProvider {
    fn get_session(&self, name: &str) -> Option<Arc<dyn ConfigSession>> {
        self.sessions
            .get(name)
            .map(|session| Arc::clone(session) as Arc<dyn ConfigSession>)
    }
}

fn stringify(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Factory for `configs.file`
pub fn factory() -> ComponentFactory {
    ComponentFactory::builder(FILE_CONFIG_CLASS, FileConfigProvider::from_args)
        .description("Configuration sessions loaded from a JSON, YAML or TOML file")
        .provides::<dyn ConfigProvider>(CONFIG_INTERFACE, |config| config)
        .build()
}
