//! Component spec value objects
//!
//! A component spec is the declarative form of "construct this and register
//! it under these interfaces". Its serialized shape keeps the factory under
//! `class`, the bindings under `entries`, and treats every other key as a
//! construction argument:
//!
//! ```toml
//! [[components]]
//! class = "caches.memory"
//! max_capacity = 1000
//! entries = [{ interface = "CacheProvider", name = "memory" }]
//! ```

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keyword arguments passed to a component factory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentArgs(Map<String, Value>);

impl ComponentArgs {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set an argument in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get an optional argument, deserialized into `T`
    ///
    /// # Errors
    /// `InvalidArgument` if the value is present but has the wrong shape
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::invalid_argument(format!("argument '{key}': {e}"))),
        }
    }

    /// Get an optional argument, falling back to `default`
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Get a required argument
    ///
    /// # Errors
    /// `InvalidArgument` if the argument is missing or has the wrong shape
    pub fn require<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.get(key)?
            .ok_or_else(|| Error::invalid_argument(format!("missing required argument '{key}'")))
    }

    /// Check whether an argument is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no arguments are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (key, raw value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for ComponentArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// An (interface, name) slot a component is registered under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBinding {
    /// Symbolic interface name (e.g. `CacheProvider`)
    pub interface: String,
    /// Optional registration name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ComponentBinding {
    /// Bind under an interface without a name
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            name: None,
        }
    }

    /// Bind under an interface with a name
    pub fn named(interface: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            name: Some(name.into()),
        }
    }

    /// Registration name, with an empty string treated as unnamed
    pub fn effective_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Declarative description of one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Symbolic factory name the component is constructed with
    #[serde(rename = "class")]
    pub factory: String,
    /// Slots the constructed instance is registered under
    #[serde(default)]
    pub entries: Vec<ComponentBinding>,
    /// Construction arguments
    #[serde(flatten)]
    pub args: ComponentArgs,
}

impl ComponentSpec {
    /// Create a spec for a factory with no bindings or arguments
    pub fn new(factory: impl Into<String>) -> Self {
        Self {
            factory: factory.into(),
            entries: Vec::new(),
            args: ComponentArgs::new(),
        }
    }

    /// Add a binding
    pub fn with_entry(mut self, binding: ComponentBinding) -> Self {
        self.entries.push(binding);
        self
    }

    /// Add a construction argument
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Check the spec is well formed
    ///
    /// A spec needs a factory name and at least one binding, and every
    /// binding needs an interface name.
    pub fn validate(&self) -> Result<()> {
        if self.factory.trim().is_empty() {
            return Err(Error::build("component spec has an empty class"));
        }
        if self.entries.is_empty() {
            return Err(Error::build(format!(
                "component spec '{}' has no entries",
                self.factory
            )));
        }
        if let Some(position) = self
            .entries
            .iter()
            .position(|entry| entry.interface.trim().is_empty())
        {
            return Err(Error::build(format!(
                "component spec '{}' entry {} has an empty interface",
                self.factory, position
            )));
        }
        Ok(())
    }
}
