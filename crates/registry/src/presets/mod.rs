//! Initial values for interned variables, loaded from TOML.
//!
//! ```toml
//! [variables]
//! x = 3.5
//! pi = 3.141592653589793
//! big = inf
//! ```
//!
//! Applying presets interns each name and overwrites its value. Cells are never
//! removed or renamed by a preset.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::{Variable, VariableRegistry};

/// Errors from loading or combining presets.
#[derive(Debug, Error)]
pub enum PresetError {
	#[error("failed to read presets from {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse presets: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("variable {name:?} is preset more than once")]
	Duplicate { name: String },
}

/// Result type for preset operations.
pub type Result<T> = std::result::Result<T, PresetError>;

/// A set of name/value pairs to seed a registry with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Presets {
	#[serde(default)]
	pub variables: BTreeMap<String, f64>,
}

impl Presets {
	/// Parses presets from a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a TOML preset file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = fs::read_to_string(path).map_err(|source| PresetError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&input)
	}

	/// Adds the entries of `other`.
	///
	/// Fails without modifying `self` if any name is defined by both.
	pub fn merge(&mut self, other: Presets) -> Result<()> {
		if let Some(name) = other.variables.keys().find(|name| self.variables.contains_key(*name)) {
			return Err(PresetError::Duplicate { name: name.clone() });
		}
		self.variables.extend(other.variables);
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.variables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.variables.is_empty()
	}

	/// Interns every preset name in `registry` and sets its value.
	///
	/// Returns the affected cells in name order.
	pub fn apply(&self, registry: &VariableRegistry) -> Vec<Arc<Variable>> {
		let applied: Vec<_> = self
			.variables
			.iter()
			.map(|(name, &value)| {
				let var = registry.make(name);
				var.set_value(value);
				var
			})
			.collect();
		tracing::debug!(count = applied.len(), total = registry.len(), "presets.apply");
		applied
	}

	/// Applies the presets to the process-wide registry.
	pub fn apply_global(&self) -> Vec<Arc<Variable>> {
		self.apply(VariableRegistry::global())
	}
}
