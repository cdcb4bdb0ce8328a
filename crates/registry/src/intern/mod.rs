//! Name-to-cell interning table.
//!
//! # Invariants
//!
//! * At most one [`Variable`] is ever created per distinct name, even when several
//!   threads race on the same new name.
//! * Entries are only inserted. Nothing is replaced, removed or cleared.
//! * Cells created outside the table ([`Variable::new`]) never enter it.
//!
//! # Concurrency
//!
//! Hits take the shared lock only. A miss takes the exclusive lock and re-checks
//! through the `entry` API, so check-then-insert is one critical section. No lock is
//! held once a handle has been returned; reads and writes on the cell go straight
//! to its atomic slot.

use std::collections::hash_map::Entry;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Variable;

static GLOBAL: LazyLock<VariableRegistry> = LazyLock::new(VariableRegistry::new);

/// Interning table mapping names to shared [`Variable`] cells.
///
/// The process-wide instance is reached through [`VariableRegistry::global`]. Separate
/// instances are independent of it and of each other.
#[derive(Default)]
pub struct VariableRegistry {
	vars: RwLock<FxHashMap<Box<str>, Arc<Variable>>>,
}

impl VariableRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty registry with room for `capacity` names.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			vars: RwLock::new(FxHashMap::with_capacity_and_hasher(capacity, Default::default())),
		}
	}

	/// Returns the process-wide registry, initializing it on first use.
	pub fn global() -> &'static Self {
		&GLOBAL
	}

	/// Returns the cell for `name`, creating it at `0.0` if it does not exist yet.
	///
	/// Calls with equal names return the same `Arc` regardless of order or timing.
	pub fn make(&self, name: &str) -> Arc<Variable> {
		if let Some(var) = self.lookup(name) {
			return var;
		}

		let mut vars = self.vars.write();
		match vars.entry(Box::from(name)) {
			Entry::Occupied(entry) => Arc::clone(entry.get()),
			Entry::Vacant(entry) => {
				let var = Arc::clone(entry.insert(Arc::new(Variable::new(name))));
				tracing::trace!(name, total = vars.len(), "variable.intern");
				var
			}
		}
	}

	/// Returns the cell for `name` if it has been interned. Never creates one.
	pub fn lookup(&self, name: &str) -> Option<Arc<Variable>> {
		self.vars.read().get(name).cloned()
	}

	/// Returns true if `name` has been interned.
	pub fn contains(&self, name: &str) -> bool {
		self.vars.read().contains_key(name)
	}

	/// Number of interned names.
	pub fn len(&self) -> usize {
		self.vars.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.vars.read().is_empty()
	}

	/// Returns the interned names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.vars.read().keys().map(|name| name.to_string()).collect();
		names.sort_unstable();
		names
	}
}

impl std::fmt::Debug for VariableRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("VariableRegistry").field("len", &self.len()).finish()
	}
}

#[cfg(test)]
mod tests;
