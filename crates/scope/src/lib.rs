//! Local variable bindings layered over a [`VariableRegistry`].
//!
//! A [`Scope`] holds cells that are not interned anywhere and prefers them over the
//! registry when resolving a name. Anything not bound locally falls through to the
//! registry's shared cell. The scope never inserts its own cells into the registry.

use std::sync::Arc;

use namecell_registry::{Variable, VariableRegistry};
use rustc_hash::FxHashMap;

/// Name table whose bindings shadow a registry.
#[derive(Debug)]
pub struct Scope<'r> {
	registry: &'r VariableRegistry,
	locals: FxHashMap<Box<str>, Arc<Variable>>,
}

impl Scope<'static> {
	/// Creates an empty scope over the process-wide registry.
	pub fn new() -> Self {
		Self::with_registry(VariableRegistry::global())
	}
}

impl Default for Scope<'static> {
	fn default() -> Self {
		Self::new()
	}
}

impl<'r> Scope<'r> {
	/// Creates an empty scope over `registry`.
	pub fn with_registry(registry: &'r VariableRegistry) -> Self {
		Self {
			registry,
			locals: FxHashMap::default(),
		}
	}

	/// Binds `var` under its own name.
	///
	/// Returns the previous local binding for that name, if any.
	pub fn allow(&mut self, var: Arc<Variable>) -> Option<Arc<Variable>> {
		if self.registry.contains(var.name()) {
			tracing::debug!(name = var.name(), "scope.shadow");
		}
		self.locals.insert(Box::from(var.name()), var)
	}

	/// Creates a fresh unregistered cell for `name` and binds it.
	pub fn declare(&mut self, name: &str) -> Arc<Variable> {
		let var = Arc::new(Variable::new(name));
		self.allow(Arc::clone(&var));
		var
	}

	/// Resolves `name`, preferring the local binding and otherwise interning it in the
	/// registry.
	pub fn resolve(&self, name: &str) -> Arc<Variable> {
		match self.locals.get(name) {
			Some(var) => Arc::clone(var),
			None => self.registry.make(name),
		}
	}

	/// Like [`Scope::resolve`], but never creates a registry entry.
	pub fn lookup(&self, name: &str) -> Option<Arc<Variable>> {
		self.locals.get(name).cloned().or_else(|| self.registry.lookup(name))
	}

	pub fn is_local(&self, name: &str) -> bool {
		self.locals.contains_key(name)
	}

	/// Returns the locally bound names, sorted.
	pub fn locals(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.locals.keys().map(|name| &**name).collect();
		names.sort_unstable();
		names
	}

	/// The registry unbound names fall through to.
	pub fn registry(&self) -> &'r VariableRegistry {
		self.registry
	}
}
