//! Process-wide interning of named numeric cells.
//!
//! Every distinct name maps to exactly one shared [`Variable`], created at `0.0` on
//! first reference and kept for the life of the process:
//!
//! ```
//! let x = namecell_registry::make("x");
//! x.set_value(3.5);
//! assert_eq!(namecell_registry::make("x").value(), 3.5);
//! ```
//!
//! Private cells for scoped bindings are built with [`Variable::new`] and never
//! enter any registry.

mod intern;
pub mod presets;
mod variable;

use std::sync::Arc;

pub use intern::VariableRegistry;
pub use presets::{PresetError, Presets};
pub use variable::Variable;

/// Returns the process-wide cell for `name`, creating it at `0.0` on first use.
pub fn make(name: &str) -> Arc<Variable> {
	VariableRegistry::global().make(name)
}

/// Returns the process-wide cell for `name` if it exists.
pub fn lookup(name: &str) -> Option<Arc<Variable>> {
	VariableRegistry::global().lookup(name)
}
