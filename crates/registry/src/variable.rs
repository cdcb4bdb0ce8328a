use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A named numeric slot.
///
/// Cells returned by [`VariableRegistry::make`](crate::VariableRegistry::make) are interned:
/// every call with an equal name hands back the same `Arc`, so a write through one
/// handle is observed by all of them. Cells built with [`Variable::new`] are private
/// to whoever holds them and are never returned by a registry.
///
/// The value is stored as raw `f64` bits in an atomic with relaxed ordering. Reads and
/// writes never take a lock and are not ordered against each other or against other
/// memory; concurrent writers race and the last store wins.
pub struct Variable {
	name: Box<str>,
	bits: AtomicU64,
}

impl Variable {
	/// Creates an unregistered cell holding `0.0`.
	///
	/// The registry is neither consulted nor modified. Use
	/// [`VariableRegistry::make`](crate::VariableRegistry::make) for a shared cell.
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			bits: AtomicU64::new(0.0_f64.to_bits()),
		}
	}

	/// Returns the name this cell was created with.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the current value.
	pub fn value(&self) -> f64 {
		f64::from_bits(self.bits.load(Ordering::Relaxed))
	}

	/// Overwrites the value. Non-finite values are stored bit-for-bit.
	pub fn set_value(&self, value: f64) {
		self.bits.store(value.to_bits(), Ordering::Relaxed);
	}

	/// Returns true if both handles point at the same cell.
	pub fn same(a: &Arc<Self>, b: &Arc<Self>) -> bool {
		Arc::ptr_eq(a, b)
	}
}

impl fmt::Display for Variable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

impl fmt::Debug for Variable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Variable").field("name", &self.name).field("value", &self.value()).finish()
	}
}
