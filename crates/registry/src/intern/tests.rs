use std::sync::{Arc, Barrier};
use std::thread;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::VariableRegistry;
use crate::Variable;

#[test]
fn test_make_starts_at_zero() {
	let registry = VariableRegistry::new();
	let x = registry.make("x");
	assert_eq!(x.name(), "x");
	assert_eq!(x.value(), 0.0);
}

#[test]
fn test_make_returns_same_cell_for_equal_names() {
	let registry = VariableRegistry::new();
	let a = registry.make("x");
	let owned = String::from("x");
	let b = registry.make(&owned);
	assert!(Variable::same(&a, &b));
	assert_eq!(registry.len(), 1);
}

/// `make("x")` -> A, write 3.5, `make("x")` -> A reads 3.5, `make("y")` -> fresh B.
#[test]
fn test_shared_value_scenario() {
	let registry = VariableRegistry::new();
	let a = registry.make("x");
	a.set_value(3.5);

	let again = registry.make("x");
	assert!(Variable::same(&a, &again));
	assert_eq!(again.value(), 3.5);

	let b = registry.make("y");
	assert!(!Variable::same(&a, &b));
	assert_eq!(b.value(), 0.0);
	assert_eq!(a.value(), 3.5);
}

#[test]
fn test_unregistered_cell_is_never_interned() {
	let registry = VariableRegistry::new();
	let private = Arc::new(Variable::new("x"));
	private.set_value(9.0);

	let interned = registry.make("x");
	assert!(!Variable::same(&private, &interned));
	assert_eq!(interned.value(), 0.0);
	assert_eq!(private.value(), 9.0);
}

#[test]
fn test_lookup_does_not_create() {
	let registry = VariableRegistry::new();
	assert!(registry.lookup("x").is_none());
	assert!(!registry.contains("x"));
	assert!(registry.is_empty());

	let x = registry.make("x");
	let found = registry.lookup("x").expect("x was interned");
	assert!(Variable::same(&x, &found));
	assert!(registry.contains("x"));
}

#[test]
fn test_names_are_sorted_snapshot() {
	let registry = VariableRegistry::with_capacity(4);
	for name in ["zeta", "alpha", "", "mid"] {
		registry.make(name);
	}
	registry.make("alpha");
	assert_eq!(registry.names(), vec!["", "alpha", "mid", "zeta"]);
}

#[test]
fn test_registries_are_independent() {
	let first = VariableRegistry::new();
	let second = VariableRegistry::new();
	let a = first.make("x");
	let b = second.make("x");
	assert!(!Variable::same(&a, &b));
}

#[test]
fn test_concurrent_first_make_creates_one_cell() {
	const THREADS: usize = 16;

	let registry = VariableRegistry::new();
	let barrier = Barrier::new(THREADS);

	let cells: Vec<Arc<Variable>> = thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				s.spawn(|| {
					barrier.wait();
					registry.make("shared")
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().expect("worker panicked")).collect()
	});

	assert_eq!(registry.len(), 1);
	let canonical = registry.lookup("shared").expect("shared was interned");
	for cell in &cells {
		assert!(Variable::same(cell, &canonical));
	}
}

#[test]
fn test_concurrent_distinct_names_all_interned() {
	const THREADS: usize = 8;
	const PER_THREAD: usize = 64;

	let registry = VariableRegistry::new();
	thread::scope(|s| {
		for t in 0..THREADS {
			let registry = &registry;
			s.spawn(move || {
				for i in 0..PER_THREAD {
					registry.make(&format!("v{}", i * THREADS + t)).set_value(i as f64);
				}
			});
		}
	});

	assert_eq!(registry.len(), THREADS * PER_THREAD);
	assert_eq!(registry.make("v8").value(), 1.0);
}

proptest! {
	#[test]
	fn prop_equal_names_share_a_cell(name in ".*", value in any::<f64>()) {
		let registry = VariableRegistry::new();
		let a = registry.make(&name);
		a.set_value(value);
		let b = registry.make(name.as_str());
		prop_assert!(Variable::same(&a, &b));
		prop_assert_eq!(b.value().to_bits(), value.to_bits());
		prop_assert_eq!(b.name(), name.as_str());
	}

	#[test]
	fn prop_distinct_names_get_distinct_cells(a in ".*", b in ".*") {
		prop_assume!(a != b);
		let registry = VariableRegistry::new();
		let cell_a = registry.make(&a);
		let cell_b = registry.make(&b);
		prop_assert!(!Variable::same(&cell_a, &cell_b));
		prop_assert_eq!(registry.len(), 2);
	}
}
