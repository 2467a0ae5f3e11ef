//! A unique runtime identifier tied to a [Component] type.
//!
//! Developers shouldn't rely on [component ids](ComponentId), as they are not stable between program re-runs.
//! They are handed out lazily, the first time a [Component] type asks for its id,
//! and are used as keys of the [ComponentRegistry](crate::components::ComponentRegistry).

use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::AtomicUsize;
use crate::components::Component;
use std::hash::Hash;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// A globally unique identifier for a type implementing the [`Component`] trait.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	/// Get the [ComponentId] of the type `T`.
	#[inline(always)]
	pub fn of<T: Component>() -> ComponentId {
		T::component_id()
	}

	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}
}

/// Generates a new [ComponentId]. **Should not be called from user code.**
///
/// To be called from code generated by #[derive([Component])], once per type.
#[doc(hidden)]
pub fn next_component_id() -> ComponentId {
	let value = NEXT_ID.fetch_add(1, Relaxed);
	debug_assert!(
		value <= u32::MAX as usize,
		"This is an insane number of components. Please seek help."
	);
	ComponentId { value }
}
