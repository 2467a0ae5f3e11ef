use crate::components::{ComponentContainer, ComponentId, ComponentStore};
use std::hash::{Hash, Hasher};
use std::fmt::{Debug, Formatter};

/// Plain data attached to an [entity](crate::entities::Entity).
///
/// Implement it with #\[derive([`Component`](simple_ecs_derive::Component))],
/// which also assigns the type its [ComponentId].
pub trait Component
where
	Self: 'static + Copy + Default,
{
	fn component_id() -> ComponentId;
}

/// A runtime representation of a type implementing the [`Component`] trait.
#[derive(Clone, Copy)]
pub struct ComponentType {
	id: ComponentId,
	name: &'static str,
	make_store: fn(usize) -> Box<dyn ComponentContainer>,
}

impl ComponentType {
	/// Returns the [`ComponentType`] of T.
	pub fn of<T: Component>() -> Self {
		Self {
			id: ComponentId::of::<T>(),
			name: std::any::type_name::<T>(),
			make_store: |capacity| Box::new(ComponentStore::<T>::with_capacity(capacity)),
		}
	}

	pub const fn id(&self) -> ComponentId {
		self.id
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Creates an empty [store](ComponentStore) for the represented type.
	pub fn make_store(&self, capacity: usize) -> Box<dyn ComponentContainer> {
		(self.make_store)(capacity)
	}
}

impl Eq for ComponentType {}

impl PartialEq<Self> for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Hash for ComponentType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state)
	}
}

impl Debug for ComponentType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentType")
			.field("id", &self.id.value())
			.field("name", &self.name)
			.finish()
	}
}
