use crate::components::{Component, ComponentSet, ComponentType};
use crate::entities::{Entity, EntityStore};
use std::collections::BTreeSet;
use crate::error::Result;

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
pub trait System: 'static {
	/// Initialises the [System] and declares the components it works with.
	/// Called exactly once, when the system is registered.
	/// **This function should not be called by user code.**
	fn setup(&mut self, requirements: &mut Requirements) {
		let _ = requirements;
	}

	/// Executes the system once over its members.
	///
	/// Members are not filtered by the declared [Requirements]: an update must be prepared
	/// for members that lack some of the required components, or that have been destroyed.
	///
	/// # Arguments
	/// * `members` - The entities tracked by this system
	/// * `entities` - The store owning the entities and their components
	/// * `dt` - Elapsed time since the previous step, as measured by the caller
	fn update(&mut self, members: &Membership, entities: &mut EntityStore, dt: f32) -> Result<()>;
}

/// The [component types](ComponentType) a [System] declares it works with.
///
/// Requirements are declarative: they are recorded, but do not restrict which entities
/// become members of the system. Use [is_satisfied_by](Requirements::is_satisfied_by)
/// to skip members that lack a required component.
#[derive(Default, Debug, Clone)]
pub struct Requirements {
	types: Vec<ComponentType>,
}

impl Requirements {
	/// Declare `T` as required. Declaring the same type twice has no effect.
	pub fn require<T: Component>(&mut self) -> &mut Self {
		self.push(ComponentType::of::<T>());
		self
	}

	/// Declare every type of the tuple `S` as required.
	pub fn require_set<S: ComponentSet>(&mut self) -> &mut Self {
		for component in S::component_types() {
			self.push(component);
		}
		self
	}

	#[inline]
	pub fn contains<T: Component>(&self) -> bool {
		self.types.contains(&ComponentType::of::<T>())
	}

	/// Checks whether `entity` is alive and has every required component attached.
	pub fn is_satisfied_by(&self, entity: &Entity, entities: &EntityStore) -> bool {
		if !entities.is_alive(entity) {
			return false;
		}

		let components = entities.components();
		self.types.iter().all(|component| match components.container(component.id()) {
			Some(store) => store.has_stored(entity.id()),
			None => false,
		})
	}

	/// The required types, in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &ComponentType> {
		self.types.iter()
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.types.len()
	}

	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	fn push(&mut self, component: ComponentType) {
		if !self.types.contains(&component) {
			self.types.push(component);
		}
	}
}

/// The [entities](Entity) tracked by a [System], ordered by id.
#[derive(Default, Debug, Clone)]
pub struct Membership {
	entities: BTreeSet<Entity>,
}

impl Membership {
	#[inline]
	pub fn contains(&self, entity: &Entity) -> bool {
		self.entities.contains(entity)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Entity> {
		self.entities.iter()
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.entities.len()
	}

	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	pub(crate) fn insert(&mut self, entity: Entity) -> bool {
		self.entities.insert(entity)
	}

	pub(crate) fn retain(&mut self, f: impl FnMut(&Entity) -> bool) {
		self.entities.retain(f)
	}
}

impl<'l> IntoIterator for &'l Membership {
	type Item = &'l Entity;
	type IntoIter = std::collections::btree_set::Iter<'l, Entity>;

	fn into_iter(self) -> Self::IntoIter {
		self.entities.iter()
	}
}
