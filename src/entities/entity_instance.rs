use crate::entities::EntityStore;
use crate::components::Component;
use crate::error::Result;

/// The raw integer identifier of an [Entity].
///
/// Ids are recycled once their entity is destroyed, so a raw id alone
/// cannot tell a live entity apart from a destroyed one that used the same id.
pub type EntityId = u32;

/// A unique handle to an `Entity`
///
/// The handle pairs the [EntityId] with the version the id had when the entity was created.
/// The version changes whenever the entity is destroyed, invalidating every copy of the handle.
/// The default handle never refers to a live entity.
#[derive(Default, Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Entity {
	pub(crate) index: EntityId,
	pub(crate) version: u32,
}

impl Entity {
	#[inline(always)]
	pub const fn id(&self) -> EntityId {
		self.index
	}

	#[inline(always)]
	pub const fn version(&self) -> u32 {
		self.version
	}

	/// Shorthand for [EntityStore::add_component].
	#[inline]
	pub fn add_component<T: Component>(&self, entities: &mut EntityStore, component: T) -> Result<Option<T>> {
		entities.add_component(self, component)
	}

	/// Shorthand for [EntityStore::add_default_component].
	#[inline]
	pub fn add_default_component<T: Component>(&self, entities: &mut EntityStore) -> Result<Option<T>> {
		entities.add_default_component::<T>(self)
	}

	/// Shorthand for [EntityStore::remove_component].
	#[inline]
	pub fn remove_component<T: Component>(&self, entities: &mut EntityStore) -> Result<Option<T>> {
		entities.remove_component::<T>(self)
	}

	/// Shorthand for [EntityStore::has_component].
	#[inline]
	pub fn has_component<T: Component>(&self, entities: &EntityStore) -> bool {
		entities.has_component::<T>(self)
	}

	/// Shorthand for [EntityStore::get_component].
	#[inline]
	pub fn get_component<'l, T: Component>(&self, entities: &'l EntityStore) -> Result<&'l T> {
		entities.get_component::<T>(self)
	}

	/// Shorthand for [EntityStore::get_component_mut].
	#[inline]
	pub fn get_component_mut<'l, T: Component>(&self, entities: &'l mut EntityStore) -> Result<&'l mut T> {
		entities.get_component_mut::<T>(self)
	}
}

impl From<Entity> for EntityId {
	fn from(entity: Entity) -> Self {
		entity.index
	}
}

pub(crate) struct EntityInstance {
	pub(crate) version: u32,
	pub(crate) alive: bool,
}

impl Default for EntityInstance {
	fn default() -> Self {
		Self {
			version: 1,
			alive: false,
		}
	}
}
