use crate::components::{Component, ComponentRegistry, ComponentType};
use crate::entities::{Entity, EntityId, EntityInstance};
use crate::data_structures::IdPool;
use crate::error::{EcsError, Result};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::EcsConfig;

type Hasher = BuildHasherDefault<NoHashHasher<EntityId>>;

/// A container for [entities](Entity) and their associated [components](Component).
///
/// New entities are created through the [EcsContext](crate::context::EcsContext),
/// which also keeps the [systems](crate::systems::System) informed.
pub struct EntityStore {
	pool: IdPool<EntityId>,
	instances: HashMap<EntityId, EntityInstance, Hasher>,
	alive: usize,
	component_capacity: usize,
	components: ComponentRegistry,
}

impl EntityStore {
	pub(crate) fn new(config: &EcsConfig) -> Self {
		Self {
			pool: IdPool::with_config(config.id_pool()),
			instances: HashMap::with_capacity_and_hasher(config.reserved_free_ids, Hasher::default()),
			alive: 0,
			component_capacity: config.component_capacity,
			components: ComponentRegistry::new(),
		}
	}

	/// Creates a single [`entity`](Entity) with no [`components`](Component) attached.
	pub(crate) fn create_entity(&mut self) -> Entity {
		let index = self.pool.next();
		let instance = self.instances.entry(index).or_default();
		debug_assert!(!instance.alive, "Entity id {} was handed out twice", index);

		instance.alive = true;
		self.alive += 1;

		log::trace!("Created entity {} (version {})", index, instance.version);
		Entity {
			index,
			version: instance.version,
		}
	}

	/// Destroys the provided [`entity`](Entity), removing all of its [`components`](Component).
	/// The handle, and every copy of it, becomes stale.
	pub(crate) fn destroy_entity(&mut self, entity: &Entity) -> Result<()> {
		self.validate(entity)?;

		let erased = self.components.erase_all(entity.index);
		if let Some(instance) = self.instances.get_mut(&entity.index) {
			instance.alive = false;
			instance.version = instance.version.checked_add(1).unwrap_or(1);
		}

		self.alive -= 1;
		self.pool.free(entity.index);

		log::trace!("Destroyed entity {} ({} components erased)", entity.index, erased);
		Ok(())
	}

	/// Checks whether `entity` refers to a live entity.
	#[inline]
	pub fn is_alive(&self, entity: &Entity) -> bool {
		match self.instances.get(&entity.index) {
			Some(instance) => instance.alive && instance.version == entity.version,
			None => false,
		}
	}

	/// Returns the handle of the live entity currently using `id`, if any.
	pub fn entity(&self, id: EntityId) -> Option<Entity> {
		let instance = self.instances.get(&id).filter(|instance| instance.alive)?;
		Some(Entity {
			index: id,
			version: instance.version,
		})
	}

	/// The amount of live entities.
	#[inline(always)]
	pub fn alive_count(&self) -> usize {
		self.alive
	}

	/// The pool the entity ids are drawn from.
	#[inline(always)]
	pub fn id_pool(&self) -> &IdPool<EntityId> {
		&self.pool
	}

	/// Registers the [`component`](Component) type `T`.
	/// Returns *false* if `T` was already registered.
	pub fn register_component<T: Component>(&mut self) -> bool {
		self.components.register_type(ComponentType::of::<T>(), self.component_capacity)
	}

	/// Registers the [`component`](Component) type `T` with room for `capacity` components.
	/// Returns *false* if `T` was already registered.
	pub fn register_component_with_capacity<T: Component>(&mut self, capacity: usize) -> bool {
		self.components.register_with_capacity::<T>(capacity)
	}

	/// Attach a [`component`](Component) to the specified [`entity`](Entity).
	/// If a component of the same type is already attached it is replaced, and the previous value returned.
	pub fn add_component<T: Component>(&mut self, entity: &Entity, component: T) -> Result<Option<T>> {
		self.validate(entity)?;
		Ok(self.components.resolve_mut::<T>()?.insert(entity.index, component))
	}

	/// Attach a default constructed [`component`](Component) to the specified [`entity`](Entity).
	pub fn add_default_component<T: Component>(&mut self, entity: &Entity) -> Result<Option<T>> {
		self.add_component(entity, T::default())
	}

	/// Detach a [`component`](Component) from the specified [`entity`](Entity).
	/// Returns `None` if no component of that type was attached.
	pub fn remove_component<T: Component>(&mut self, entity: &Entity) -> Result<Option<T>> {
		self.validate(entity)?;
		Ok(self.components.resolve_mut::<T>()?.erase(entity.index))
	}

	/// Checks whether a live `entity` has a [`component`](Component) of type `T`.
	/// Unregistered types are never attached to anything.
	pub fn has_component<T: Component>(&self, entity: &Entity) -> bool {
		if !self.is_alive(entity) {
			return false;
		}

		match self.components.resolve::<T>() {
			Ok(store) => store.has_stored(entity.index),
			Err(_) => false,
		}
	}

	/// Gets a reference to a [`component`](Component) bound to a specific [`entity`](Entity).
	pub fn get_component<T: Component>(&self, entity: &Entity) -> Result<&T> {
		self.validate(entity)?;
		self.components.resolve::<T>()?.get(entity.index)
	}

	/// Gets a mutable reference to a [`component`](Component) bound to a specific [`entity`](Entity).
	pub fn get_component_mut<T: Component>(&mut self, entity: &Entity) -> Result<&mut T> {
		self.validate(entity)?;
		self.components.resolve_mut::<T>()?.get_mut(entity.index)
	}

	/// Gets a copy of a [`component`](Component) bound to a specific [`entity`](Entity).
	pub fn component<T: Component>(&self, entity: &Entity) -> Result<T> {
		self.get_component::<T>(entity).copied()
	}

	/// Takes a snapshot of the [`entities`](Entity) that have a [`component`](Component) of type `T`.
	/// The snapshot stays valid while the store is modified.
	pub fn entities_with<T: Component>(&self) -> Result<Vec<Entity>> {
		let store = self.components.resolve::<T>()?;

		let mut ids = vec![0; store.get_entities(None)];
		let count = store.get_entities(Some(ids.as_mut_slice()));
		debug_assert_eq!(count, ids.len());

		Ok(ids.into_iter().filter_map(|id| self.entity(id)).collect())
	}

	#[inline(always)]
	pub fn components(&self) -> &ComponentRegistry {
		&self.components
	}

	#[inline(always)]
	pub fn components_mut(&mut self) -> &mut ComponentRegistry {
		&mut self.components
	}

	fn validate(&self, entity: &Entity) -> Result<()> {
		match self.is_alive(entity) {
			true => Ok(()),
			false => Err(EcsError::StaleEntity { entity: *entity }),
		}
	}
}

impl Default for EntityStore {
	fn default() -> Self {
		Self::new(&EcsConfig::default())
	}
}
