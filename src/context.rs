use crate::systems::{Membership, Requirements, System, SystemStore};
use crate::entities::{Entity, EntityStore};
use std::ops::{Deref, DerefMut};
use crate::error::Result;
use crate::EcsConfig;

/// A container for [`entities`](Entity) and systems.
///
/// All [`entities`](Entity) can be referenced using a unique handle of type [`Entity`]
/// and can hold at most one [`component`](crate::components::Component) of each registered type.
/// Component access is available through [Deref] to the underlying [EntityStore].
///
/// Every piece of state lives in the context itself, so independent contexts never interfere.
pub struct EcsContext {
	entity_store: EntityStore,
	system_store: SystemStore,
}

impl EcsContext {
	pub fn new() -> Self {
		Self::with_config(EcsConfig::default())
	}

	/// Create an [EcsContext] with the provided [EcsConfig].
	///
	/// # Panics
	/// Panics if `config.entity_id_step` is zero.
	pub fn with_config(config: EcsConfig) -> Self {
		Self {
			entity_store: EntityStore::new(&config),
			system_store: SystemStore::new(),
		}
	}

	/// Creates a single [`entity`](Entity) with no components attached.
	/// The entity immediately becomes a member of every registered [system](System),
	/// regardless of the components the system requires.
	///
	/// # Panics
	/// Panics if every [entity id](crate::entities::EntityId) is in use.
	pub fn create_entity(&mut self) -> Entity {
		let entity = self.entity_store.create_entity();
		self.system_store.register_entity(entity);
		entity
	}

	/// Destroys the provided [`entity`](Entity) and erases all of its components.
	///
	/// The entity stays in the membership of the [systems](System) it belongs to
	/// until [prune_memberships](EcsContext::prune_memberships) is called.
	pub fn destroy_entity(&mut self, entity: &Entity) -> Result<()> {
		self.entity_store.destroy_entity(entity)
	}

	/// Removes destroyed [`entities`](Entity) from the membership of every [system](System).
	/// Returns the amount of removed memberships.
	pub fn prune_memberships(&mut self) -> usize {
		self.system_store.prune(&self.entity_store)
	}

	/// Add a new default constructed [system](System) to the [EcsContext].
	/// [System::setup] runs before this function returns.
	///
	/// # Panics
	/// Panics if a system of the same type has already been registered.
	pub fn register_system<T: System + Default>(&mut self) -> &mut T {
		self.system_store.add_system(T::default())
	}

	/// Add an already constructed [system](System) to the [EcsContext].
	/// [System::setup] runs before this function returns.
	///
	/// # Panics
	/// Panics if a system of the same type has already been registered.
	pub fn add_system<T: System>(&mut self, system: T) -> &mut T {
		self.system_store.add_system(system)
	}

	pub fn system<T: System>(&self) -> Result<&T> {
		self.system_store.get::<T>()
	}

	pub fn system_mut<T: System>(&mut self) -> Result<&mut T> {
		self.system_store.get_mut::<T>()
	}

	/// The [`entities`](Entity) tracked by the [system](System) `T`.
	pub fn members<T: System>(&self) -> Result<&Membership> {
		self.system_store.members::<T>()
	}

	/// The components declared by the [system](System) `T` during setup.
	pub fn requirements<T: System>(&self) -> Result<&Requirements> {
		self.system_store.requirements::<T>()
	}

	/// Execute the [system](System) `T` once.
	///
	/// # Arguments
	/// * `dt` - Elapsed time since the previous step
	pub fn run_system<T: System>(&mut self, dt: f32) -> Result<()> {
		self.system_store.run_system::<T>(&mut self.entity_store, dt)
	}

	/// Execute all [systems](System), in registration order.
	///
	/// # Arguments
	/// * `dt` - Elapsed time since the previous step
	pub fn run_systems(&mut self, dt: f32) -> Result<()> {
		self.system_store.run_systems(&mut self.entity_store, dt)
	}

	/// The amount of registered [systems](System).
	pub fn system_count(&self) -> usize {
		self.system_store.len()
	}
}

impl Default for EcsContext {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for EcsContext {
	type Target = EntityStore;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.entity_store
	}
}

impl DerefMut for EcsContext {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.entity_store
	}
}
