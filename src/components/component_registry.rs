use crate::components::{Component, ComponentContainer, ComponentId, ComponentStore, ComponentType};
use crate::error::{EcsError, Result};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use crate::entities::EntityId;
use std::collections::HashMap;

type Hasher = BuildHasherDefault<NoHashHasher<usize>>;

/// Owns one [ComponentStore] per registered [Component] type.
#[derive(Default)]
pub struct ComponentRegistry {
	stores: HashMap<ComponentId, Box<dyn ComponentContainer>, Hasher>,
}

impl ComponentRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `T`, creating an empty [ComponentStore] for it.
	/// Returns *false* if `T` was already registered, in which case the existing store is kept.
	pub fn register<T: Component>(&mut self) -> bool {
		self.register_type(ComponentType::of::<T>(), 0)
	}

	/// Registers `T`, creating a [ComponentStore] with room for `capacity` components.
	/// Returns *false* if `T` was already registered, in which case the existing store is kept.
	pub fn register_with_capacity<T: Component>(&mut self, capacity: usize) -> bool {
		self.register_type(ComponentType::of::<T>(), capacity)
	}

	/// Registers a [component type](ComponentType) known only at runtime.
	/// Returns *false* if the type was already registered, in which case the existing store is kept.
	pub fn register_type(&mut self, component: ComponentType, capacity: usize) -> bool {
		if self.stores.contains_key(&component.id()) {
			log::warn!("Component `{}` is already registered, keeping the existing store", component.name());
			return false;
		}

		log::debug!("Registering component `{}` ({:?})", component.name(), component.id());
		self.stores.insert(component.id(), component.make_store(capacity));
		true
	}

	#[inline]
	pub fn is_registered<T: Component>(&self) -> bool {
		self.stores.contains_key(&ComponentId::of::<T>())
	}

	/// Get the [ComponentStore] registered for `T`.
	pub fn resolve<T: Component>(&self) -> Result<&ComponentStore<T>> {
		self.stores
			.get(&ComponentId::of::<T>())
			.ok_or_else(not_registered::<T>)?
			.as_any()
			.downcast_ref()
			.ok_or_else(type_mismatch::<T>)
	}

	/// Get a mutable reference to the [ComponentStore] registered for `T`.
	pub fn resolve_mut<T: Component>(&mut self) -> Result<&mut ComponentStore<T>> {
		self.stores
			.get_mut(&ComponentId::of::<T>())
			.ok_or_else(not_registered::<T>)?
			.as_any_mut()
			.downcast_mut()
			.ok_or_else(type_mismatch::<T>)
	}

	/// Get the type-erased store registered under `id`.
	pub fn container(&self, id: ComponentId) -> Option<&dyn ComponentContainer> {
		self.stores.get(&id).map(|store| &**store)
	}

	/// Get the type-erased store registered under `id`.
	pub fn container_mut(&mut self, id: ComponentId) -> Option<&mut dyn ComponentContainer> {
		match self.stores.get_mut(&id) {
			Some(store) => Some(&mut **store),
			None => None,
		}
	}

	/// Removes every component stored for `entity`.
	/// Returns the amount of components removed.
	pub fn erase_all(&mut self, entity: EntityId) -> usize {
		self.stores.values_mut().map(|store| store.erase(entity)).filter(|&erased| erased).count()
	}

	/// The [component ids](ComponentId) of all registered types, in no particular order.
	pub fn ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
		self.stores.keys().copied()
	}

	/// The amount of registered component types.
	#[inline]
	pub fn len(&self) -> usize {
		self.stores.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.stores.is_empty()
	}
}

fn not_registered<T: Component>() -> EcsError {
	EcsError::ComponentNotRegistered {
		component: std::any::type_name::<T>(),
	}
}

fn type_mismatch<T: Component>() -> EcsError {
	EcsError::TypeMismatch {
		expected: std::any::type_name::<T>(),
	}
}
