use crate::components::{Component, ComponentType};
use crate::error::{EcsError, Result};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use crate::entities::EntityId;
use std::collections::HashMap;
use std::any::Any;

type Hasher = BuildHasherDefault<NoHashHasher<EntityId>>;

/// The type-erased interface shared by every [ComponentStore].
///
/// It lets the [ComponentRegistry](crate::components::ComponentRegistry) keep heterogeneous stores
/// in a single map and operate on them without knowing their concrete [Component] type.
pub trait ComponentContainer: Any {
	/// The [component type](ComponentType) held by the container.
	fn component_type(&self) -> ComponentType;

	/// Stores a default constructed component for `entity`.
	fn insert_default(&mut self, entity: EntityId);

	/// Removes the component stored for `entity`.
	/// Returns *false* if there was none.
	fn erase(&mut self, entity: EntityId) -> bool;

	/// Checks whether a component is stored for `entity`.
	fn has_stored(&self, entity: EntityId) -> bool;

	/// See [ComponentStore::get_entities].
	fn get_entities(&self, buffer: Option<&mut [EntityId]>) -> usize;

	/// The amount of stored components.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A sparse set mapping [entities](EntityId) to their component of type `T`.
///
/// Components are kept tightly packed in insertion order, with removals filling
/// the gap with the last component. Insertion, removal and lookup are all O(1),
/// but the storage order of the components is not stable across removals.
pub struct ComponentStore<T: Component> {
	components: Vec<T>,
	entities: Vec<EntityId>,
	indices: HashMap<EntityId, usize, Hasher>,
}

impl<T: Component> ComponentStore<T> {
	/// Create a new, empty [ComponentStore].
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	/// Create a new [ComponentStore] with room for `capacity` components.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			components: Vec::with_capacity(capacity),
			entities: Vec::with_capacity(capacity),
			indices: HashMap::with_capacity_and_hasher(capacity, Hasher::default()),
		}
	}

	/// Store a component for `entity`.
	///
	/// If a component was already stored for `entity` it is overwritten in place
	/// and the previous value is returned.
	///
	/// # Arguments
	/// * `entity` - The entity to add the component for
	/// * `component` - The component to store
	pub fn insert(&mut self, entity: EntityId, component: T) -> Option<T> {
		if let Some(&index) = self.indices.get(&entity) {
			return Some(std::mem::replace(&mut self.components[index], component));
		}

		self.indices.insert(entity, self.components.len());
		self.components.push(component);
		self.entities.push(entity);
		None
	}

	/// Remove the component stored for `entity`, returning it.
	///
	/// The last component of the store is moved into the freed slot,
	/// so the position of one other entity's component may change.
	///
	/// # Arguments
	/// * `entity` - The entity the component has been stored for
	pub fn erase(&mut self, entity: EntityId) -> Option<T> {
		let index = self.indices.remove(&entity)?;
		let component = self.components.swap_remove(index);
		self.entities.swap_remove(index);

		if let Some(&moved) = self.entities.get(index) {
			self.indices.insert(moved, index);
		}

		debug_assert_eq!(self.components.len(), self.indices.len());
		Some(component)
	}

	/// Get the component stored for `entity`.
	pub fn get(&self, entity: EntityId) -> Result<&T> {
		match self.indices.get(&entity) {
			Some(&index) => Ok(&self.components[index]),
			None => Err(Self::not_found(entity)),
		}
	}

	/// Get a mutable reference to the component stored for `entity`.
	pub fn get_mut(&mut self, entity: EntityId) -> Result<&mut T> {
		match self.indices.get(&entity) {
			Some(&index) => Ok(&mut self.components[index]),
			None => Err(Self::not_found(entity)),
		}
	}

	/// Get a copy of the component stored for `entity`.
	#[inline]
	pub fn get_copy(&self, entity: EntityId) -> Result<T> {
		self.get(entity).copied()
	}

	#[inline]
	pub fn has_stored(&self, entity: EntityId) -> bool {
		self.indices.contains_key(&entity)
	}

	/// Copy the entities which have a component stored into `buffer`.
	///
	/// Call with `None` to get the amount of entities, allocate a buffer of that size,
	/// then call again to fill it.
	/// Returns the amount of entities written, which is bounded by the length of the buffer.
	///
	/// # Arguments
	/// * `buffer` - The buffer to write to, or `None` to only query the amount of entities
	pub fn get_entities(&self, buffer: Option<&mut [EntityId]>) -> usize {
		match buffer {
			None => self.entities.len(),
			Some(buffer) => {
				let count = usize::min(buffer.len(), self.entities.len());
				buffer[..count].copy_from_slice(&self.entities[..count]);
				count
			},
		}
	}

	/// The entities which have a component stored, in storage order.
	#[inline(always)]
	pub fn entities(&self) -> &[EntityId] {
		&self.entities
	}

	/// The stored components, in storage order.
	#[inline(always)]
	pub fn values(&self) -> &[T] {
		&self.components
	}

	pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
		self.entities.iter().copied().zip(self.components.iter())
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
		self.entities.iter().copied().zip(self.components.iter_mut())
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.components.len()
	}

	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}

	pub fn clear(&mut self) {
		self.components.clear();
		self.entities.clear();
		self.indices.clear();
	}

	fn not_found(entity: EntityId) -> EcsError {
		EcsError::ComponentNotFound {
			entity,
			component: std::any::type_name::<T>(),
		}
	}
}

impl<T: Component> Default for ComponentStore<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Component> ComponentContainer for ComponentStore<T> {
	fn component_type(&self) -> ComponentType {
		ComponentType::of::<T>()
	}

	fn insert_default(&mut self, entity: EntityId) {
		ComponentStore::insert(self, entity, T::default());
	}

	fn erase(&mut self, entity: EntityId) -> bool {
		ComponentStore::erase(self, entity).is_some()
	}

	fn has_stored(&self, entity: EntityId) -> bool {
		ComponentStore::has_stored(self, entity)
	}

	fn get_entities(&self, buffer: Option<&mut [EntityId]>) -> usize {
		ComponentStore::get_entities(self, buffer)
	}

	fn len(&self) -> usize {
		ComponentStore::len(self)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
