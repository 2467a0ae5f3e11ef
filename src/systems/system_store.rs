use crate::systems::{Membership, Requirements, System};
use crate::entities::{Entity, EntityStore};
use crate::error::{EcsError, Result};
use std::collections::HashMap;
use std::any::{Any, TypeId};

/// Object-safe view of a [System] that can be downcast back to its concrete type.
pub(crate) trait SystemObject: System {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: System> SystemObject for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

struct SystemSlot {
	name: &'static str,
	system: Box<dyn SystemObject>,
	requirements: Requirements,
	members: Membership,
}

#[derive(Default)]
pub(crate) struct SystemStore {
	indices: HashMap<TypeId, usize>,
	systems: Vec<SystemSlot>,
}

impl SystemStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_system<T: System>(&mut self, mut system: T) -> &mut T {
		let type_id = TypeId::of::<T>();
		assert!(!self.indices.contains_key(&type_id), "System was already added to the current context");

		let mut requirements = Requirements::default();
		system.setup(&mut requirements);

		let name = std::any::type_name::<T>();
		log::debug!("Registered system `{}` requiring {} components", name, requirements.len());

		self.systems.push(SystemSlot {
			name,
			system: Box::new(system),
			requirements,
			members: Membership::default(),
		});

		let index = self.systems.len() - 1;
		self.indices.insert(type_id, index);

		self.systems[index]
			.system
			.as_any_mut()
			.downcast_mut()
			.expect("System slot holds a different type than the one just inserted")
	}

	/// Adds a newly created entity to every system.
	pub fn register_entity(&mut self, entity: Entity) {
		for slot in self.systems.iter_mut() {
			slot.members.insert(entity);
		}
	}

	/// Drops every member that no longer refers to a live entity.
	/// Returns the amount of removed memberships.
	pub fn prune(&mut self, entities: &EntityStore) -> usize {
		let mut removed = 0;
		for slot in self.systems.iter_mut() {
			let before = slot.members.len();
			slot.members.retain(|entity| entities.is_alive(entity));
			removed += before - slot.members.len();
		}
		removed
	}

	pub fn get<T: System>(&self) -> Result<&T> {
		self.slot::<T>()?
			.system
			.as_any()
			.downcast_ref()
			.ok_or_else(type_mismatch::<T>)
	}

	pub fn get_mut<T: System>(&mut self) -> Result<&mut T> {
		self.slot_mut::<T>()?
			.system
			.as_any_mut()
			.downcast_mut()
			.ok_or_else(type_mismatch::<T>)
	}

	pub fn members<T: System>(&self) -> Result<&Membership> {
		Ok(&self.slot::<T>()?.members)
	}

	pub fn requirements<T: System>(&self) -> Result<&Requirements> {
		Ok(&self.slot::<T>()?.requirements)
	}

	pub fn run_system<T: System>(&mut self, entities: &mut EntityStore, dt: f32) -> Result<()> {
		let slot = self.slot_mut::<T>()?;
		slot.system.update(&slot.members, entities, dt)
	}

	/// Executes every system once, in registration order.
	/// Stops at the first system that fails.
	pub fn run_systems(&mut self, entities: &mut EntityStore, dt: f32) -> Result<()> {
		for slot in self.systems.iter_mut() {
			if let Err(err) = slot.system.update(&slot.members, entities, dt) {
				log::debug!("System `{}` failed: {}", slot.name, err);
				return Err(err);
			}
		}
		Ok(())
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.systems.len()
	}

	fn slot<T: System>(&self) -> Result<&SystemSlot> {
		match self.indices.get(&TypeId::of::<T>()) {
			Some(&index) => Ok(&self.systems[index]),
			None => Err(not_registered::<T>()),
		}
	}

	fn slot_mut<T: System>(&mut self) -> Result<&mut SystemSlot> {
		match self.indices.get(&TypeId::of::<T>()) {
			Some(&index) => Ok(&mut self.systems[index]),
			None => Err(not_registered::<T>()),
		}
	}
}

fn not_registered<T: System>() -> EcsError {
	EcsError::SystemNotRegistered {
		system: std::any::type_name::<T>(),
	}
}

fn type_mismatch<T: System>() -> EcsError {
	EcsError::TypeMismatch {
		expected: std::any::type_name::<T>(),
	}
}
