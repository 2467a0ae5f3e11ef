use crate::components::{ComponentId, ComponentRegistry, ComponentStore, ComponentType};
use crate::tests::{Health, Position, Velocity};
use crate::EcsError;

#[test]
pub fn component_ids_are_unique_and_stable() {
	assert_eq!(ComponentId::of::<Position>(), ComponentId::of::<Position>());
	assert_ne!(ComponentId::of::<Position>(), ComponentId::of::<Velocity>());
	assert_ne!(ComponentId::of::<Velocity>(), ComponentId::of::<Health>());
	assert_eq!(ComponentType::of::<Health>().id(), ComponentId::of::<Health>());
}

#[test]
pub fn resolve_registered_store() {
	let mut registry = ComponentRegistry::new();
	assert!(registry.register::<Position>());
	assert!(registry.is_registered::<Position>());
	assert!(!registry.is_registered::<Velocity>());

	registry.resolve_mut::<Position>().unwrap().insert(0, Position::new(1.0, 1.0, 1.0));
	assert_eq!(registry.resolve::<Position>().unwrap().len(), 1);
	assert_eq!(registry.len(), 1);
}

#[test]
pub fn resolve_unregistered_fails() {
	let registry = ComponentRegistry::new();
	assert!(matches!(
		registry.resolve::<Velocity>(),
		Err(EcsError::ComponentNotRegistered { .. })
	));
}

#[test]
pub fn register_twice_keeps_existing_store() {
	let mut registry = ComponentRegistry::new();
	registry.register::<Health>();
	registry.resolve_mut::<Health>().unwrap().insert(3, Health(7));

	assert!(!registry.register_with_capacity::<Health>(64));
	assert_eq!(*registry.resolve::<Health>().unwrap().get(3).unwrap(), Health(7));
}

#[test]
pub fn type_erased_container_access() {
	let mut registry = ComponentRegistry::new();
	registry.register_type(ComponentType::of::<Velocity>(), 16);

	let id = ComponentId::of::<Velocity>();
	let container = registry.container_mut(id).unwrap();
	container.insert_default(2);
	assert_eq!(container.component_type(), ComponentType::of::<Velocity>());

	let store = registry.container(id).unwrap().as_any().downcast_ref::<ComponentStore<Velocity>>();
	assert_eq!(*store.unwrap().get(2).unwrap(), Velocity::default());
	assert!(registry.container(ComponentId::of::<Health>()).is_none());
}

#[test]
pub fn erase_all_removes_from_every_store() {
	let mut registry = ComponentRegistry::new();
	registry.register::<Position>();
	registry.register::<Health>();
	registry.register::<Velocity>();

	registry.resolve_mut::<Position>().unwrap().insert(1, Position::default());
	registry.resolve_mut::<Health>().unwrap().insert(1, Health(3));
	registry.resolve_mut::<Health>().unwrap().insert(2, Health(4));

	assert_eq!(registry.erase_all(1), 2);
	assert!(!registry.resolve::<Position>().unwrap().has_stored(1));
	assert!(!registry.resolve::<Health>().unwrap().has_stored(1));
	assert!(registry.resolve::<Health>().unwrap().has_stored(2));
	assert_eq!(registry.ids().count(), 3);
}
