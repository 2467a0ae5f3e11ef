use crate::systems::{Membership, Requirements, System};
use crate::entities::EntityStore;
use crate::tests::Position;
use crate::{EcsContext, Result};

#[derive(Default)]
struct Gravity;

impl System for Gravity {
	fn setup(&mut self, requirements: &mut Requirements) {
		requirements.require::<Position>();
	}

	fn update(&mut self, members: &Membership, entities: &mut EntityStore, dt: f32) -> Result<()> {
		for entity in members {
			if let Ok(position) = entities.get_component_mut::<Position>(entity) {
				position.y -= dt;
			}
		}
		Ok(())
	}
}

#[test]
pub fn erase_keeps_other_entity_value() {
	let mut ecs = EcsContext::new();
	ecs.register_component::<Position>();

	let a = ecs.create_entity();
	ecs.add_component(&a, Position::new(1.0, 2.0, 3.0)).unwrap();
	let b = ecs.create_entity();
	ecs.add_component(&b, Position::new(4.0, 5.0, 6.0)).unwrap();

	ecs.remove_component::<Position>(&a).unwrap();

	assert_eq!(*ecs.get_component::<Position>(&b).unwrap(), Position::new(4.0, 5.0, 6.0));
	assert!(!ecs.has_component::<Position>(&a));
	assert!(!ecs.components().resolve::<Position>().unwrap().has_stored(a.id()));
}

#[test]
pub fn recycled_ids_bound_growth() {
	let mut ecs = EcsContext::new();
	ecs.register_component::<Position>();

	let first = (0..1000).map(|_| ecs.create_entity()).collect::<Vec<_>>();
	for entity in first.iter() {
		ecs.add_component(entity, Position::default()).unwrap();
	}
	for entity in first.iter() {
		ecs.destroy_entity(entity).unwrap();
	}
	assert_eq!(ecs.alive_count(), 0);

	let second = (0..1000).map(|_| ecs.create_entity()).collect::<Vec<_>>();
	assert!(ecs.id_pool().high_water_mark() <= 1000);
	assert!(second.iter().all(|entity| entity.id() < 1000));
	assert!(first.iter().all(|entity| !ecs.is_alive(entity)));
}

#[test]
pub fn members_join_before_components() {
	let mut ecs = EcsContext::new();
	ecs.register_component::<Position>();
	ecs.register_system::<Gravity>();

	let entity = ecs.create_entity();
	assert!(ecs.members::<Gravity>().unwrap().contains(&entity));
	assert!(!ecs.has_component::<Position>(&entity));
	assert!(!ecs.requirements::<Gravity>().unwrap().is_satisfied_by(&entity, &ecs));

	ecs.run_system::<Gravity>(1.0).unwrap();

	ecs.add_component(&entity, Position::new(0.0, 10.0, 0.0)).unwrap();
	assert!(ecs.requirements::<Gravity>().unwrap().is_satisfied_by(&entity, &ecs));

	ecs.run_system::<Gravity>(1.0).unwrap();
	assert_eq!(ecs.get_component::<Position>(&entity).unwrap().y, 9.0);
}
