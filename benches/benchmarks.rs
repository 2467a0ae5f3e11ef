use criterion::*;
use nalgebra_glm::{Mat4, Vec3};
use simple_ecs::prelude::*;
use simple_ecs::entities::EntityStore;

const COUNT: usize = 10000;

#[derive(Default, Clone, Copy, Component)]
struct Transform(Mat4);

#[derive(Default, Clone, Copy, Component)]
struct Translation(Vec3);

#[derive(Default, Clone, Copy, Component)]
struct Velocity(Vec3);

#[derive(Default)]
struct Movement;

impl System for Movement {
    fn setup(&mut self, requirements: &mut Requirements) {
        requirements.require_set::<(Transform, Translation, Velocity)>();
    }

    fn update(&mut self, members: &Membership, entities: &mut EntityStore, dt: f32) -> Result<()> {
        for entity in members {
            let velocity = entities.component::<Velocity>(entity)?;
            let translation = entities.get_component_mut::<Translation>(entity)?;
            translation.0 += velocity.0 * dt;

            let translation = translation.0;
            entities.get_component_mut::<Transform>(entity)?.0 = Mat4::new_translation(&translation);
        }
        Ok(())
    }
}

fn populated_context() -> (EcsContext, Vec<Entity>) {
    let mut ecs = EcsContext::with_config(EcsConfig {
        reserved_free_ids: COUNT,
        component_capacity: COUNT,
        ..EcsConfig::default()
    });
    ecs.register_component::<Transform>();
    ecs.register_component::<Translation>();
    ecs.register_component::<Velocity>();
    ecs.register_system::<Movement>();

    let entities = (0..COUNT).map(|_| ecs.create_entity()).collect::<Vec<_>>();
    for entity in entities.iter() {
        ecs.add_default_component::<Transform>(entity).unwrap();
        ecs.add_default_component::<Translation>(entity).unwrap();
        ecs.add_component(entity, Velocity(Vec3::new(1.0, 0.0, 0.0))).unwrap();
    }
    (ecs, entities)
}

fn create_entities(c: &mut Criterion) {
    c.bench_function("Create entities", |b| {
        b.iter_batched(
            EcsContext::new,
            |mut ecs| {
                for _ in 0..COUNT {
                    black_box(ecs.create_entity());
                }
                ecs
            },
            BatchSize::PerIteration,
        );
    });
}

fn destroy_entities(c: &mut Criterion) {
    c.bench_function("Destroy entities", |b| {
        b.iter_batched(
            populated_context,
            |(mut ecs, entities)| {
                for entity in entities.iter() {
                    ecs.destroy_entity(entity).unwrap();
                }
                ecs
            },
            BatchSize::PerIteration,
        );
    });
}

fn erase_components(c: &mut Criterion) {
    c.bench_function("Erase components", |b| {
        b.iter_batched(
            populated_context,
            |(mut ecs, entities)| {
                for entity in entities.iter().step_by(2) {
                    ecs.remove_component::<Velocity>(entity).unwrap();
                }
                ecs
            },
            BatchSize::PerIteration,
        );
    });
}

fn run_systems(c: &mut Criterion) {
    c.bench_function("Run systems", |b| {
        let (mut ecs, _) = populated_context();
        b.iter(|| ecs.run_systems(black_box(1.0 / 60.0)).unwrap());
    });
}

criterion_group!(
    benchmarks,
    create_entities,
    destroy_entities,
    erase_components,
    run_systems,
);
criterion_main!(benchmarks);
