use crate::components::Component;

mod component_registry_tests;
mod lifecycle_tests;

#[derive(Default, Clone, Copy, Debug, PartialEq, Component)]
pub struct Position {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}

impl Position {
	pub fn new(x: f32, y: f32, z: f32) -> Self {
		Self { x, y, z }
	}
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Component)]
pub struct Velocity(pub f32, pub f32, pub f32);

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Component)]
pub struct Health(pub u32);
