//! The storage core of an entity-component-system.
//!
//! Entities are recycled integer handles, every component type lives in its own
//! sparse set, and systems iterate the entities they track once per step.
//! All state is owned by an explicit [EcsContext](prelude::EcsContext).

extern crate self as simple_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
pub mod error;
mod context;
mod config;

pub use error::{EcsError, Result};
pub use lazy_static::lazy_static;
pub use context::EcsContext;
pub use config::EcsConfig;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::context::EcsContext;
	pub use crate::config::EcsConfig;
	pub use crate::error::{EcsError, Result};
	pub use crate::entities::{Entity, EntityId, EntityStore};
}

#[cfg(test)]
mod tests;
