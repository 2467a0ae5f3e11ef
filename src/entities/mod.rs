//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;  
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//! Handles carry a version so that a handle to a destroyed entity can't be mistaken
//! for a newer entity that reuses its [id](EntityId).

mod entity_store;
mod entity_instance;

pub use entity_store::*;
pub use entity_instance::*;
