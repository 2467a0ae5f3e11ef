//! [Components](Component) are the plain data attached to [entities](crate::entities::Entity).
//!
//! Every [Component] type gets its own [ComponentStore], a sparse set owned by the
//! [ComponentRegistry] and resolved through the type's [ComponentId].

mod component_id;
mod component_set;
mod component_type;
mod component_store;
mod component_registry;

pub use component_id::*;
pub use component_set::*;
pub use component_type::*;
pub use component_store::*;
pub use component_registry::*;
pub use simple_ecs_derive::Component;
