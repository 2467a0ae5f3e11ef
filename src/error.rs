//! Checked failures reported by the [EcsContext](crate::context::EcsContext) and its stores.
//!
//! Only conditions that can be detected at the call site are reported here.
//! Broken caller obligations that cannot be detected cheaply (e.g. freeing an id twice
//! through a raw [IdPool](crate::data_structures::IdPool)) are logic errors instead.

use crate::entities::{Entity, EntityId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EcsError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EcsError {
	#[error("entity {entity} has no `{component}` component")]
	ComponentNotFound { entity: EntityId, component: &'static str },

	#[error("component type `{component}` has not been registered")]
	ComponentNotRegistered { component: &'static str },

	#[error("stored value is not of the requested type `{expected}`")]
	TypeMismatch { expected: &'static str },

	#[error("entity {entity:?} has already been destroyed")]
	StaleEntity { entity: Entity },

	#[error("system `{system}` has not been registered")]
	SystemNotRegistered { system: &'static str },
}
