//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be manually registered with an [EcsContext](crate::context::EcsContext)
//! for it to become active during the execution of the program.
//! Every entity created afterwards joins the [Membership] of every registered system.

mod system;
mod system_store;

pub use system::*;
pub(crate) use system_store::*;
