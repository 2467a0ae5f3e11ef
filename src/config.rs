use crate::data_structures::IdPoolConfig;
use crate::entities::EntityId;

/// Construction parameters of an [EcsContext](crate::context::EcsContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcsConfig {
	/// The first [entity id](EntityId) handed out.
	pub first_entity_id: EntityId,
	/// The numerical difference between two consecutively allocated ids.
	/// Offset/step pairs allow several contexts to share one id space without overlapping.
	/// Must not be zero.
	pub entity_id_step: EntityId,
	/// Amount of destroyed ids that can be recycled before the free list reallocates.
	pub reserved_free_ids: usize,
	/// Initial capacity of every component store registered without an explicit capacity.
	pub component_capacity: usize,
}

impl EcsConfig {
	pub(crate) fn id_pool(&self) -> IdPoolConfig<EntityId> {
		IdPoolConfig {
			start: self.first_entity_id,
			step: self.entity_id_step,
			reserved_frees: self.reserved_free_ids,
		}
	}
}

impl Default for EcsConfig {
	fn default() -> Self {
		Self {
			first_entity_id: 0,
			entity_id_step: 1,
			reserved_free_ids: 32,
			component_capacity: 0,
		}
	}
}
