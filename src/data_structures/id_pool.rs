use std::fmt::Debug;
use std::ops::{Add, Sub};

/// An unsigned integer type an [IdPool] can hand out.
pub trait PoolId: Copy + Eq + Ord + Debug + Add<Output = Self> + Sub<Output = Self> {
	const ZERO: Self;
	const ONE: Self;

	/// Addition that yields `None` instead of leaving the id space.
	fn checked_advance(self, step: Self) -> Option<Self>;
}

macro_rules! impl_pool_id {
	($($t: ty),*) => {
		$(
			impl PoolId for $t {
				const ZERO: Self = 0;
				const ONE: Self = 1;

				#[inline(always)]
				fn checked_advance(self, step: Self) -> Option<Self> {
					self.checked_add(step)
				}
			}
		)*
	};
}

impl_pool_id!(u16, u32, u64, usize);

/// Construction parameters of an [IdPool].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPoolConfig<T: PoolId> {
	/// The first id handed out by the pool.
	pub start: T,
	/// The numerical difference between two consecutively allocated ids.
	pub step: T,
	/// Amount of ids that can be returned to the pool before the free list reallocates.
	pub reserved_frees: usize,
}

impl<T: PoolId> Default for IdPoolConfig<T> {
	fn default() -> Self {
		Self {
			start: T::ZERO,
			step: T::ONE,
			reserved_frees: 32,
		}
	}
}

/// A recycler of integer ids.
///
/// Fresh ids are taken from a monotonically advancing high-water mark,
/// freed ids are kept on a stack and handed out again last-in-first-out.
/// Freeing the most recently allocated id shrinks the high-water mark instead.
#[derive(Debug, Clone)]
pub struct IdPool<T: PoolId> {
	free_ids: Vec<T>,
	start: T,
	current: T,
	step: T,
	exhausted: bool,
}

impl<T: PoolId> IdPool<T> {
	/// Create a new [IdPool] starting at 0 with a step of 1.
	pub fn new() -> Self {
		Self::with_config(IdPoolConfig::default())
	}

	/// Create a new [IdPool] from the specified configuration.
	///
	/// # Arguments
	/// * `config` - The start value, step size and free list reservation of the pool
	///
	/// # Panics
	/// Panics if `config.step` is zero.
	pub fn with_config(config: IdPoolConfig<T>) -> Self {
		assert!(config.step != T::ZERO, "IdPool step must not be zero");
		Self {
			free_ids: Vec::with_capacity(config.reserved_frees),
			start: config.start,
			current: config.start,
			step: config.step,
			exhausted: false,
		}
	}

	/// Take an unused id out of the pool.
	///
	/// # Panics
	/// Panics if every id representable by `T` is in use.
	#[inline]
	pub fn next(&mut self) -> T {
		match self.try_next() {
			Some(id) => id,
			None => panic!("IdPool ran out of ids (high-water mark {:?})", self.current),
		}
	}

	/// Take an unused id out of the pool.
	/// Returns `None` if every id representable by `T` is in use.
	pub fn try_next(&mut self) -> Option<T> {
		if let Some(id) = self.free_ids.pop() {
			return Some(id);
		}

		if self.exhausted {
			return None;
		}

		let id = self.current;
		match self.current.checked_advance(self.step) {
			Some(next) => self.current = next,
			None => self.exhausted = true,
		}
		Some(id)
	}

	/// Return an id to the pool.
	///
	/// Only ids previously returned by [next](IdPool::next) and not freed since may be passed.
	/// Breaking this rule will eventually hand out the same id twice.
	///
	/// Freeing the newest id moves the high-water mark back by the configured step,
	/// so with a step of 1 this compacts ids that are exactly one below the mark.
	///
	/// # Arguments
	/// * `id` - The id to put back into the pool
	#[inline]
	pub fn free(&mut self, id: T) {
		debug_assert!(
			id >= self.start && (id < self.current || (self.exhausted && id == self.current)),
			"Id {:?} was never handed out by this pool",
			id
		);

		if self.exhausted {
			// `current` is the last id of the range, which is still handed out.
			if id == self.current {
				self.exhausted = false;
			} else {
				self.free_ids.push(id);
			}
		} else if id == self.current - self.step {
			self.current = id;
		} else {
			self.free_ids.push(id);
		}
	}

	/// The next id that will be allocated once the free list is exhausted.
	/// Once the whole range is in use, this is the last id that was handed out.
	#[inline(always)]
	pub fn high_water_mark(&self) -> T {
		self.current
	}

	/// The amount of ids waiting to be reused.
	#[inline(always)]
	pub fn free_count(&self) -> usize {
		self.free_ids.len()
	}

	/// Checks whether the fresh part of the range is used up.
	/// Freed ids can still be handed out.
	#[inline(always)]
	pub fn is_exhausted(&self) -> bool {
		self.exhausted
	}

	#[inline(always)]
	pub fn start(&self) -> T {
		self.start
	}

	#[inline(always)]
	pub fn step(&self) -> T {
		self.step
	}
}

impl<T: PoolId> Default for IdPool<T> {
	fn default() -> Self {
		Self::new()
	}
}
