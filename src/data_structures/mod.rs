mod id_pool;

pub use id_pool::*;
