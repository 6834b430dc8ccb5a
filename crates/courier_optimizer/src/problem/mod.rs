pub mod fleet;
pub mod order;
pub mod vehicle;
