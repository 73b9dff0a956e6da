pub mod redis;
pub mod sled;
