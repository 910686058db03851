pub mod events;
pub mod factory;
pub mod logs;
#[cfg(test)]
pub mod memory;
