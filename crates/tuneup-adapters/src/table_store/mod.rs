//! Table store adapters implementing the `TableSource` port.

pub mod memory;

pub use memory::InMemoryTables;
