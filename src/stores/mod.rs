// Stores layer - Data access and repository pattern
pub mod admin_store;

pub use admin_store::AdminStore;
