// API layer - HTTP endpoints
pub mod health;
pub mod hooks;

pub use health::HealthApi;
pub use hooks::HooksApi;
