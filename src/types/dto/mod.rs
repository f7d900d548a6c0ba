pub mod common;
pub mod hooks;
