// Services layer - Business logic
pub mod mirror_service;

pub use mirror_service::{plan, MirrorOutcome, MirrorPlan, MirrorService};
