pub mod validate;
pub mod workflow;
