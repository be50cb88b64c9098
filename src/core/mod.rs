pub mod classifier;
pub mod engine;
