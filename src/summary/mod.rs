pub mod decision;
pub mod engine;
