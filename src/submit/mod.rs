pub mod file_gate;
pub mod guard;
