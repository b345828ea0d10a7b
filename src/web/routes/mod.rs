pub mod activities;
pub mod export;
pub mod students;
