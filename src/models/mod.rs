pub mod activities;
pub mod students;

pub use activities::ActivityRow;
pub use students::{StudentRow, StudentUpdate};
