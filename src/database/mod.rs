pub mod activities_repo;
pub mod seed;
pub mod store;
pub mod students_repo;

pub use store::{SharedStore, Store};
