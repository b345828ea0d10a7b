pub mod activities_service;
pub mod export_service;
pub mod students_service;
