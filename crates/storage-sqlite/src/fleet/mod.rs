mod model;
mod repository;

pub use model::FleetEntryDB;
pub use repository::FleetRepository;
