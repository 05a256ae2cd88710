mod model;
mod repository;

pub use model::VehicleDB;
pub use repository::VehicleRepository;
