mod model;
mod repository;

pub use model::InsuranceTierDB;
pub use repository::InsuranceTierRepository;
