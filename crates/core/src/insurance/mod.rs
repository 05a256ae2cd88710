//! Insurance module - tier lookup models and descriptor classification.

mod classifier;
mod insurance_constants;
mod insurance_model;
mod insurance_traits;

pub use classifier::classify_insurance;
pub use insurance_constants::*;
pub use insurance_model::InsuranceTier;
pub use insurance_traits::InsuranceTierRepositoryTrait;
