pub mod catalog;
pub mod filter;

pub use catalog::{Equipment, EquipmentCategory, Exercise, ExerciseCatalog, MuscleGroup};
pub use filter::FilterCriteria;
