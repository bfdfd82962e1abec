pub mod hints;
pub mod structure_model;
