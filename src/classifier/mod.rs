pub mod classifier;
pub mod classifier_model;
pub mod save_type;
