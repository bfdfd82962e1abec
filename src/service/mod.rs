pub mod autofill_service;
pub mod service_model;
