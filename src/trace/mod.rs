pub mod logger;
pub mod sink;
pub mod trace;
