pub mod ports;
pub mod context;
