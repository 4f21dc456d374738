pub mod appointment;
pub mod service_type;
