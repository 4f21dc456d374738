pub mod quote_service;
pub mod selection_service;
