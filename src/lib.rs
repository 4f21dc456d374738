//! Service selection and quote pricing for the EVCare booking flow.
//!
//! The booking site lets a customer check service categories and individual
//! sub-services in a tree control. This crate turns that raw selection into
//! the canonical set of billable service type ids ([`SelectionService`]) and
//! prices it from the parts each service consumes ([`QuoteService`]),
//! producing the [`ResolvedSelection`] fragment the appointment endpoints
//! accept. Both operations are pure and synchronous; catalogs are supplied
//! already deserialized and never mutated.

pub mod error;
pub mod models;
pub mod services;

pub use error::QuoteError;
pub use models::appointment::{Appointment, ResolvedSelection};
pub use models::service_type::{find_by_id, PartRequirement, ServiceType};
pub use services::quote_service::{QuoteBreakdown, QuoteLine, QuoteService};
pub use services::selection_service::SelectionService;
