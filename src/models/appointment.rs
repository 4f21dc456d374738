use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::models::service_type::ServiceType;
use crate::services::quote_service::QuoteService;

/// A maintenance appointment as the booking API stores it. The service tree
/// in effect at booking time is embedded so the appointment can still be
/// quoted after the live catalog changes.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    pub status: String,
    pub service_type_ids: Vec<String>,
    pub quote_price: Decimal,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub service_types: Vec<ServiceType>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Re-quote the booked services against a freshly loaded catalog, falling
    /// back to the snapshot taken at booking time for anything the live
    /// catalog no longer prices.
    pub fn requote(&self, catalog: &[ServiceType]) -> Decimal {
        QuoteService::calculate_quote(&self.service_type_ids, catalog, Some(&self.service_types))
    }
}

/// Outcome of a selection round: the billable service type ids and the
/// aggregate parts quote, shaped for the create/update-appointment payload.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSelection {
    pub service_type_ids: Vec<String>,
    pub quote_price: Decimal,
}
