use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::models::appointment::ResolvedSelection;
use crate::models::service_type::{find_by_id, PartRequirement, ServiceType};
use crate::services::selection_service::SelectionService;

/// Per-service share of a quote, for display on the booking summary.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub service_type_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub line_total: Decimal,
}

/// A quote with its per-service lines. `quote_price` always equals the sum
/// of the line totals.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub lines: Vec<QuoteLine>,
    pub quote_price: Decimal,
}

pub struct QuoteService;

impl QuoteService {
    /// Price a set of billable service type ids from the parts each service
    /// consumes.
    ///
    /// For each id the primary catalog is searched first; the fallback (the
    /// service tree snapshot stored on an appointment) is consulted only when
    /// the primary has no priced node for that id. Ids priced nowhere
    /// contribute zero so a stale selection still produces a usable quote.
    pub fn calculate_quote(
        service_type_ids: &[String],
        catalog: &[ServiceType],
        fallback: Option<&[ServiceType]>,
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        for id in service_type_ids {
            match Self::priced_node(id, catalog, fallback) {
                Some(service_type) => total += Self::parts_total(&service_type.required_parts),
                None => log::warn!("no part pricing for service type {}, quoting it at zero", id),
            }
        }
        total
    }

    /// Strict variant of `calculate_quote`: the first id that cannot be priced
    /// is an error, distinguishing ids the catalogs have never heard of from
    /// ids that exist but carry no parts.
    pub fn calculate_quote_strict(
        service_type_ids: &[String],
        catalog: &[ServiceType],
        fallback: Option<&[ServiceType]>,
    ) -> Result<Decimal, QuoteError> {
        let mut total = Decimal::ZERO;
        for id in service_type_ids {
            match Self::priced_node(id, catalog, fallback) {
                Some(service_type) => total += Self::parts_total(&service_type.required_parts),
                None if Self::exists(id, catalog, fallback) => {
                    return Err(QuoteError::UnpricedServiceType(id.clone()))
                }
                None => return Err(QuoteError::UnknownServiceType(id.clone())),
            }
        }
        Ok(total)
    }

    /// Like `calculate_quote`, but keeps the per-service lines. Unpriced ids
    /// stay visible as zero lines so the summary page can flag them.
    pub fn calculate_quote_breakdown(
        service_type_ids: &[String],
        catalog: &[ServiceType],
        fallback: Option<&[ServiceType]>,
    ) -> QuoteBreakdown {
        let mut lines = Vec::with_capacity(service_type_ids.len());
        let mut total = Decimal::ZERO;
        for id in service_type_ids {
            let line_total = match Self::priced_node(id, catalog, fallback) {
                Some(service_type) => Self::parts_total(&service_type.required_parts),
                None => Decimal::ZERO,
            };
            let name = find_by_id(catalog, id)
                .or_else(|| fallback.and_then(|snapshot| find_by_id(snapshot, id)))
                .map(|service_type| service_type.name.clone());
            total += line_total;
            lines.push(QuoteLine {
                service_type_id: id.clone(),
                name,
                line_total,
            });
        }
        QuoteBreakdown {
            lines,
            quote_price: total,
        }
    }

    /// Resolve a raw tree selection and price it in one step, shaped for the
    /// appointment payload. Ids are sorted so the payload is stable across
    /// calls.
    pub fn resolve_and_quote(
        selected: &[String],
        catalog: &[ServiceType],
        fallback: Option<&[ServiceType]>,
    ) -> ResolvedSelection {
        let mut service_type_ids: Vec<String> =
            SelectionService::resolve_selection(selected, catalog)
                .into_iter()
                .collect();
        service_type_ids.sort();
        let quote_price = Self::calculate_quote(&service_type_ids, catalog, fallback);
        ResolvedSelection {
            service_type_ids,
            quote_price,
        }
    }

    fn parts_total(parts: &[PartRequirement]) -> Decimal {
        parts.iter().map(PartRequirement::cost).sum()
    }

    // A node only counts as priced when it actually carries parts; a bare
    // match in the primary must not shadow a priced fallback entry.
    fn priced_node<'a>(
        id: &str,
        catalog: &'a [ServiceType],
        fallback: Option<&'a [ServiceType]>,
    ) -> Option<&'a ServiceType> {
        Self::find_priced(catalog, id)
            .or_else(|| fallback.and_then(|snapshot| Self::find_priced(snapshot, id)))
    }

    fn find_priced<'a>(service_types: &'a [ServiceType], id: &str) -> Option<&'a ServiceType> {
        for service_type in service_types {
            if service_type.id == id && !service_type.required_parts.is_empty() {
                return Some(service_type);
            }
            if let Some(found) = Self::find_priced(&service_type.children, id) {
                return Some(found);
            }
        }
        None
    }

    fn exists(id: &str, catalog: &[ServiceType], fallback: Option<&[ServiceType]>) -> bool {
        find_by_id(catalog, id).is_some()
            || fallback.is_some_and(|snapshot| find_by_id(snapshot, id).is_some())
    }
}
