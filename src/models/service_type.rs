use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// One entry of the service catalog for a vehicle type: either a category
/// grouping sub-services, or a concrete billable service.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceType {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    // The backend sends null instead of [] on leaves.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub children: Vec<ServiceType>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub required_parts: Vec<PartRequirement>,
}

/// Parts consumed when a service is performed. Owned by its service type;
/// the quote is the sum of these across every billable service.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartRequirement {
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_quantity: Option<u32>,
}

impl ServiceType {
    /// Only leaves are directly billable; categories expand to their children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl PartRequirement {
    /// Quantity consumed per service; the backend omits it when it is 1.
    pub fn quantity(&self) -> u32 {
        self.required_quantity.unwrap_or(1)
    }

    /// Exact cost of this requirement: unit price times quantity.
    pub fn cost(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity())
    }
}

/// Depth-first lookup across the whole forest. Ids are unique per catalog
/// (a backend invariant), so the first match wins.
pub fn find_by_id<'a>(service_types: &'a [ServiceType], id: &str) -> Option<&'a ServiceType> {
    for service_type in service_types {
        if service_type.id == id {
            return Some(service_type);
        }
        if let Some(found) = find_by_id(&service_type.children, id) {
            return Some(found);
        }
    }
    None
}
