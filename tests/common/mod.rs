// Each test binary pulls in the subset of fixtures it needs.
#![allow(dead_code)]

use evcare_quoting::{PartRequirement, ServiceType};
use rust_decimal::Decimal;

pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .is_test(true)
    .try_init();
}

pub fn part(unit_price: i64, required_quantity: Option<u32>) -> PartRequirement {
    PartRequirement {
        unit_price: Decimal::from(unit_price),
        required_quantity,
    }
}

pub fn leaf(id: &str, name: &str, parent_id: Option<&str>, parts: Vec<PartRequirement>) -> ServiceType {
    ServiceType {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: parent_id.map(|p| p.to_string()),
        children: Vec::new(),
        required_parts: parts,
    }
}

pub fn category(id: &str, name: &str, children: Vec<ServiceType>) -> ServiceType {
    ServiceType {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: None,
        children,
        required_parts: Vec::new(),
    }
}

pub fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// The sedan catalog most tests run against: a maintenance category with two
/// sub-services, a battery category, and a standalone labor-only leaf.
pub fn maintenance_catalog() -> Vec<ServiceType> {
    vec![
        category(
            "svc-maint",
            "Periodic maintenance",
            vec![
                leaf("svc-oil", "Reduction gear oil change", Some("svc-maint"), vec![part(200000, Some(1))]),
                leaf("svc-brake", "Brake pad replacement", Some("svc-maint"), vec![part(150000, Some(2))]),
            ],
        ),
        category(
            "svc-battery",
            "Battery care",
            vec![
                leaf("svc-battery-health", "Battery health report", Some("svc-battery"), vec![part(120000, Some(1))]),
                leaf(
                    "svc-coolant-flush",
                    "Battery coolant flush",
                    Some("svc-battery"),
                    vec![part(350000, Some(2)), part(80000, None)],
                ),
            ],
        ),
        // Labor only, no parts: quotes at zero.
        leaf("svc-tires", "Tire rotation", None, Vec::new()),
    ]
}
