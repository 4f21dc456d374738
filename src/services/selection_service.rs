use std::collections::HashSet;

use crate::error::QuoteError;
use crate::models::service_type::{find_by_id, ServiceType};

pub struct SelectionService;

impl SelectionService {
    /// Normalize a raw tree selection into the billable set of service type ids.
    ///
    /// A selected category with none of its direct children selected stands for
    /// all of its sub-services; once the customer drills into specific children,
    /// those win and the category contributes nothing of its own. Category ids
    /// are never emitted, and ids missing from the catalog are skipped.
    pub fn resolve_selection(selected: &[String], catalog: &[ServiceType]) -> HashSet<String> {
        let mut resolved = HashSet::new();
        for id in selected {
            match find_by_id(catalog, id) {
                Some(service_type) => Self::resolve_node(service_type, selected, &mut resolved),
                None => log::debug!("selected service type {} is not in the catalog, skipping", id),
            }
        }
        resolved
    }

    /// Strict variant of `resolve_selection`: the first selected id missing
    /// from the catalog is an error instead of being skipped.
    pub fn resolve_selection_strict(
        selected: &[String],
        catalog: &[ServiceType],
    ) -> Result<HashSet<String>, QuoteError> {
        for id in selected {
            if find_by_id(catalog, id).is_none() {
                return Err(QuoteError::UnknownServiceType(id.clone()));
            }
        }
        Ok(Self::resolve_selection(selected, catalog))
    }

    fn resolve_node(node: &ServiceType, selected: &[String], resolved: &mut HashSet<String>) {
        if node.is_leaf() {
            resolved.insert(node.id.clone());
            return;
        }
        // Only direct children count as "drilled into" at this level; the
        // selected ones resolve on their own pass over `selected`.
        if node.children.iter().any(|child| selected.contains(&child.id)) {
            return;
        }
        for child in &node.children {
            Self::resolve_node(child, selected, resolved);
        }
    }
}
