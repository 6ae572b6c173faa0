use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An organization that can be named as a library publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub oid: Option<String>,
}

/// Orders organizations for the publisher picker: case-insensitive by name,
/// ties broken by the exact name so the order is total.
pub fn sort_by_name(mut organizations: Vec<Organization>) -> Vec<Organization> {
    organizations.sort_by(|a, b| compare_names(&a.name, &b.name));
    organizations
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
