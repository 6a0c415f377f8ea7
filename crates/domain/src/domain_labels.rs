use serde::Serialize;

/// Suffixes of a query name counted from the root.
///
/// Depth 2 is the TLD of a fully qualified name: the trailing dot produces an
/// empty last label that is never part of a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainLabels {
    pub tld: String,
    #[serde(rename = "2ld")]
    pub second_level: String,
    #[serde(rename = "3ld")]
    pub third_level: String,
    #[serde(rename = "4ld")]
    pub fourth_level: String,
}

impl DomainLabels {
    pub fn derive(name: &str) -> Self {
        let labels: Vec<&str> = name.split('.').collect();

        Self {
            tld: suffix(name, &labels, 2),
            second_level: suffix(name, &labels, 3),
            third_level: suffix(name, &labels, 4),
            fourth_level: suffix(name, &labels, 5),
        }
    }
}

// Names shorter than the requested depth yield the whole name, not a partial
// suffix. Consumers already index on this value.
fn suffix(name: &str, labels: &[&str], depth: usize) -> String {
    let len = labels.len();
    if depth > len {
        return name.to_string();
    }
    labels[len - depth..len - 1].join(".")
}
