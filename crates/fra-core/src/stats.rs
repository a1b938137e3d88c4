//! Overview statistics

use serde::{Deserialize, Serialize};

/// A counter with its month-over-month change, e.g. `+15k`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Current value
    pub value: u64,
    /// Change this month, signed label
    pub change: String,
}

impl Metric {
    /// Create metric
    #[must_use]
    pub fn new(value: u64, change: impl Into<String>) -> Self {
        Self {
            value,
            change: change.into(),
        }
    }

    /// Whether the change label is an increase
    #[inline]
    #[must_use]
    pub fn is_increase(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// The four headline counters on the overview page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Digitized FRA records
    pub digitized_records: Metric,
    /// Villages mapped
    pub villages_mapped: Metric,
    /// Assets identified from imagery
    pub assets_identified: Metric,
    /// Grievances logged
    pub grievances_logged: Metric,
}

impl DashboardStats {
    /// Metrics paired with their translation keys, in card order
    #[must_use]
    pub fn cards(&self) -> [(&'static str, &Metric); 4] {
        [
            ("digitized_records", &self.digitized_records),
            ("villages_mapped", &self.villages_mapped),
            ("assets_identified", &self.assets_identified),
            ("grievances_logged", &self.grievances_logged),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_detection() {
        assert!(Metric::new(10, "+5").is_increase());
        assert!(!Metric::new(10, "-5").is_increase());
    }
}
