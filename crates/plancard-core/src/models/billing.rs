//! Billing cycle selection

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which price variant the section shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annual => "annual",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(BillingCycle::Monthly),
            "annual" | "yearly" | "year" => Ok(BillingCycle::Annual),
            other => Err(format!(
                "Unknown billing cycle '{}' (expected monthly or annual)",
                other
            )),
        }
    }
}

// Query strings and override files accept the same spellings as the CLI
impl<'de> Deserialize<'de> for BillingCycle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Billing toggle state owned by one section instance
///
/// Starts at monthly on every mount and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BillingState {
    cycle: BillingCycle,
}

impl BillingState {
    pub fn new(cycle: BillingCycle) -> Self {
        Self { cycle }
    }

    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn is(&self, cycle: BillingCycle) -> bool {
        self.cycle == cycle
    }

    /// Switch to `target`. Returns false when it was already active, so
    /// callers can skip the re-render.
    pub fn select(&mut self, target: BillingCycle) -> bool {
        if self.cycle == target {
            return false;
        }
        tracing::debug!(from = %self.cycle, to = %target, "billing cycle changed");
        self.cycle = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_monthly() {
        assert_eq!(BillingState::default().cycle(), BillingCycle::Monthly);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut state = BillingState::default();
        assert!(!state.select(BillingCycle::Monthly));
        assert!(state.select(BillingCycle::Annual));
        assert!(!state.select(BillingCycle::Annual));
        assert!(state.is(BillingCycle::Annual));
        assert!(state.select(BillingCycle::Monthly));
        assert_eq!(state.cycle(), BillingCycle::Monthly);
    }

    #[test]
    fn test_parse_cycle() {
        assert_eq!("annual".parse::<BillingCycle>(), Ok(BillingCycle::Annual));
        assert_eq!("Monthly".parse::<BillingCycle>(), Ok(BillingCycle::Monthly));
        assert!("weekly".parse::<BillingCycle>().is_err());
    }

    #[test]
    fn test_deserialize_matches_from_str() {
        for raw in ["Annual", "ANNUAL", "yearly", "year"] {
            let json = format!("\"{}\"", raw);
            assert_eq!(
                serde_json::from_str::<BillingCycle>(&json).unwrap(),
                BillingCycle::Annual,
                "{}",
                raw
            );
        }
        assert_eq!(serde_json::from_str::<BillingCycle>("\"Month\"").unwrap(), BillingCycle::Monthly);
        assert!(serde_json::from_str::<BillingCycle>("\"weekly\"").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&BillingCycle::Annual).unwrap();
        assert_eq!(json, "\"annual\"");
    }
}
