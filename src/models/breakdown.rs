//! Breakdown model.
//!
//! This module defines the Breakdown struct, the derived categorization of
//! a journey's minutes into regular and overtime tiers plus distance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The derived time/distance categorization of one journey.
///
/// A breakdown is computed, never persisted: it is a pure function of a
/// [`Journey`](crate::models::Journey) and a
/// [`Settings`](crate::models::Settings) profile. The portion of
/// `total_trabalhado` not covered by either overtime tier is implicitly
/// regular time, so `horas_extras_50 + horas_extras_100` never exceeds
/// `total_trabalhado`.
///
/// Field names follow the original store's vocabulary ("trabalhado" is
/// worked time, "horas extras" are overtime hours, "km rodados" is
/// distance driven); the wire format is camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// Total worked minutes for the shift.
    pub total_trabalhado: u32,
    /// Overtime minutes billed at the 50% rate.
    pub horas_extras_50: u32,
    /// Overtime minutes billed at the 100% rate.
    pub horas_extras_100: u32,
    /// Distance carried through unchanged when distance accounting is
    /// enabled, otherwise zero.
    pub km_rodados: Decimal,
}

impl Breakdown {
    /// Returns the combined overtime minutes across both tiers.
    pub fn total_extras(&self) -> u32 {
        self.horas_extras_50 + self.horas_extras_100
    }

    /// Returns the regular (non-overtime) minutes of the shift.
    pub fn regular_minutes(&self) -> u32 {
        self.total_trabalhado - self.total_extras()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_breakdown() -> Breakdown {
        Breakdown {
            total_trabalhado: 600,
            horas_extras_50: 120,
            horas_extras_100: 0,
            km_rodados: Decimal::ZERO,
        }
    }

    #[test]
    fn test_total_extras_sums_both_tiers() {
        let breakdown = Breakdown {
            horas_extras_50: 60,
            horas_extras_100: 60,
            ..make_breakdown()
        };
        assert_eq!(breakdown.total_extras(), 120);
    }

    #[test]
    fn test_regular_minutes_is_remainder() {
        let breakdown = make_breakdown();
        assert_eq!(breakdown.regular_minutes(), 480);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = serde_json::to_string(&make_breakdown()).unwrap();
        assert!(json.contains("\"totalTrabalhado\":600"));
        assert!(json.contains("\"horasExtras50\":120"));
        assert!(json.contains("\"horasExtras100\":0"));
        assert!(json.contains("\"kmRodados\":\"0\""));
    }

    #[test]
    fn test_round_trip() {
        let breakdown = make_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: Breakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }
}
