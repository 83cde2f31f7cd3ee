//! NPS and PS TN load reduction estimators.

use crate::constants::{
    LOAD_UNIT_LABEL, NPS_RESULT_LABEL, PERCENT_MAX, PS_CONCENTRATION_DIVISOR,
    PS_DAYS_PER_YEAR, PS_DISCHARGE_VOLUME_FACTOR, PS_MASS_FACTOR, PS_POUNDS_PER_TON,
    PS_RESULT_LABEL, RESULT_DECIMALS,
};
use crate::data::ReferenceTables;
use crate::numbers::format_fixed;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpsInput {
    pub land_use: String,
    pub treatment_method: String,
    pub treatment_area_acres: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsInput {
    pub avg_discharge: f64,
    pub tn_concentration: f64,
    pub attenuation_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    Nps,
    Ps,
}

impl CalculationKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nps => NPS_RESULT_LABEL,
            Self::Ps => PS_RESULT_LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadUnit {
    #[default]
    #[serde(rename = "lbs/year")]
    LbsPerYear,
}

impl fmt::Display for LoadUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LbsPerYear => f.write_str(LOAD_UNIT_LABEL),
        }
    }
}

/// A name that had no exact match in the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupMiss {
    LandUse(String),
    TreatmentMethod(String),
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LandUse(name) => write!(f, "unknown land use '{name}'"),
            Self::TreatmentMethod(name) => write!(f, "unknown treatment method '{name}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub kind: CalculationKind,
    pub value: f64,
    #[serde(default)]
    pub unit: LoadUnit,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub misses: Vec<LookupMiss>,
}

impl CalculationResult {
    #[must_use]
    pub const fn new(kind: CalculationKind, value: f64) -> Self {
        Self {
            kind,
            value,
            unit: LoadUnit::LbsPerYear,
            misses: Vec::new(),
        }
    }

    /// The rounded value as rendered in the result card and copied to the clipboard.
    #[must_use]
    pub fn display_value(&self) -> String {
        format_fixed(self.value, RESULT_DECIMALS)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }

    #[must_use]
    pub fn has_lookup_misses(&self) -> bool {
        !self.misses.is_empty()
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_value(), self.unit)
    }
}

/// `base_load × area × removal_rate`, with unmatched names contributing zero.
#[must_use]
pub fn nps_reduction(tables: &ReferenceTables, input: &NpsInput) -> CalculationResult {
    let mut misses = Vec::new();
    let base_load = tables.base_load(&input.land_use).unwrap_or_else(|| {
        misses.push(LookupMiss::LandUse(input.land_use.clone()));
        0.0
    });
    let removal_rate = tables
        .removal_rate(&input.treatment_method)
        .unwrap_or_else(|| {
            misses.push(LookupMiss::TreatmentMethod(input.treatment_method.clone()));
            0.0
        });
    for miss in &misses {
        log::warn!("NPS lookup miss treated as zero: {miss}");
    }

    let mut result = CalculationResult::new(
        CalculationKind::Nps,
        base_load * input.treatment_area_acres * removal_rate,
    );
    result.misses = misses;
    result
}

/// Point-source unit conversion from average discharge and TN concentration.
#[must_use]
pub fn ps_reduction(input: &PsInput) -> CalculationResult {
    let value = input.avg_discharge
        * PS_DISCHARGE_VOLUME_FACTOR
        * PS_DAYS_PER_YEAR
        * (input.tn_concentration / PS_CONCENTRATION_DIVISOR)
        * PS_MASS_FACTOR
        * (input.attenuation_percent / PERCENT_MAX)
        * PS_POUNDS_PER_TON;
    CalculationResult::new(CalculationKind::Ps, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LandUseEntry, TreatmentMethodEntry};

    fn tables() -> ReferenceTables {
        ReferenceTables::new(
            vec![LandUseEntry::new("Residential", 2.5)],
            vec![TreatmentMethodEntry::new("Bioswale", 0.4)],
        )
    }

    fn nps(land_use: &str, treatment: &str, area: f64) -> NpsInput {
        NpsInput {
            land_use: land_use.to_string(),
            treatment_method: treatment.to_string(),
            treatment_area_acres: area,
        }
    }

    #[test]
    fn nps_multiplies_base_load_area_and_rate() {
        let result = nps_reduction(&tables(), &nps("Residential", "Bioswale", 10.0));
        assert!((result.value - 10.0).abs() < 1e-9);
        assert_eq!(result.kind, CalculationKind::Nps);
        assert!(!result.has_lookup_misses());
        assert_eq!(result.to_string(), "10.00 lbs/year");
    }

    #[test]
    fn nps_unknown_names_yield_zero_and_record_misses() {
        let result = nps_reduction(&tables(), &nps("Orchard", "Bioswale", 10.0));
        assert!(result.value.abs() < f64::EPSILON);
        assert_eq!(result.misses, vec![LookupMiss::LandUse("Orchard".into())]);

        let result = nps_reduction(&tables(), &nps("Residential", "Green Roof", 10.0));
        assert!(result.value.abs() < f64::EPSILON);
        assert_eq!(
            result.misses,
            vec![LookupMiss::TreatmentMethod("Green Roof".into())]
        );

        let result = nps_reduction(&ReferenceTables::empty(), &nps("A", "B", 1.0));
        assert_eq!(result.misses.len(), 2);
    }

    #[test]
    fn ps_applies_conversion_chain() {
        let result = ps_reduction(&PsInput {
            avg_discharge: 5.0,
            tn_concentration: 10.0,
            attenuation_percent: 50.0,
        });
        let expected = 5.0 * 3785.0 * 365.0 * 0.01 * 0.0011 * 0.5 * 2000.0;
        assert!((result.value - expected).abs() < 1e-6);
        assert!((result.value - 75_983.875).abs() < 1e-6);
        assert_eq!(result.label(), "PS TN Load Reduction");
    }

    #[test]
    fn ps_zero_attenuation_yields_zero() {
        let result = ps_reduction(&PsInput {
            avg_discharge: 12.0,
            tn_concentration: 8.0,
            attenuation_percent: 0.0,
        });
        assert!(result.value.abs() < f64::EPSILON);
        assert_eq!(result.display_value(), "0.00");
    }

    #[test]
    fn results_serialize_with_unit_label() {
        let result = CalculationResult::new(CalculationKind::Ps, 1.5);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"lbs/year\""));
        assert!(json.contains("\"ps\""));
        assert!(!json.contains("misses"));
    }
}
