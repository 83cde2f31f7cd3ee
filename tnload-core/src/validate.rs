//! Declarative calculator form layouts and the validator that checks them.
//!
//! Validation is collect-all: every field is checked and each failing field
//! reports exactly one violation, so the page can mark all invalid controls
//! in a single pass before triggering the native validation prompt.

use crate::calc::{NpsInput, PsInput};
use crate::constants::{MSG_NON_NEGATIVE, MSG_PERCENT_RANGE, MSG_REQUIRED, PERCENT_MAX, PERCENT_MIN};
use crate::numbers::parse_number;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub mod field {
    pub const NPS_LAND_USE: &str = "npsLandUse";
    pub const NPS_TREATMENT_METHOD: &str = "npsTreatmentMethod";
    pub const NPS_TREATMENT_AREA: &str = "npsTreatmentArea";
    pub const PS_AVG_DISCHARGE: &str = "psAvgDischarge";
    pub const PS_TN_CONCENTRATION: &str = "psTNConcentration";
    pub const PS_ATTENUATION: &str = "psAttenuationFactor";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    /// A selection list or free text; only the required check applies.
    Choice,
    /// Must parse as a number `>= 0`.
    NonNegative,
    /// Must parse as a number in `[0, 100]` unless its container is hidden.
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn required(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            required: true,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormSpec {
    pub id: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSpec {
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.id == id)
    }
}

pub const NPS_FORM: FormSpec = FormSpec {
    id: "nps-calculator-form",
    fields: &[
        FieldSpec::required(field::NPS_LAND_USE, "Land Use", FieldKind::Choice),
        FieldSpec::required(
            field::NPS_TREATMENT_METHOD,
            "Treatment Method",
            FieldKind::Choice,
        ),
        FieldSpec::required(
            field::NPS_TREATMENT_AREA,
            "Treatment Area (acres)",
            FieldKind::NonNegative,
        ),
    ],
};

pub const PS_FORM: FormSpec = FormSpec {
    id: "ps-calculator-form",
    fields: &[
        FieldSpec::required(
            field::PS_AVG_DISCHARGE,
            "Average Discharge",
            FieldKind::NonNegative,
        ),
        FieldSpec::required(
            field::PS_TN_CONCENTRATION,
            "TN Concentration (mg/L)",
            FieldKind::NonNegative,
        ),
        FieldSpec::required(
            field::PS_ATTENUATION,
            "Attenuation Factor (%)",
            FieldKind::Percentage,
        ),
    ],
};

/// Raw control values of one form, keyed by field id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    values: BTreeMap<String, String>,
    hidden: BTreeSet<String>,
}

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: &str, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: &str, value: impl Into<String>) {
        self.values.insert(id.to_string(), value.into());
    }

    /// Mark a field as sitting in a hidden container.
    pub fn hide(&mut self, id: &str) {
        self.hidden.insert(id.to_string());
    }

    #[must_use]
    pub fn get(&self, id: &str) -> &str {
        self.values.get(id).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Violation {
    Required,
    PercentRange,
    NonNegative,
}

impl Violation {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => MSG_REQUIRED,
            Self::PercentRange => MSG_PERCENT_RANGE,
            Self::NonNegative => MSG_NON_NEGATIVE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub violation: Violation,
}

impl FieldError {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.violation.message()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub form: &'static str,
    errors: SmallVec<[FieldError; 4]>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn error_for(&self, id: &str) -> Option<&FieldError> {
        self.errors.iter().find(|err| err.field == id)
    }

    #[must_use]
    pub fn message_for(&self, id: &str) -> Option<&'static str> {
        self.error_for(id).map(FieldError::message)
    }

    /// Drop the violation for `id`, as happens when the user edits that field.
    /// Returns whether anything was removed.
    pub fn clear_field(&mut self, id: &str) -> bool {
        let before = self.errors.len();
        self.errors.retain(|err| err.field != id);
        self.errors.len() != before
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "{}: valid", self.form);
        }
        write!(f, "{}:", self.form)?;
        for err in &self.errors {
            write!(f, " {} ({})", err.field, err.message())?;
        }
        Ok(())
    }
}

fn check_field(spec: &FieldSpec, values: &FormValues) -> Option<Violation> {
    let raw = values.get(spec.id);
    if raw.trim().is_empty() {
        return spec.required.then_some(Violation::Required);
    }
    match spec.kind {
        FieldKind::Choice => None,
        FieldKind::NonNegative => match parse_number(raw) {
            Some(value) if value >= 0.0 => None,
            _ => Some(Violation::NonNegative),
        },
        FieldKind::Percentage => {
            if values.is_hidden(spec.id) {
                return None;
            }
            match parse_number(raw) {
                Some(value) if (PERCENT_MIN..=PERCENT_MAX).contains(&value) => None,
                _ => Some(Violation::PercentRange),
            }
        }
    }
}

/// Check every field of `spec` and collect all violations.
#[must_use]
pub fn validate_form(spec: &FormSpec, values: &FormValues) -> ValidationReport {
    let errors = spec
        .fields
        .iter()
        .filter_map(|field| {
            check_field(field, values).map(|violation| FieldError {
                field: field.id,
                violation,
            })
        })
        .collect();
    let report = ValidationReport {
        form: spec.id,
        errors,
    };
    log::debug!("form validation result: {report}");
    report
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("field '{0}' is empty")]
    Missing(&'static str),
    #[error("field '{field}' is not a number: '{value}'")]
    NotANumber { field: &'static str, value: String },
}

fn text_field(values: &FormValues, id: &'static str) -> Result<String, InputError> {
    let raw = values.get(id);
    if raw.trim().is_empty() {
        return Err(InputError::Missing(id));
    }
    Ok(raw.to_string())
}

fn number_field(values: &FormValues, id: &'static str) -> Result<f64, InputError> {
    let raw = values.get(id);
    if raw.trim().is_empty() {
        return Err(InputError::Missing(id));
    }
    parse_number(raw).ok_or_else(|| InputError::NotANumber {
        field: id,
        value: raw.to_string(),
    })
}

impl NpsInput {
    /// Bind raw NPS form values to a typed input.
    ///
    /// # Errors
    ///
    /// Returns an error when a field is empty or a numeric field does not parse.
    pub fn from_values(values: &FormValues) -> Result<Self, InputError> {
        Ok(Self {
            land_use: text_field(values, field::NPS_LAND_USE)?,
            treatment_method: text_field(values, field::NPS_TREATMENT_METHOD)?,
            treatment_area_acres: number_field(values, field::NPS_TREATMENT_AREA)?,
        })
    }
}

impl PsInput {
    /// Bind raw PS form values to a typed input.
    ///
    /// # Errors
    ///
    /// Returns an error when a field is empty or does not parse as a number.
    pub fn from_values(values: &FormValues) -> Result<Self, InputError> {
        Ok(Self {
            avg_discharge: number_field(values, field::PS_AVG_DISCHARGE)?,
            tn_concentration: number_field(values, field::PS_TN_CONCENTRATION)?,
            attenuation_percent: number_field(values, field::PS_ATTENUATION)?,
        })
    }
}
