//! TN Load Reduction Engine
//!
//! Platform-agnostic calculator logic for the TN load reduction site.
//! This crate holds the reference tables, form validation and the NPS/PS
//! estimators without UI or platform-specific dependencies.

pub mod audit;
pub mod calc;
pub mod constants;
pub mod data;
pub mod numbers;
pub mod sheet;
pub mod validate;

// Re-export commonly used types
pub use audit::{AuditFinding, Table, audit_tables};
pub use calc::{
    CalculationKind, CalculationResult, LoadUnit, LookupMiss, NpsInput, PsInput, nps_reduction,
    ps_reduction,
};
pub use data::{LandUseEntry, ReferenceTables, TableError, TreatmentMethodEntry};
pub use sheet::{SheetError, SheetExport};
pub use validate::{
    FieldError, FieldKind, FieldSpec, FormSpec, FormValues, InputError, NPS_FORM, PS_FORM,
    ValidationReport, Violation, validate_form,
};

/// Trait for abstracting reference table loading.
/// Platform-specific implementations should provide this.
pub trait ReferenceSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the land-use base load table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or parsed.
    fn load_land_uses(&self) -> Result<Vec<LandUseEntry>, Self::Error>;

    /// Load the treatment-method removal rate table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or parsed.
    fn load_treatment_methods(&self) -> Result<Vec<TreatmentMethodEntry>, Self::Error>;
}

/// Reference source backed by two in-memory JSON documents.
#[derive(Debug, Clone, Copy)]
pub struct JsonSource<'a> {
    pub land_use_json: &'a str,
    pub treatment_json: &'a str,
}

impl ReferenceSource for JsonSource<'_> {
    type Error = serde_json::Error;

    fn load_land_uses(&self) -> Result<Vec<LandUseEntry>, Self::Error> {
        serde_json::from_str(self.land_use_json)
    }

    fn load_treatment_methods(&self) -> Result<Vec<TreatmentMethodEntry>, Self::Error> {
        serde_json::from_str(self.treatment_json)
    }
}

/// Why a form submission produced no result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form is invalid: {0}")]
    Invalid(ValidationReport),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{} is too large to calculate", .0.label())]
    OutOfRange(CalculationKind),
}

impl SubmitError {
    #[must_use]
    pub const fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Invalid(report) => Some(report),
            Self::Input(_) | Self::OutOfRange(_) => None,
        }
    }
}

/// The calculator: read-only reference tables plus the two estimators.
#[derive(Debug, Clone, Default)]
pub struct LoadReductionCalculator {
    tables: ReferenceTables,
}

impl LoadReductionCalculator {
    #[must_use]
    pub const fn new(tables: ReferenceTables) -> Self {
        Self { tables }
    }

    /// Load both tables from a source.
    ///
    /// # Errors
    ///
    /// Returns the source error if either table fails to load.
    pub fn from_source<S: ReferenceSource>(source: &S) -> Result<Self, S::Error> {
        let land_uses = source.load_land_uses()?;
        let treatment_methods = source.load_treatment_methods()?;
        Ok(Self::new(ReferenceTables::new(land_uses, treatment_methods)))
    }

    #[must_use]
    pub const fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    #[must_use]
    pub fn calculate_nps(&self, input: &NpsInput) -> CalculationResult {
        nps_reduction(&self.tables, input)
    }

    #[must_use]
    pub fn calculate_ps(&self, input: &PsInput) -> CalculationResult {
        ps_reduction(input)
    }

    /// Validate the NPS form and, only when it is valid, compute the reduction.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] with every violation when validation fails.
    pub fn submit_nps(&self, values: &FormValues) -> Result<CalculationResult, SubmitError> {
        let report = validate_form(&NPS_FORM, values);
        if !report.is_valid() {
            return Err(SubmitError::Invalid(report));
        }
        let input = NpsInput::from_values(values)?;
        finite(self.calculate_nps(&input))
    }

    /// Validate the PS form and, only when it is valid, compute the reduction.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] with every violation when validation fails.
    pub fn submit_ps(&self, values: &FormValues) -> Result<CalculationResult, SubmitError> {
        let report = validate_form(&PS_FORM, values);
        if !report.is_valid() {
            return Err(SubmitError::Invalid(report));
        }
        let input = PsInput::from_values(values)?;
        finite(self.calculate_ps(&input))
    }
}

/// Accepted inputs can still overflow the formula; such a result is never shown.
fn finite(result: CalculationResult) -> Result<CalculationResult, SubmitError> {
    if result.value.is_finite() {
        Ok(result)
    } else {
        log::warn!("{:?} result overflowed: {}", result.kind, result.value);
        Err(SubmitError::OutOfRange(result.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::field;

    const LAND: &str = r#"[{"name": "Residential", "base_load": 2.5}]"#;
    const TREATMENT: &str = r#"[{"name": "Bioswale", "removal_rate": 0.4}]"#;

    fn calculator() -> LoadReductionCalculator {
        LoadReductionCalculator::from_source(&JsonSource {
            land_use_json: LAND,
            treatment_json: TREATMENT,
        })
        .unwrap()
    }

    #[test]
    fn loads_tables_from_source() {
        let calc = calculator();
        assert_eq!(calc.tables().land_uses.len(), 1);
        assert_eq!(calc.tables().treatment_methods.len(), 1);
    }

    #[test]
    fn source_errors_propagate() {
        let result = LoadReductionCalculator::from_source(&JsonSource {
            land_use_json: LAND,
            treatment_json: "oops",
        });
        assert!(result.is_err());
    }

    #[test]
    fn submit_nps_computes_when_valid() {
        let values = FormValues::new()
            .with(field::NPS_LAND_USE, "Residential")
            .with(field::NPS_TREATMENT_METHOD, "Bioswale")
            .with(field::NPS_TREATMENT_AREA, "10");
        let result = calculator().submit_nps(&values).unwrap();
        assert!((result.value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn submit_rejects_empty_required_fields_before_computing() {
        let values = FormValues::new()
            .with(field::PS_AVG_DISCHARGE, "5")
            .with(field::PS_ATTENUATION, "50");
        let err = calculator().submit_ps(&values).unwrap_err();
        let report = err.report().unwrap();
        assert_eq!(report.errors().len(), 1);
        assert_eq!(
            report.message_for(field::PS_TN_CONCENTRATION),
            Some("This field is required")
        );
    }

    #[test]
    fn submit_rejects_results_that_overflow() {
        let values = FormValues::new()
            .with(field::PS_AVG_DISCHARGE, "1e306")
            .with(field::PS_TN_CONCENTRATION, "10")
            .with(field::PS_ATTENUATION, "50");
        let err = calculator().submit_ps(&values).unwrap_err();
        assert_eq!(err, SubmitError::OutOfRange(CalculationKind::Ps));
        assert!(err.report().is_none());
        assert!(err.to_string().contains("too large"));

        let huge_area = FormValues::new()
            .with(field::NPS_LAND_USE, "Residential")
            .with(field::NPS_TREATMENT_METHOD, "Bioswale")
            .with(field::NPS_TREATMENT_AREA, "1.7e308");
        assert_eq!(
            calculator().submit_nps(&huge_area).unwrap_err(),
            SubmitError::OutOfRange(CalculationKind::Nps)
        );
    }
}
