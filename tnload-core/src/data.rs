use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// A land-use category and its per-acre TN base load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandUseEntry {
    pub name: String,
    pub base_load: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LandUseEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, base_load: f64) -> Self {
        Self {
            name: name.into(),
            base_load,
            id: None,
            description: None,
        }
    }
}

/// A treatment method and its fractional TN removal rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentMethodEntry {
    pub name: String,
    pub removal_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TreatmentMethodEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, removal_rate: f64) -> Self {
        Self {
            name: name.into(),
            removal_rate,
            id: None,
            description: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("land use table could not be parsed: {0}")]
    LandUse(#[source] serde_json::Error),
    #[error("treatment method table could not be parsed: {0}")]
    TreatmentMethod(#[source] serde_json::Error),
}

/// The two read-only lookup tables behind the NPS calculator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub land_uses: Vec<LandUseEntry>,
    pub treatment_methods: Vec<TreatmentMethodEntry>,
}

impl ReferenceTables {
    #[must_use]
    pub fn new(land_uses: Vec<LandUseEntry>, treatment_methods: Vec<TreatmentMethodEntry>) -> Self {
        Self {
            land_uses,
            treatment_methods,
        }
    }

    /// Empty tables, as shown before (or instead of) a successful load.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse both tables from their JSON array documents.
    ///
    /// # Errors
    ///
    /// Returns an error naming the table that failed to parse.
    pub fn from_json(land_use_json: &str, treatment_json: &str) -> Result<Self, TableError> {
        let land_uses = serde_json::from_str(land_use_json).map_err(TableError::LandUse)?;
        let treatment_methods =
            serde_json::from_str(treatment_json).map_err(TableError::TreatmentMethod)?;
        Ok(Self::new(land_uses, treatment_methods))
    }

    #[must_use]
    pub fn into_shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.land_uses.is_empty() && self.treatment_methods.is_empty()
    }

    /// Base load for an exact land-use name match.
    #[must_use]
    pub fn base_load(&self, land_use: &str) -> Option<f64> {
        self.land_uses
            .iter()
            .find(|entry| entry.name == land_use)
            .map(|entry| entry.base_load)
    }

    /// Removal rate for an exact treatment-method name match.
    #[must_use]
    pub fn removal_rate(&self, treatment_method: &str) -> Option<f64> {
        self.treatment_methods
            .iter()
            .find(|entry| entry.name == treatment_method)
            .map(|entry| entry.removal_rate)
    }

    pub fn land_use_names(&self) -> impl Iterator<Item = &str> {
        self.land_uses.iter().map(|entry| entry.name.as_str())
    }

    pub fn treatment_method_names(&self) -> impl Iterator<Item = &str> {
        self.treatment_methods.iter().map(|entry| entry.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tables_with_optional_extraction_fields() {
        let land = r#"[
            {"name": "Residential", "base_load": 7.5},
            {"id": 4, "name": "Agriculture", "base_load": 12.0, "description": "Row crops"}
        ]"#;
        let treatment = r#"[{"name": "Bioretention", "removal_rate": 0.45}]"#;

        let tables = ReferenceTables::from_json(land, treatment).unwrap();
        assert_eq!(tables.land_uses.len(), 2);
        assert_eq!(tables.land_uses[1].id, Some(4));
        assert_eq!(tables.base_load("Agriculture"), Some(12.0));
        assert_eq!(tables.removal_rate("Bioretention"), Some(0.45));
    }

    #[test]
    fn lookups_require_exact_names() {
        let tables = ReferenceTables::new(
            vec![LandUseEntry::new("Residential", 7.5)],
            vec![TreatmentMethodEntry::new("Wet Pond", 0.3)],
        );
        assert_eq!(tables.base_load("residential"), None);
        assert_eq!(tables.base_load("Residential "), None);
        assert_eq!(tables.removal_rate("Wet pond"), None);
    }

    #[test]
    fn reports_which_table_failed() {
        let err = ReferenceTables::from_json("[]", "{not json").unwrap_err();
        assert!(matches!(err, TableError::TreatmentMethod(_)));
        let err = ReferenceTables::from_json("nope", "[]").unwrap_err();
        assert!(err.to_string().contains("land use"));
    }
}
