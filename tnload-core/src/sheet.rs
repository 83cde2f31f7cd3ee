//! Conversion of spreadsheet sheet exports into reference tables.
//!
//! The tables are maintained in a hosted spreadsheet. Its sheet export is a
//! JSON document of column definitions and rows of cells keyed by column id.

use crate::data::{LandUseEntry, TreatmentMethodEntry};
use serde::Deserialize;
use serde_json::Value;

pub const LAND_USE_NAME_COLUMN: &str = "Land Use";
pub const LAND_USE_LOAD_COLUMN: &str = "Base Load (TN)";
pub const TREATMENT_NAME_COLUMN: &str = "Treatment Method";
pub const TREATMENT_RATE_COLUMN: &str = "Default Removal Rate (TN)";

#[derive(Debug, Clone, Deserialize)]
pub struct SheetColumn {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetCell {
    #[serde(rename = "columnId")]
    pub column_id: u64,
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetRow {
    #[serde(default)]
    pub cells: Vec<SheetCell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetExport {
    #[serde(default)]
    pub columns: Vec<SheetColumn>,
    #[serde(default)]
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("sheet export could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sheet has no column titled '{0}'")]
    MissingColumn(&'static str),
}

impl SheetExport {
    /// Parse a sheet export document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not a sheet export.
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }

    fn column_id(&self, title: &'static str) -> Result<u64, SheetError> {
        self.columns
            .iter()
            .find(|column| column.title == title)
            .map(|column| column.id)
            .ok_or(SheetError::MissingColumn(title))
    }

    /// Name/number pairs from two titled columns, skipping incomplete rows.
    fn pairs(
        &self,
        name_title: &'static str,
        value_title: &'static str,
    ) -> Result<Vec<(String, f64)>, SheetError> {
        let name_col = self.column_id(name_title)?;
        let value_col = self.column_id(value_title)?;
        let pairs = self
            .rows
            .iter()
            .filter_map(|row| {
                let name = row.cell(name_col).and_then(cell_text)?;
                let value = row.cell(value_col).and_then(cell_number)?;
                Some((name, value))
            })
            .collect();
        Ok(pairs)
    }

    /// # Errors
    ///
    /// Returns an error when the land use or base load column is missing.
    pub fn land_uses(&self) -> Result<Vec<LandUseEntry>, SheetError> {
        Ok(self
            .pairs(LAND_USE_NAME_COLUMN, LAND_USE_LOAD_COLUMN)?
            .into_iter()
            .map(|(name, base_load)| LandUseEntry::new(name, base_load))
            .collect())
    }

    /// # Errors
    ///
    /// Returns an error when the treatment method or removal rate column is missing.
    pub fn treatment_methods(&self) -> Result<Vec<TreatmentMethodEntry>, SheetError> {
        Ok(self
            .pairs(TREATMENT_NAME_COLUMN, TREATMENT_RATE_COLUMN)?
            .into_iter()
            .map(|(name, removal_rate)| TreatmentMethodEntry::new(name, removal_rate))
            .collect())
    }
}

impl SheetRow {
    fn cell(&self, column_id: u64) -> Option<&Value> {
        self.cells
            .iter()
            .find(|cell| cell.column_id == column_id)
            .and_then(|cell| cell.value.as_ref())
    }
}

fn cell_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn cell_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAND_USE_SHEET: &str = r#"{
        "columns": [
            {"id": 11, "title": "Land Use"},
            {"id": 12, "title": "Notes"},
            {"id": 13, "title": "Base Load (TN)"}
        ],
        "rows": [
            {"cells": [{"columnId": 11, "value": "Residential"}, {"columnId": 13, "value": 7.5}]},
            {"cells": [{"columnId": 11, "value": "Commercial"}, {"columnId": 13, "value": "9.25"}]},
            {"cells": [{"columnId": 11, "value": "Pending"}, {"columnId": 12, "value": "tbd"}]},
            {"cells": [{"columnId": 11}, {"columnId": 13, "value": 3}]},
            {"cells": [{"columnId": 11, "value": "  "}, {"columnId": 13, "value": 3}]}
        ]
    }"#;

    #[test]
    fn maps_titled_columns_and_skips_incomplete_rows() {
        let sheet = SheetExport::from_json(LAND_USE_SHEET).unwrap();
        let land_uses = sheet.land_uses().unwrap();
        assert_eq!(
            land_uses,
            vec![
                LandUseEntry::new("Residential", 7.5),
                LandUseEntry::new("Commercial", 9.25),
            ]
        );
    }

    #[test]
    fn missing_columns_are_errors() {
        let sheet = SheetExport::from_json(LAND_USE_SHEET).unwrap();
        let err = sheet.treatment_methods().unwrap_err();
        assert!(matches!(err, SheetError::MissingColumn("Treatment Method")));
    }

    #[test]
    fn reads_treatment_methods() {
        let json = r#"{
            "columns": [
                {"id": 1, "title": "Treatment Method"},
                {"id": 2, "title": "Default Removal Rate (TN)"}
            ],
            "rows": [
                {"cells": [{"columnId": 1, "value": "Wet Pond"}, {"columnId": 2, "value": 0.3}]}
            ]
        }"#;
        let methods = SheetExport::from_json(json)
            .unwrap()
            .treatment_methods()
            .unwrap();
        assert_eq!(methods, vec![TreatmentMethodEntry::new("Wet Pond", 0.3)]);
    }

    #[test]
    fn rejects_non_sheet_documents() {
        assert!(matches!(
            SheetExport::from_json("[1, 2]"),
            Err(SheetError::Json(_))
        ));
    }
}
