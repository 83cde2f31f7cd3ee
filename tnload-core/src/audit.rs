//! Sanity checks for the reference tables before they are published.

use crate::data::ReferenceTables;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    LandUse,
    TreatmentMethod,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LandUse => "land use",
            Self::TreatmentMethod => "treatment method",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditFinding {
    EmptyTable { table: Table },
    BlankName { table: Table, index: usize },
    DuplicateName { table: Table, name: String },
    InvalidBaseLoad { name: String, value: f64 },
    InvalidRemovalRate { name: String, value: f64 },
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTable { table } => write!(f, "{table} table has no entries"),
            Self::BlankName { table, index } => {
                write!(f, "{table} entry #{index} has a blank name")
            }
            Self::DuplicateName { table, name } => write!(
                f,
                "{table} name '{name}' appears more than once; lookups use the first match"
            ),
            Self::InvalidBaseLoad { name, value } => {
                write!(f, "land use '{name}' has invalid base load {value}")
            }
            Self::InvalidRemovalRate { name, value } => write!(
                f,
                "treatment method '{name}' has removal rate {value} outside [0, 1]"
            ),
        }
    }
}

fn name_findings<'a>(
    table: Table,
    names: impl Iterator<Item = &'a str>,
    findings: &mut Vec<AuditFinding>,
) {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut count = 0_usize;
    for (index, name) in names.enumerate() {
        count += 1;
        if name.trim().is_empty() {
            findings.push(AuditFinding::BlankName { table, index });
            continue;
        }
        if !seen.insert(name) && reported.insert(name) {
            findings.push(AuditFinding::DuplicateName {
                table,
                name: name.to_string(),
            });
        }
    }
    if count == 0 {
        findings.push(AuditFinding::EmptyTable { table });
    }
}

/// Report every problem that would make the calculator misbehave silently.
#[must_use]
pub fn audit_tables(tables: &ReferenceTables) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    name_findings(Table::LandUse, tables.land_use_names(), &mut findings);
    for entry in &tables.land_uses {
        if !entry.base_load.is_finite() || entry.base_load < 0.0 {
            findings.push(AuditFinding::InvalidBaseLoad {
                name: entry.name.clone(),
                value: entry.base_load,
            });
        }
    }

    name_findings(
        Table::TreatmentMethod,
        tables.treatment_method_names(),
        &mut findings,
    );
    for entry in &tables.treatment_methods {
        if !(0.0..=1.0).contains(&entry.removal_rate) {
            findings.push(AuditFinding::InvalidRemovalRate {
                name: entry.name.clone(),
                value: entry.removal_rate,
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LandUseEntry, TreatmentMethodEntry};

    #[test]
    fn clean_tables_have_no_findings() {
        let tables = ReferenceTables::new(
            vec![LandUseEntry::new("Residential", 7.5)],
            vec![
                TreatmentMethodEntry::new("None", 0.0),
                TreatmentMethodEntry::new("Full", 1.0),
            ],
        );
        assert!(audit_tables(&tables).is_empty());
    }

    #[test]
    fn flags_empty_tables() {
        let findings = audit_tables(&ReferenceTables::empty());
        assert_eq!(
            findings,
            vec![
                AuditFinding::EmptyTable {
                    table: Table::LandUse
                },
                AuditFinding::EmptyTable {
                    table: Table::TreatmentMethod
                },
            ]
        );
    }

    #[test]
    fn flags_duplicates_once_and_bad_values() {
        let tables = ReferenceTables::new(
            vec![
                LandUseEntry::new("Forest", 1.0),
                LandUseEntry::new("Forest", 2.0),
                LandUseEntry::new("Forest", 3.0),
                LandUseEntry::new(" ", 1.0),
                LandUseEntry::new("Urban", f64::NAN),
            ],
            vec![
                TreatmentMethodEntry::new("Pond", 1.2),
                TreatmentMethodEntry::new("Swale", -0.1),
            ],
        );
        let findings = audit_tables(&tables);
        let duplicates = findings
            .iter()
            .filter(|f| matches!(f, AuditFinding::DuplicateName { .. }))
            .count();
        assert_eq!(duplicates, 1);
        assert!(findings.contains(&AuditFinding::BlankName {
            table: Table::LandUse,
            index: 3
        }));
        assert!(
            findings
                .iter()
                .any(|f| matches!(f, AuditFinding::InvalidBaseLoad { name, .. } if name == "Urban"))
        );
        let bad_rates = findings
            .iter()
            .filter(|f| matches!(f, AuditFinding::InvalidRemovalRate { .. }))
            .count();
        assert_eq!(bad_rates, 2);
    }

    #[test]
    fn findings_render_readable_messages() {
        let finding = AuditFinding::InvalidRemovalRate {
            name: "Pond".into(),
            value: 1.2,
        };
        assert_eq!(
            finding.to_string(),
            "treatment method 'Pond' has removal rate 1.2 outside [0, 1]"
        );
    }
}
