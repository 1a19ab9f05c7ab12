use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::extractor::{CanonicalRow, Column, NOT_AVAILABLE};

/// How well each column is populated across a set of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationReport {
    pub rows: usize,
    pub unique_brands: usize,
    pub columns: Vec<ColumnPopulation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPopulation {
    pub column: Column,
    pub populated: usize,
    /// Percentage of rows whose value is not the sentinel.
    pub percent: f64,
}

impl ColumnPopulation {
    pub fn status(&self) -> &'static str {
        if self.percent >= 100.0 {
            "OK"
        } else if self.percent >= 80.0 {
            "!"
        } else {
            "!!!"
        }
    }
}

impl PopulationReport {
    pub fn from_rows(rows: &[CanonicalRow]) -> Self {
        let unique_brands = rows
            .iter()
            .map(|row| row.brand_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        let columns = Column::ALL
            .into_iter()
            .map(|column| {
                let populated = rows
                    .iter()
                    .filter(|row| row.get(column) != NOT_AVAILABLE)
                    .count();
                let percent = if rows.is_empty() {
                    0.0
                } else {
                    populated as f64 / rows.len() as f64 * 100.0
                };
                ColumnPopulation {
                    column,
                    populated,
                    percent,
                }
            })
            .collect();

        Self {
            rows: rows.len(),
            unique_brands,
            columns,
        }
    }
}

impl Display for PopulationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Products: {}", self.rows)?;
        writeln!(f, "Unique brands: {}", self.unique_brands)?;
        writeln!(f)?;
        writeln!(f, "Field completeness:")?;
        for col in &self.columns {
            writeln!(f, "{} {}: {:.1}%", col.status(), col.column, col.percent)?;
        }
        Ok(())
    }
}
