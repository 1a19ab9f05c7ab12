pub mod export;
pub mod report;

pub use export::{write_csv, write_rows};
pub use report::{ColumnPopulation, PopulationReport};
