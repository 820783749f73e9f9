/// Canonical value union and the single cell-normalization pass.
pub mod canonical;
/// Whole-grid normalization, column selection, and row projection.
pub mod columns;
/// The boundary representation of a spreadsheet cell.
pub mod raw_cell;
