/// Maps spreadsheet-library cell values onto the boundary representation.
pub mod cells;
/// Sheet selection and header/skip-row windowing.
pub mod sheet;
/// Opens workbooks and loads the selected sheet as a table.
pub mod workbook;
