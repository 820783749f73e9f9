#![allow(dead_code)]

use std::path::PathBuf;

use xlsx2sql::generator::statement;
use xlsx2sql::normalizer::columns::{self, CanonicalTable};
use xlsx2sql::reader::sheet::{ReadOptions, SheetTable};
use xlsx2sql::reader::workbook;

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn users_workbook_path() -> PathBuf {
    fixture_dir("users").join("users.xlsx")
}

pub(crate) fn load_users_table() -> SheetTable {
    workbook::load_table(&users_workbook_path(), &ReadOptions::default())
        .expect("fixture workbook should be readable")
}

pub(crate) fn load_users_table_with(options: &ReadOptions) -> SheetTable {
    workbook::load_table(&users_workbook_path(), options)
        .expect("fixture workbook should be readable")
}

pub(crate) fn load_users_canonical() -> CanonicalTable {
    columns::normalize_table(&load_users_table())
}

pub(crate) fn users_statements() -> Vec<String> {
    let table = load_users_canonical();
    let selection = columns::select_columns(&table, &[]).expect("auto-detection never fails");
    let rows = columns::project_rows(&table, &selection);
    statement::build_statements("users", &selection.names, &rows)
        .expect("fixture rows are well-formed")
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}
