use xlsx2sql::generator::statement::build_statements;
use xlsx2sql::normalizer::columns::{self, project_rows, select_columns};
use xlsx2sql::output::formatter::{auto_file_name, write_statements, OutputTarget};
use xlsx2sql::reader::sheet::ReadOptions;

mod support;

fn run_pipeline(table_name: &str, requested: &[String], options: &ReadOptions) -> Vec<String> {
    // Stage 1: Read the workbook
    let table = support::load_users_table_with(options);

    // Stage 2: Normalize cells and select columns
    let canonical = columns::normalize_table(&table);
    let selection = select_columns(&canonical, requested).expect("columns should resolve");
    let rows = project_rows(&canonical, &selection);

    // Stage 3: Generate INSERT statements
    build_statements(table_name, &selection.names, &rows).expect("rows should be well-formed")
}

/// Full pipeline end-to-end test for the users workbook.
/// This is the primary acceptance test.
#[test]
fn end_to_end_users_workbook() {
    let statements = run_pipeline("users", &[], &ReadOptions::default());

    assert_eq!(statements.len(), 4, "one statement per data row");
    let sql = statements.join("\n");
    insta::assert_snapshot!("users_end_to_end", sql);
}

/// Running the pipeline twice over the same workbook yields identical SQL.
#[test]
fn end_to_end_is_idempotent() {
    let first = run_pipeline("users", &[], &ReadOptions::default());
    let second = run_pipeline("users", &[], &ReadOptions::default());
    assert_eq!(first, second);
}

/// Sheet selection, ISO timestamps, and time-of-day discarding, end to end.
#[test]
fn end_to_end_audit_sheet() {
    let options = ReadOptions {
        sheet: Some("Audit".to_string()),
        ..ReadOptions::default()
    };
    let statements = run_pipeline("audit_events", &[], &options);

    assert_eq!(
        statements,
        vec!["INSERT INTO audit_events (event, ts) VALUES ('login', '2023-05-01');"]
    );
}

/// An explicit column request narrows the statements to those columns.
#[test]
fn end_to_end_explicit_columns() {
    let requested = vec!["name".to_string(), "salary".to_string()];
    let statements = run_pipeline("payroll", &requested, &ReadOptions::default());

    assert_eq!(
        statements[0],
        "INSERT INTO payroll (name, salary) VALUES ('John Smith', 50000.5);"
    );
    assert_eq!(
        statements[1],
        "INSERT INTO payroll (name, salary) VALUES ('Mary O''Connor', 62000.75);"
    );
}

/// The written file carries exactly the statements, newline-separated.
#[test]
fn end_to_end_written_file_round_trips() {
    let statements = run_pipeline("users", &[], &ReadOptions::default());

    // Stage 4: Write output
    let out_dir = support::unique_temp_dir("xlsx2sql_e2e");
    let path = out_dir.join(auto_file_name(&support::users_workbook_path(), "users"));
    write_statements(&OutputTarget::File(path.clone()), &statements)
        .expect("write should succeed");

    let written = std::fs::read_to_string(&path).expect("output file should exist");
    assert_eq!(written, statements.join("\n"));
}
