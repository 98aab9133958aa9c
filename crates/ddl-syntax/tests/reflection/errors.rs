use ddl_syntax::{DdlError, parse};
use tracing_test::traced_test;

fn malformed(ddl: &str) -> DdlError {
    match parse(ddl, "utf8") {
        Err(err @ DdlError::MalformedDdl { .. }) => err,
        Ok(table) => panic!("expected MalformedDdl for {ddl:?}, got {table:?}"),
    }
}

#[test]
fn test_missing_paren_after_table_name() {
    let ddl = "CREATE TABLE `t` `id` int";
    let err = malformed(ddl);

    assert_eq!(err.offset(), 17);
    let DdlError::MalformedDdl { found, line, column, .. } = &err;
    assert_eq!(found, "`id`");
    assert_eq!((*line, *column), (1, 18));
}

#[test]
fn test_unbalanced_parentheses() {
    let ddl = "CREATE TABLE t (\n  a decimal(10, 2 NOT NULL,\n  b int\n";
    let err = malformed(ddl);
    assert_eq!(err.offset(), ddl.len());
}

#[test]
fn test_unterminated_backtick() {
    let ddl = "CREATE TABLE t (`id int NOT NULL)";
    let err = malformed(ddl);

    assert_eq!(err.offset(), 16);
    assert!(err.to_string().contains("unterminated quoted identifier"));
}

#[test]
fn test_format_error_points_at_offender() {
    let ddl = "CREATE TABLE t (\n  a int,\n  , b int\n)";
    let err = malformed(ddl);

    let rendered = err.format_error(ddl);
    assert!(rendered.contains("line 3, column 3"));
    assert!(rendered.contains("  , b int\n  ^"));
}

#[test]
#[traced_test]
fn test_parse_logs_progress() {
    parse("CREATE TABLE t (a int)", "utf8").unwrap();
    assert!(logs_contain("Parsed table DDL"));
}
