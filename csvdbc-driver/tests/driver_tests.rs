use std::io::Write;
use tempfile::NamedTempFile;

use arrow::array::StringArray;
use arrow::record_batch::RecordBatch;
use csvdbc_csv::CsvReadOptions;
use csvdbc_driver::{Connection, Driver, Status, OPTION_URI};
use csvdbc_result::Error;

fn write_sample_csv() -> NamedTempFile {
    let mut tmp = NamedTempFile::new().expect("create tmp");
    writeln!(tmp, "name,age").unwrap();
    writeln!(tmp, "Alice,30").unwrap();
    writeln!(tmp, "Bob,25").unwrap();
    tmp
}

fn column(batch: &RecordBatch, idx: usize) -> Vec<String> {
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .expect("utf8 column")
        .iter()
        .map(|v| v.expect("non-null value").to_string())
        .collect()
}

#[test]
fn full_lifecycle_reads_the_file() {
    let tmp = write_sample_csv();

    let driver = Driver::new();
    let mut database = driver.new_database().expect("database");
    database
        .set_option(OPTION_URI, tmp.path().to_str().expect("utf8 path"))
        .expect("set uri");
    database.init().expect("init");

    let connection = Connection::new(&database);
    let mut statement = connection.new_statement();
    statement.set_sql_query("").expect("empty query");

    let (mut stream, rows_affected) = statement.execute_query().expect("execute");
    assert_eq!(rows_affected, None);

    let schema = stream.schema().expect("schema");
    assert_eq!(schema.field(0).name(), "name");
    assert_eq!(schema.field(1).name(), "age");

    let batch = stream.next_batch().expect("pull").expect("batch");
    assert_eq!(batch.num_rows(), 2);
    assert_eq!(column(&batch, 0), vec!["Alice", "Bob"]);
    assert_eq!(column(&batch, 1), vec!["30", "25"]);

    assert!(stream.next_batch().expect("end").is_none());

    stream.release();
    stream.release();
}

#[test]
fn statement_read_options_reach_the_stream() {
    let tmp = write_sample_csv();

    let driver = Driver::new();
    let mut database = driver.new_database().expect("database");
    database
        .set_option(OPTION_URI, tmp.path().to_str().expect("utf8 path"))
        .expect("set uri");

    let mut statement = Connection::new(&database).new_statement();
    statement.set_read_options(CsvReadOptions {
        batch_size: 1,
        ..Default::default()
    });

    let (stream, _) = statement.execute_query().expect("execute");
    let batches = stream
        .collect::<csvdbc_result::Result<Vec<RecordBatch>>>()
        .expect("collect");
    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|b| b.num_rows() == 1));
}

#[test]
fn malformed_rows_fail_through_the_driver_surface() {
    let mut tmp = NamedTempFile::new().expect("create tmp");
    writeln!(tmp, "a,b,c").unwrap();
    writeln!(tmp, "1,2").unwrap();

    let driver = Driver::new();
    let mut database = driver.new_database().expect("database");
    database
        .set_option(OPTION_URI, tmp.path().to_str().expect("utf8 path"))
        .expect("set uri");

    let statement = Connection::new(&database).new_statement();
    let (mut stream, _) = statement.execute_query().expect("execute");

    let err = stream.next_batch().expect_err("short row");
    assert_eq!(Status::from(&err), Status::InvalidArgument);
    assert!(err.to_string().contains("expected 3 fields but found 2"));
    assert!(stream
        .last_error()
        .expect("cached message")
        .contains("expected 3 fields but found 2"));
}

#[test]
fn non_empty_query_is_not_supported() {
    let tmp = write_sample_csv();

    let driver = Driver::new();
    let mut database = driver.new_database().expect("database");
    database
        .set_option(OPTION_URI, tmp.path().to_str().expect("utf8 path"))
        .expect("set uri");

    let mut statement = Connection::new(&database).new_statement();
    let err = statement.set_sql_query("SELECT 1").expect_err("reject");
    assert!(matches!(err, Error::NotSupported(_)));
    assert_eq!(Status::from(&err), Status::NotSupported);
}
