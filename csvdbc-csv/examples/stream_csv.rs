use std::env;
use std::path::PathBuf;

use arrow::util::pretty::print_batches;
use csvdbc_csv::CsvReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Usage: stream_csv <path-to-csv>");
            std::process::exit(2);
        }
    };

    let mut stream = CsvReader::default().open(&path)?;
    let schema = stream.schema()?;
    println!(
        "{} columns: {:?}",
        schema.fields().len(),
        schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect::<Vec<_>>()
    );

    while let Some(batch) = stream.next_batch()? {
        print_batches(&[batch])?;
    }

    Ok(())
}
