mod export;

pub use export::{read_csv, write_csv, write_records, CsvRow};
