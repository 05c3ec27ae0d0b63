// src/csv.rs
use std::io::{ self, Read, Write };

use ::csv::{ ReaderBuilder, Trim, WriterBuilder };

use crate::config::options::ExportFormat;
use crate::data::Record;
use crate::error::ScrapeError;

/* ---------------- Reading ---------------- */

/// Records from a delimited stream with a header row. Columns are matched
/// by name, so order does not matter and extra columns are ignored.
pub fn read_records<R: Read>(input: R, format: ExportFormat) -> Result<Vec<Record>, ::csv::Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delim())
        .trim(Trim::All)
        .from_reader(input);
    reader.deserialize().collect()
}

/* ---------------- Writing ---------------- */

/// Header `area,cases,date`, then one line per record. No index column.
pub fn write_records<W: Write>(out: W, records: &[Record], format: ExportFormat) -> Result<(), ScrapeError> {
    let mut writer = WriterBuilder::new().delimiter(format.delim()).from_writer(out);
    if records.is_empty() {
        // serde only emits the header alongside the first row
        writer.write_record(["area", "cases", "date"])?;
    }
    for r in records {
        writer.serialize(r)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn records_to_string(records: &[Record], format: ExportFormat) -> Result<String, ScrapeError> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records, format)?;

    let s = String::from_utf8(buf).map_err(io::Error::other)?;
    Ok(s)
}
