use std::{error::Error, fs::File, path::Path};

use csv::ReaderBuilder;

/// Reads destination queries from a CSV file, one stop per row, first
/// column. Addresses containing commas must be quoted. Blank rows and
/// `#` comment rows are skipped.
pub fn read_stops_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(file);

    let mut stops = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let dest = record
            .get(0)
            .ok_or("Missing destination column in stops file")?
            .trim();
        if !dest.is_empty() {
            stops.push(dest.to_string());
        }
    }

    Ok(stops)
}
