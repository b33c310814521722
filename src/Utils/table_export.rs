use crate::calculator::table::SampleTable;
use csv::Writer;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// tab separated copy of the sample table, undefined cells left empty
pub fn save_table_to_file<P: AsRef<Path>>(table: &SampleTable, filename: P) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for row in table.rows() {
        writeln!(file, "{}", row.join("\t"))?;
    }
    Ok(())
}

/// comma separated copy of the sample table, undefined cells left empty
pub fn save_table_to_csv<P: AsRef<Path>>(table: &SampleTable, filename: P) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    for row in table.rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
