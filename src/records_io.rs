use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use route_planner::record::{parse_records, Record};

pub fn import_records(filename: &Path) -> Result<Vec<Record>, Box<dyn Error>> {
    log::info!("Importing distance records from {:?}.", filename);
    let file = File::open(filename)?;
    let reader = BufReader::new(file);
    Ok(parse_records(reader)?)
}

pub fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    Ok(())
}

pub fn export_records(filename: &Path, records: &[Record]) -> Result<(), Box<dyn Error>> {
    log::info!("Exporting {} records to {:?}.", records.len(), filename);
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod test_records_io {
    use super::*;
    use route_planner::Cost;

    #[test]
    fn test_written_records_parse_back() {
        let records = vec![
            Record::new("Tristram", "AlphaCentauri", Cost::new(34)),
            Record::new("Tristram", "Snowdin", Cost::new(100)),
        ];
        let mut buffer: Vec<u8> = vec![];
        write_records(&mut buffer, &records).unwrap();

        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "Tristram to AlphaCentauri = 34\nTristram to Snowdin = 100\n"
        );
        assert_eq!(parse_records(buffer.as_slice()).unwrap(), records);
    }

    #[test]
    fn test_import_missing_file() {
        assert!(import_records(Path::new("does/not/exist.data")).is_err());
    }
}
