// CSV export for page tables and chosen victims

use std::io::Write;
use std::path::Path;

use log::info;
use page_replacement::PageRecord;

use crate::error::Result;
use crate::models::{CsvPageRow, CsvVictimRow};

/// Write victim rows to a CSV file with header `example,policy,victim`
pub fn export_csv<P: AsRef<Path>>(path: P, rows: &[CsvVictimRow]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("exported {} victim rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write a page table as CSV (`page,loaded,last_ref,r,m`)
pub fn write_table_csv<W: Write>(out: W, table: &[PageRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in table {
        writer.serialize(CsvPageRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::static_table;
    use crate::input::TableReader;

    #[test]
    fn test_write_table_csv_format() {
        let mut buf = Vec::new();
        write_table_csv(&mut buf, &static_table()[..2]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "page,loaded,last_ref,r,m\n0,126,280,1,0\n1,230,265,0,1\n"
        );
    }

    #[test]
    fn test_written_table_reads_back() {
        let mut buf = Vec::new();
        write_table_csv(&mut buf, &static_table()).unwrap();
        let table = TableReader::read_from(buf.as_slice()).unwrap();
        assert_eq!(table, static_table());
    }

    #[test]
    fn test_export_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("victims.csv");
        let rows = vec![
            CsvVictimRow {
                example: "static".to_string(),
                policy: "NRU".to_string(),
                victim: 2,
            },
            CsvVictimRow {
                example: "static".to_string(),
                policy: "Second Chance".to_string(),
                victim: 2,
            },
        ];

        export_csv(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "example,policy,victim\nstatic,NRU,2\nstatic,Second Chance,2\n"
        );
    }
}
