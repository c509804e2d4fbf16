//! Input data handling for page tables
//!
//! Reads a page table from CSV with the header `page,loaded,last_ref,r,m`.
//! Each row is validated (bits must be 0 or 1, `last_ref >= loaded`) and the
//! table as a whole must not repeat a page identifier.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use page_replacement::{check_unique_pages, PageRecord};

use crate::error::Result;
use crate::models::CsvPageRow;

/// Reader for page tables stored as CSV
#[derive(Debug, Clone)]
pub struct TableReader {
    path: PathBuf,
}

impl TableReader {
    /// Create a new reader for the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and validate the table
    pub fn read(&self) -> Result<Vec<PageRecord>> {
        let file = File::open(&self.path)?;
        let table = Self::read_from(file)?;
        info!(
            "loaded {} pages from {}",
            table.len(),
            self.path.display()
        );
        Ok(table)
    }

    /// Read and validate a table from any reader
    pub fn read_from<R: io::Read>(reader: R) -> Result<Vec<PageRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = Vec::new();
        for row in csv_reader.deserialize::<CsvPageRow>() {
            table.push(row?.into_record()?);
        }

        check_unique_pages(&table)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use page_replacement::ReplacementError;
    use std::io::Write;

    const WORKED_EXAMPLE: &str = "\
page,loaded,last_ref,r,m
0,126,280,1,0
1,230,265,0,1
2,140,270,0,0
3,110,285,1,1
";

    #[test]
    fn test_read_worked_example() {
        let table = TableReader::read_from(WORKED_EXAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table[0], PageRecord::new(0, 126, 280, true, false));
        assert_eq!(table[3], PageRecord::new(3, 110, 285, true, true));
    }

    #[test]
    fn test_read_trims_whitespace() {
        let data = "page, loaded, last_ref, r, m\n 7 , 10 , 20 , 1 , 0\n";
        let table = TableReader::read_from(data.as_bytes()).unwrap();
        assert_eq!(table, vec![PageRecord::new(7, 10, 20, true, false)]);
    }

    #[test]
    fn test_read_header_only_gives_empty_table() {
        let table = TableReader::read_from("page,loaded,last_ref,r,m\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_rejects_duplicate_page() {
        let data = "page,loaded,last_ref,r,m\n1,0,5,0,0\n1,2,6,1,1\n";
        let result = TableReader::read_from(data.as_bytes());
        assert!(matches!(
            result,
            Err(SimError::Replacement(ReplacementError::DuplicatePage(1)))
        ));
    }

    #[test]
    fn test_read_rejects_bad_bit() {
        let data = "page,loaded,last_ref,r,m\n0,0,5,3,0\n";
        let result = TableReader::read_from(data.as_bytes());
        assert!(matches!(result, Err(SimError::InvalidBit { field: "R", .. })));
    }

    #[test]
    fn test_read_rejects_non_numeric_field() {
        let data = "page,loaded,last_ref,r,m\n0,soon,5,0,0\n";
        let result = TableReader::read_from(data.as_bytes());
        assert!(matches!(result, Err(SimError::Csv(_))));
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WORKED_EXAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let table = TableReader::new(file.path()).read().unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_read_missing_file() {
        let result = TableReader::new("/nonexistent/page_table.csv").read();
        assert!(matches!(result, Err(SimError::Io(_))));
    }
}
