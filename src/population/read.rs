use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::Population;
use crate::error::{Result, SamplingError};

impl<T> Population<T> {
    /// Read population units from a CSV file with headers matching struct fields
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let path = path.as_ref();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }

        if records.is_empty() {
            return Err(SamplingError::EmptyFile);
        }

        debug!(path = %path.display(), units = records.len(), "read population");
        Ok(Self::new(records))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    struct Household {
        id: u32,
        income: f64,
    }

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_records_in_file_order() {
        let file = csv_file("id,income\n1,1200.5\n2,800\n3,3100\n");
        let population: Population<Household> = Population::read(file.path()).unwrap();
        assert_eq!(population.len(), 3);
        assert_eq!(population.as_slice()[1], Household { id: 2, income: 800.0 });

        let incomes = population.map(|h| h.income);
        assert_eq!(incomes.as_slice(), &[1200.5, 800.0, 3100.0]);
    }

    #[test]
    fn header_only_file_is_an_error() {
        let file = csv_file("id,income\n");
        let err = Population::<Household>::read(file.path()).unwrap_err();
        assert!(matches!(err, SamplingError::EmptyFile));
    }

    #[test]
    fn malformed_record_is_a_csv_error() {
        let file = csv_file("id,income\n1,not-a-number\n");
        let err = Population::<Household>::read(file.path()).unwrap_err();
        assert!(matches!(err, SamplingError::Csv(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Population::<Household>::read("/nonexistent/population.csv").unwrap_err();
        assert!(matches!(err, SamplingError::Csv(_) | SamplingError::Io(_)));
    }
}
