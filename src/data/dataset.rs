use crate::domain::Listing;
use crate::errors::ServerError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The listings table, read once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    listings: Vec<Listing>,
}

impl Dataset {
    /// Load the listings CSV. Any failure here is fatal to startup.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ServerError::DataError(format!("Failed to open {}: {e}", path.display()))
        })?;

        let dataset = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            "listings dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ServerError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut listings = Vec::new();
        for (i, record) in rdr.deserialize::<Listing>().enumerate() {
            // Row numbers as a spreadsheet would show them (header is row 1).
            let listing = record
                .map_err(|e| ServerError::DataError(format!("Malformed row {}: {e}", i + 2)))?;
            listings.push(listing);
        }

        Ok(Self { listings })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
