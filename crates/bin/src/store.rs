//! Store loading for the CLI.

use std::path::Path;

use txguard::store::InMemory;

/// Open the store named by `--data`, falling back to the sample bank.
pub fn open_store(data: Option<&Path>) -> Result<InMemory, Box<dyn std::error::Error>> {
    match data {
        Some(path) if path.exists() => {
            tracing::info!("Loading store from {}", path.display());
            Ok(InMemory::load_from_file(path)?)
        }
        Some(path) => {
            tracing::warn!(
                "Store file {} not found, using the sample bank",
                path.display()
            );
            Ok(InMemory::with_sample_data()?)
        }
        None => {
            tracing::debug!("Using the sample bank");
            Ok(InMemory::with_sample_data()?)
        }
    }
}
