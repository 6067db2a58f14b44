use config::Dataset;
use fetch::{fetch, Source};
use output::{save_csv, Export};
use std::path::Path;
use tracing::error;

pub mod config;
pub mod error;
pub mod fetch;
pub mod flatten;
pub mod geojson;
pub mod output;

#[cfg(test)]
mod test_helpers;

pub use error::Error;

/// Outcome of a single dataset job.
#[derive(Debug)]
pub struct Report {
    pub name: String,
    pub outcome: Result<Export, Error>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Fetch one dataset and write it to `out_dir`.
pub fn export(source: &dyn Source, dataset: &Dataset, out_dir: &Path) -> error::Result<Export> {
    let collection = fetch(source, &dataset.url, &dataset.label)?;
    save_csv(&collection, &out_dir.join(&dataset.file_name))
}

/// Run every job in order. A failing job is logged and does not stop the
/// ones after it.
pub fn export_all(source: &dyn Source, datasets: &[Dataset], out_dir: &Path) -> Vec<Report> {
    datasets
        .iter()
        .map(|dataset| {
            let outcome = export(source, dataset, out_dir);
            if let Err(err) = &outcome {
                error!("Error fetching {}: {}", dataset.label, err);
            }
            Report {
                name: dataset.name.clone(),
                outcome,
            }
        })
        .collect()
}
