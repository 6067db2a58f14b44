pub const INCIDENTS_URL: &str = "https://gis.charlottenc.gov/arcgis/rest/services/CMPD/CMPDIncidents/MapServer/0/query?outFields=*&where=1%3D1&f=geojson";
pub const ZIP_CODES_URL: &str = "https://meckgis.mecklenburgcountync.gov/server/rest/services/ZipCodeBoundaries/FeatureServer/0/query?outFields=*&where=1%3D1&f=geojson";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Names accepted for dataset selection, in export order.
pub const DATASET_NAMES: [&str; 2] = ["incidents", "zipcodes"];

/// One export job: where to fetch from and which file to write.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub label: String,
    pub url: String,
    pub file_name: String,
}

impl Dataset {
    pub fn new(name: &str, label: &str, url: &str) -> Self {
        Dataset {
            name: name.into(),
            label: label.into(),
            url: url.into(),
            file_name: format!("{}.csv", name),
        }
    }

    pub fn incidents(url: Option<&str>) -> Self {
        Dataset::new("incidents", "incidents", url.unwrap_or(INCIDENTS_URL))
    }

    pub fn zip_codes(url: Option<&str>) -> Self {
        Dataset::new("zipcodes", "ZIP codes", url.unwrap_or(ZIP_CODES_URL))
    }
}

/// The default job list, optionally narrowed down to the datasets named in `only`.
pub fn datasets(
    incidents_url: Option<&str>,
    zip_codes_url: Option<&str>,
    only: &[String],
) -> Vec<Dataset> {
    vec![
        Dataset::incidents(incidents_url),
        Dataset::zip_codes(zip_codes_url),
    ]
    .into_iter()
    .filter(|dataset| only.is_empty() || only.contains(&dataset.name))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_jobs_in_order() {
        let jobs = datasets(None, None, &[]);
        let names: Vec<&str> = jobs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, DATASET_NAMES);
        assert_eq!(jobs[0].file_name, "incidents.csv");
        assert_eq!(jobs[0].url, INCIDENTS_URL);
        assert_eq!(jobs[1].file_name, "zipcodes.csv");
        assert_eq!(jobs[1].label, "ZIP codes");
    }

    #[test]
    fn url_overrides() {
        let jobs = datasets(None, Some("http://localhost/zip"), &[]);
        assert_eq!(jobs[0].url, INCIDENTS_URL);
        assert_eq!(jobs[1].url, "http://localhost/zip");
    }

    #[test]
    fn select_subset() {
        let jobs = datasets(None, None, &["zipcodes".to_string()]);
        assert_eq!(jobs, vec![Dataset::zip_codes(None)]);
    }
}
