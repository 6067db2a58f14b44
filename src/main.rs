use chrono::Local;
use geojson2csv::config::{self, DATASET_NAMES};
use geojson2csv::export_all;
use geojson2csv::fetch::HttpSource;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "geojson2csv",
    about = "Fetch the CMPD incident and ZIP code layers and save them as CSV"
)]
struct Opt {
    /// Directory the CSV files are written to
    #[structopt(short, long, parse(from_os_str), default_value = "../data")]
    out_dir: PathBuf,

    /// Request timeout in seconds
    #[structopt(short, long)]
    timeout: Option<u64>,

    /// Override the incidents endpoint
    #[structopt(long)]
    incidents_url: Option<String>,

    /// Override the ZIP code boundaries endpoint
    #[structopt(long)]
    zipcodes_url: Option<String>,

    /// Only export the named dataset (can be repeated)
    #[structopt(long, possible_values = &DATASET_NAMES)]
    only: Vec<String>,
}

const RULE: &str = "============================================================";

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let opt = Opt::from_args();
    let datasets = config::datasets(
        opt.incidents_url.as_deref(),
        opt.zipcodes_url.as_deref(),
        &opt.only,
    );
    let timeout = opt.timeout.unwrap_or(config::DEFAULT_TIMEOUT_SECS);
    let source = HttpSource::new(Duration::from_secs(timeout))?;

    println!("{}", RULE);
    println!("Charlotte Crime Data Fetcher");
    println!("Date: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}", RULE);

    let reports = export_all(&source, &datasets, &opt.out_dir);
    let exported = reports.iter().filter(|report| report.is_ok()).count();
    info!("{} of {} datasets exported", exported, reports.len());

    println!("{}", RULE);
    println!("Data fetch complete!");
    println!("Files saved to '{}' directory", opt.out_dir.display());
    println!("{}", RULE);
    Ok(())
}
