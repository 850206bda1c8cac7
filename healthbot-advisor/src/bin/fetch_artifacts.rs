use std::error::Error;

use healthbot_artifacts::{Config, Fetcher};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    let config = Config::from_env();

    let fetcher = Fetcher::new(config.source(), config.artifact_dir.clone());
    let report = fetcher.ensure_all().await?;
    for artifact in report.downloaded {
        info!("Downloaded {}", artifact.file_name());
    }
    for artifact in report.present {
        info!("Already present: {}", artifact.file_name());
    }

    Ok(())
}
