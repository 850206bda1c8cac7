use std::{error::Error, io};

use healthbot_advisor::{form, Advisor};
use healthbot_artifacts::Config;
use log::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    let config = Config::from_env();

    let advisor = match Advisor::start(&config).await {
        Ok(advisor) => advisor,
        Err(e) => {
            error!("Cannot start: {}", e);
            return Err(e.into());
        }
    };

    info!("Ready for input");
    form::run(&advisor, io::stdin().lock(), io::stdout().lock())?;

    info!("Input closed, terminating...");
    Ok(())
}
