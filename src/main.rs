use log::{info, warn};

mod codec;
mod config;
mod date;
mod error;
mod query;
mod store;
mod task;
mod ui;

use config::Config;
use store::TaskStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::load();
    let data_file = config.data_file();

    // An unreadable file starts an empty session, same as a first run;
    // the warning is the only trace.
    let mut store = match codec::load(&data_file) {
        Ok(records) => {
            info!("loaded {} task(s) from {}", records.len(), data_file.display());
            TaskStore::from_records(records)
        }
        Err(err) => {
            warn!("could not read {}: {err}", data_file.display());
            eprintln!("Could not read {}: {err}", data_file.display());
            TaskStore::new()
        }
    };

    ui::run(&mut store, &config)?;
    Ok(())
}
