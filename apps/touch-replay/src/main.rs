mod replay;

use std::fs::File;
use std::io::{self, BufReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let path = std::env::args().nth(1);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match path.as_deref() {
        None | Some("-") => {
            log::info!("replaying touch samples from stdin");
            replay::run(io::stdin().lock(), &mut out)?
        }
        Some(path) => {
            log::info!("replaying touch samples from {path}");
            replay::run(BufReader::new(File::open(path)?), &mut out)?
        }
    };

    log::info!(
        "replayed {} events, {} gestures completed, {} ignored",
        summary.events,
        summary.gestures,
        summary.ignored
    );
    Ok(())
}
