//! `livestyle-dist` - packages the app for one platform per run.

use livestyle_dist::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Stage progress is shown unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            if let Some(stage) = e.stage() {
                log::debug!("aborted in {} stage", stage);
            }
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
