//! Line-oriented front end for the shape modeller.
//!
//! Reads one command per line from stdin. An optional argument names a
//! hierarchy file to load at startup.

use std::io;

use anyhow::Context;

use haggis_modeller::app::ModellerApp;
use haggis_modeller::config::ModellerConfig;
use haggis_modeller::input::Command;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ModellerConfig::from_env();
    log::info!("Starting modeller with {:?}", config);
    let mut app = ModellerApp::new(config);

    if let Some(path) = std::env::args().nth(1) {
        let outcome = app.handle(Command::Load(path.into()));
        println!("{}", outcome);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(stdin.lock(), stdout.lock())
        .context("command loop failed")?;

    Ok(())
}
