use clap::Parser;
use color_eyre::eyre::Result;

use hellonews::{
    domain::catalog::Catalog,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let catalog = Catalog::sample()?;

    if args.list_posts {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    // Load configuration (file-based)
    let config = Config::new()?;
    log::info!(
        "starting with {} posts, tick rate {}, frame rate {}",
        catalog.len(),
        args.tick_rate,
        args.frame_rate
    );

    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut runner = AppRunner::new(config, catalog, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
