//! Entry point: predict next week's stats and compare against opponents.

use clap::Parser;
use yahoo_flb::cli::ReportArgs;
use yahoo_flb::commands::report::{handle_report, ReportParams};
use yahoo_flb::opponents::OpponentMode;
use yahoo_flb::{logging, Result};

#[tokio::main]
async fn main() {
    let args = ReportArgs::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: ReportArgs) -> Result<()> {
    logging::init()?;
    let report = handle_report(ReportParams {
        credentials: args.credentials,
        mode: OpponentMode::from_flags(args.all, args.opponent),
        cached: args.cached,
        save: args.save,
        season: args.season,
        league: args.league,
    })
    .await?;
    println!("{}", report);
    Ok(())
}
