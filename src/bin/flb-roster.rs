//! Entry point: hitting projections for one week's roster.

use clap::Parser;
use yahoo_flb::cli::RosterArgs;
use yahoo_flb::commands::roster::{handle_roster, RosterParams};
use yahoo_flb::{logging, Result};

#[tokio::main]
async fn main() {
    let args = RosterArgs::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: RosterArgs) -> Result<()> {
    logging::init()?;
    let table = handle_roster(RosterParams {
        credentials: args.credentials,
        week: args.week,
        season: args.season,
        league: args.league,
    })
    .await?;
    println!("{}", table);
    Ok(())
}
