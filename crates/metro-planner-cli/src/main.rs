use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use metro_planner_cli::commands::compare::{handle_compare_command, CompareCommandArgs};
use metro_planner_cli::commands::prompt::{handle_prompt_command, PromptCommandArgs};
use metro_planner_cli::commands::route::{handle_route_command, RouteCommandArgs};
use metro_planner_cli::commands::stations::handle_stations_command;
use metro_planner_cli::commands::{GlobalOptions, PlannerContext};
use metro_planner_cli::output::print_logo;

#[derive(Parser, Debug)]
#[command(author, version, about = "Metro route planner")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two stations with one search strategy.
    Route(RouteCommandArgs),
    /// Run the blind and heuristic searches for the same query.
    Compare(CompareCommandArgs),
    /// Ask for origin, line and destination on stdin, then compare both searches.
    Prompt(PromptCommandArgs),
    /// List every line with its stations.
    Stations,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !cli.global.no_logo && cli.global.format.shows_logo() {
        print_logo();
    }

    let context = PlannerContext::from_options(&cli.global)?;

    match cli.command {
        Command::Route(args) => handle_route_command(&context, &args),
        Command::Compare(args) => handle_compare_command(&context, &args),
        Command::Prompt(args) => handle_prompt_command(&context, &args, io::stdin().lock()),
        Command::Stations => handle_stations_command(&context),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
