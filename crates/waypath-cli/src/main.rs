use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waypath_cli::commands::interactive::run_session;
use waypath_cli::commands::list::handle_list_command;
use waypath_cli::commands::route::{handle_route_command, RouteCommandArgs};
use waypath_cli::commands::RouteOutcome;
use waypath_cli::output::OutputFormat;
use waypath_cli::terminal::ColorPalette;
use waypath_lib::{load_network_definition, sample_network, RouteNetwork};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lowest-cost routes between named locations")]
struct Cli {
    /// Load locations and routes from a JSON network definition instead of the built-in map.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format for `list` and `route`.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the numbered location menu.
    List,
    /// Compute the lowest-cost route between two location identifiers.
    Route {
        /// Starting location identifier.
        #[arg(long = "from")]
        from: String,
        /// Destination location identifier.
        #[arg(long = "to")]
        to: String,
    },
    /// Choose origin and destination from the numbered menu.
    Interactive,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_network(cli.network.as_deref())?;
    let palette = ColorPalette::detect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::List => {
            handle_list_command(&network, cli.format, palette, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Route { from, to } => {
            let args = RouteCommandArgs { from, to };
            let outcome = handle_route_command(&network, &args, cli.format, palette, &mut out)?;
            Ok(match outcome {
                RouteOutcome::Found => ExitCode::SUCCESS,
                RouteOutcome::NoRoute => ExitCode::FAILURE,
            })
        }
        Command::Interactive => {
            // A session that ends on "No route available" still completed normally.
            let stdin = io::stdin();
            run_session(&network, &mut stdin.lock(), &mut out, palette)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_network(path: Option<&Path>) -> Result<RouteNetwork> {
    let definition = match path {
        Some(path) => load_network_definition(path)
            .with_context(|| format!("failed to load network definition from {}", path.display()))?,
        None => sample_network(),
    };
    RouteNetwork::from_definition(&definition).context("network definition is invalid")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
