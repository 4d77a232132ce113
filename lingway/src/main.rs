use clap::{Parser, Subcommand};
use lingway_core::cli;
use lingway_core::cli::OutputMode;
use lingway_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "lingway",
    version,
    about = "Lingway: request locale resolution for HTTP gateways"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Device file tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Run one request through the locale device and report the outcome
    Resolve {
        #[command(flatten)]
        args: cli::resolve::ResolveArgs,

        #[arg(long, conflicts_with = "plain")]
        json: bool,

        #[arg(long)]
        plain: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Config { cmd } => cli::conf::run(cmd),

        Command::Resolve { args, json, plain } => {
            let mode = if json {
                OutputMode::Json
            } else if plain {
                OutputMode::Plain
            } else {
                cli::default_output_mode()
            };
            cli::resolve::run(args, mode)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
