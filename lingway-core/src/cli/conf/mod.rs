mod check;

pub use check::*;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a device file and exit
    Check {
        /// Path to the device file
        #[arg(default_value = "config/devices.hcl")]
        path: PathBuf,

        /// Print errors without diagnostics formatting
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
    }
}
