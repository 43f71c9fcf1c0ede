use std::path::PathBuf;
use std::process;

use clap::Parser;

use ssh_roster::models::{RosterError, RosterResult};
use ssh_roster::services::Provisioner;

/// Provision per-account SSH key pairs and host aliases.
#[derive(Parser, Debug)]
#[command(
    name = "ssh-roster",
    version,
    about = "Provision per-account SSH key pairs and host aliases for a hosting service"
)]
struct Cli {
    /// Account roster file
    #[arg(short, long, default_value = "config.yaml", value_name = "FILE")]
    config: PathBuf,

    /// Key storage directory (defaults to ~/.ssh)
    #[arg(long, value_name = "DIR")]
    ssh_dir: Option<PathBuf>,
}

fn run(cli: Cli) -> RosterResult<()> {
    let ssh_dir = match cli.ssh_dir {
        Some(dir) => dir,
        None => dirs::home_dir()
            .ok_or(RosterError::HomeDirNotFound)?
            .join(".ssh"),
    };

    let provisioner = Provisioner::new(ssh_dir);
    provisioner.process_accounts(&cli.config)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssh_roster=info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
