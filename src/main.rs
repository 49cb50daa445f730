//! tfe-export - Main entry point

use clap::Parser;
use log::{debug, info};

use tfe_export::{
    run_teams_command, run_users_command, run_workspaces_command, Cli, ExportCommand,
    ExportConfig, Result, TfeClient,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfe-export v{}", env!("CARGO_PKG_VERSION"));

    let command = match cli.command.as_deref() {
        None => {
            println!("no command applied");
            std::process::exit(1);
        }
        Some(name) => match ExportCommand::parse(name) {
            Some(command) => command,
            None => {
                println!(
                    "unknown command '{}': expected workspaces, teams or users",
                    name
                );
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = run(&cli, command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}

/// Build the client and run one export
async fn run(cli: &Cli, command: ExportCommand) -> Result<()> {
    let config = ExportConfig::from_cli(cli);
    debug!(
        "CLI args: command={}, hostname={:?}, org={:?}, config={:?}",
        command, cli.hostname, cli.org, config
    );

    let client = TfeClient::new(cli.require_token()?, cli.require_hostname()?)?;
    debug!("Using API at {}", client.base_url());

    match command {
        ExportCommand::Workspaces => {
            run_workspaces_command(&client, cli, &config).await?;
        }
        ExportCommand::Users => {
            run_users_command(&client, cli, &config).await?;
        }
        ExportCommand::Teams => {
            run_teams_command(&client, cli, &config).await?;
        }
    }

    Ok(())
}
