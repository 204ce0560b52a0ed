use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use apptemplate::{about, config, ui, About, ConfigFile};

#[derive(clap::Parser)]
#[command(
    name = "apptemplate",
    about = "Control the apptemplate application",
    arg_required_else_help(true)
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Print version information")]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show package information
    Info,

    /// List the selectable environments of the configuration file
    Environments,

    /// Print the resolved configuration of an environment
    Show {
        #[arg(short, long, help = "The environment to resolve")]
        environment: String,
    },

    /// Write the default configuration file to a destination
    Export {
        #[arg(help = "Destination path, must end in .toml")]
        destination: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let about = match about::about() {
        Ok(about) => about,
        Err(e) => {
            ui::display_error(&format!("Package metadata error: {}", e));
            std::process::exit(1);
        }
    };

    if args.version {
        println!("{} {}", about.name, about.version);
        return Ok(());
    }

    match args.command {
        Some(Commands::Info) => {
            println!("{} {}", about.name, about.version);
            println!("{}", about.description);
            println!("Author: {}", about.author);
            println!("Data directory: {}", about.datadir.display());
        }
        Some(Commands::Environments) => {
            let config_file = load_config_file(args.config.as_deref());
            let environments = config_file.environments();
            if environments.is_empty() {
                ui::display_error("No environments defined in the configuration file");
                std::process::exit(1);
            }
            ui::display_environments(&environments);
        }
        Some(Commands::Show { environment }) => {
            let config_file = load_config_file(args.config.as_deref());
            show_environment(&config_file, about, &environment)?;
        }
        Some(Commands::Export { destination }) => {
            ui::display_status(&format!(
                "Writing default configuration to {}",
                destination.display()
            ));
            if let Err(e) = config::export_default(&destination) {
                ui::display_error(&format!("Export failed: {}", e));
                std::process::exit(1);
            }
            ui::display_success(&format!(
                "Default configuration written to {}",
                destination.display()
            ));
        }
        None => {
            ui::display_error("No command provided, see --help");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn load_config_file(path: Option<&std::path::Path>) -> ConfigFile {
    match ConfigFile::load(path) {
        Ok(config_file) => config_file,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    }
}

fn show_environment(config_file: &ConfigFile, about: &About, environment: &str) -> Result<()> {
    let storage = about.env_datadir(environment);
    let resolved = match config_file.environment(environment, &storage) {
        Ok(resolved) => resolved,
        Err(e) => {
            ui::display_error(&format!("Cannot resolve environment: {}", e));
            std::process::exit(1);
        }
    };
    print!("{}", toml::to_string(&resolved)?);
    Ok(())
}
