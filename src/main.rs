use applog::config::{load_config, Config};
use applog::logger::{self, FileLogger, LogLevel};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(name = "applog")]
#[command(about = "Append diagnostic records to a single application log file", long_about = None)]
struct Cli {
    /// Path to a JSON config file (threshold and log file location)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append one record at the given severity
    Emit {
        /// Severity of the record
        #[arg(short, long, default_value = "info")]
        level: LogLevel,

        /// Message text
        #[arg(default_value = "")]
        message: String,
    },
    /// Print the resolved threshold and log file location
    Show,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(Path::new(path))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Emit { level, message } => {
            logger::init_logger(FileLogger::new(config.log.level, config.log.path));
            logger::log(level, &message, applog::callsite!())?;
        }
        Commands::Show => {
            println!("threshold: {}", config.log.level);
            println!("log file:  {}", config.log.path.display());
        }
    }

    Ok(())
}
