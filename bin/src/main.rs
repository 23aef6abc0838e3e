//! reelquote CLI - AI-assisted animation and video project estimates.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod logging;
mod options;

use display::Format;
use options::{ProfileArgs, ServiceArgs};

#[derive(Parser)]
#[command(name = "reelquote")]
#[command(about = "AI-assisted animation and video project estimates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output and logs below error)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an estimate for one project description
    Quote {
        /// Project description. Prompted for when omitted.
        description: Option<String>,

        #[command(flatten)]
        service: ServiceArgs,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format (defaults to the output file extension, then text)
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Write the estimate to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Request estimates repeatedly in one session
    Interactive {
        #[command(flatten)]
        service: ServiceArgs,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print the response schema sent with every request
    Schema {
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Show the request that would be sent, without calling the service
    Prompt {
        /// Project description. Prompted for when omitted.
        description: Option<String>,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the request as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Quote {
            description,
            service,
            profile,
            format,
            output,
        } => {
            commands::quote::quote(
                description,
                &service,
                &profile,
                format,
                output.as_deref(),
                cli.quiet,
            )
            .await
        }
        Commands::Interactive {
            service,
            profile,
            format,
        } => commands::interactive::interactive(&service, &profile, format, cli.quiet).await,
        Commands::Schema { compact } => commands::schema::show_schema(compact),
        Commands::Prompt {
            description,
            profile,
            json,
        } => commands::prompt::show_prompt(description, &profile, json),
    }
}
