mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use logging::{init_logging, LogConfig, LogFormat};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "prtr",
    version,
    about = "Check pollutant release register workbooks against business rules"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty, global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a workbook (xlsx/xls/ods) or a directory of CSV files
    Check {
        /// Path to workbook file or CSV directory
        input: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write the JSON summary to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Omit the failing-row listings from the text report
        #[arg(long)]
        no_listing: bool,

        /// Exit with status 2 when any rule has failing rows
        #[arg(long)]
        fail_on_violation: bool,
    },
    /// Inspect the business rule catalog
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List all business rules
    List,
    /// Explain one rule in plain language
    Explain {
        /// Rule number (1-9)
        id: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        })
        .with_ansi(io::stderr().is_terminal());
    init_logging(&log_config);

    let result = match cli.command {
        Commands::Check {
            input,
            format,
            out,
            no_listing,
            fail_on_violation,
        } => commands::check::run(&input, &format, out, no_listing).map(|clean| {
            if fail_on_violation && !clean {
                2
            } else {
                0
            }
        }),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list().map(|()| 0),
            RulesAction::Explain { id } => commands::rules::explain(id).map(|()| 0),
        },
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
