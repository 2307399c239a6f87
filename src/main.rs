use std::path::PathBuf;

use clap::Parser;
use roster_tools::clean::{self, CleanOptions};
use roster_tools::report::TracingSink;
use roster_tools::{Result, ToolError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;

    info!("input: {}", cli.input.display());
    info!("output: {}", cli.output.display());
    if let Some(path) = &cli.compare {
        info!("compare-to list: {}", path.display());
        info!(
            "auto correct account names based on compare-to list: {}",
            yes_no(cli.auto_correct)
        );
    }
    if let Some(path) = &cli.replace {
        info!("replace-to list: {}", path.display());
        info!(
            "auto correct values based on replace-to list: {}",
            yes_no(cli.auto_correct)
        );
    }
    if cli.email_as_account {
        info!("auto replace account name with email address: yes");
    }

    let options = CleanOptions::from(cli);
    let mut sink = TracingSink;
    let outcome = clean::run(&options, &mut sink);
    info!(
        "finished: {} users in roster, output written: {}",
        outcome.roster_size,
        yes_no(outcome.output_written)
    );
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Clean a staff roster workbook against reference lists."
)]
struct Cli {
    /// Input file to read. XLSX file with any number of sheets and 9 columns.
    #[arg(short, long)]
    input: PathBuf,

    /// Output file to write. XLSX file.
    #[arg(short, long)]
    output: PathBuf,

    /// Compare-to input file. XLSX file with 1 sheet and 3 columns.
    #[arg(short, long)]
    compare: Option<PathBuf>,

    /// Replace-to input file. XLSX file with 1 sheet and 2 columns.
    #[arg(short, long)]
    replace: Option<PathBuf>,

    /// Auto correct values based on the compare-to and replace-to lists.
    #[arg(short, long)]
    auto_correct: bool,

    /// Replace every account name with the record's email address.
    #[arg(short, long)]
    email_as_account: bool,
}

impl From<Cli> for CleanOptions {
    fn from(cli: Cli) -> Self {
        CleanOptions {
            input: cli.input,
            output: cli.output,
            compare_to: cli.compare,
            replace_to: cli.replace,
            auto_correct: cli.auto_correct,
            email_as_account: cli.email_as_account,
        }
    }
}
