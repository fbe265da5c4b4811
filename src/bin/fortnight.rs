//! Fortnight CLI tool
//!
//! A command-line tool for generating two-week date lists and copying them to
//! the clipboard.

use std::io::Read;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use fortnight::clipboard::{ClipboardExporter, ExportOutcome, MemoryClipboard, SystemClipboard};
use fortnight::config::Config;
use fortnight::date::{self, Clock, FixedClock, SystemClock};
use fortnight::export;
use fortnight::session::Session;

/// Fortnight - Generate two-week date lists
#[derive(Parser)]
#[command(name = "fortnight")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # List the two weeks starting last Monday
    fortnight generate

    # List the two weeks starting September 1st of this year
    fortnight generate 9/1
    fortnight generate 9月1日

    # Copy a list to the clipboard as text and spreadsheet table
    fortnight copy 2023-9-1

    # Copy a selection of earlier output, without the banner line
    fortnight generate | head -4 | fortnight select")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to TOML configuration file
    #[arg(long, global = true, env = "FORTNIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Treat this date as today (e.g. "2023-09-06")
    #[arg(long, global = true, env = "FORTNIGHT_TODAY")]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the two-week list
    Generate {
        /// Start date (e.g. "9/1", "9月1日", "2023-9-1"); defaults to last Monday
        date: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Omit the start date banner in text output
        #[arg(long)]
        no_banner: bool,
    },

    /// Generate a list and copy it to the clipboard
    Copy {
        /// Start date (e.g. "9/1", "9月1日", "2023-9-1"); defaults to last Monday
        date: Option<String>,

        /// Print what would be copied instead of touching the clipboard
        #[arg(long)]
        dry_run: bool,
    },

    /// Copy selected output from stdin, dropping banner and metadata lines
    Select {
        /// Print what would be copied instead of touching the clipboard
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the default start date (Monday of last week)
    Anchor,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Banner and one label per line
    Text,
    /// Spreadsheet-ready HTML table
    Html,
    /// Metadata line followed by the labels
    Tagged,
}

fn main() {
    let cli = Cli::parse();
    fortnight::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let clock = make_clock(cli.today.as_deref())?;

    match cli.command {
        Commands::Generate { date, format, no_banner } => cmd_generate(clock, &config, date, format, no_banner),
        Commands::Copy { date, dry_run } => cmd_copy(clock, &config, date, dry_run),
        Commands::Select { dry_run } => cmd_select(clock, &config, dry_run),
        Commands::Anchor => cmd_anchor(clock.as_ref()),
    }
}

fn make_clock(today: Option<&str>) -> Result<Box<dyn Clock>> {
    match today {
        Some(s) => {
            let date = date::parse_date(s).with_context(|| format!("bad --today value {:?}", s))?;
            Ok(Box::new(FixedClock(date)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Build a session and generate from `date`, or from the default anchor
fn generate_session(clock: Box<dyn Clock>, config: &Config, date: Option<String>) -> Result<Session> {
    let mut session = Session::new(clock, config.table.clone());
    match date {
        Some(date) => {
            session.set_input(date);
            session.generate_from_input()?;
        }
        None => {
            session.generate_default()?;
        }
    }
    Ok(session)
}

/// Print the list
fn cmd_generate(
    clock: Box<dyn Clock>,
    config: &Config,
    date: Option<String>,
    format: OutputFormat,
    no_banner: bool,
) -> Result<()> {
    let session = generate_session(clock, config, date)?;
    let Some(seq) = session.sequence() else {
        anyhow::bail!("no date list generated");
    };

    match format {
        OutputFormat::Text if no_banner => println!("{}", export::plain_text(seq)),
        OutputFormat::Text => println!("{}", export::render(seq)),
        OutputFormat::Html => println!("{}", export::html_table(seq, &config.table)),
        OutputFormat::Tagged => print!("{}", export::tagged(seq)),
    }

    Ok(())
}

/// Generate and copy to the clipboard
fn cmd_copy(clock: Box<dyn Clock>, config: &Config, date: Option<String>, dry_run: bool) -> Result<()> {
    let session = generate_session(clock, config, date)?;

    if dry_run {
        let mut exporter = ClipboardExporter::new(MemoryClipboard::new());
        let outcome = session.copy(&mut exporter)?;
        print_dry_run(exporter.clipboard());
        return report(outcome);
    }

    let mut exporter = ClipboardExporter::new(SystemClipboard::new(&config.clipboard));
    report(session.copy(&mut exporter)?)
}

/// Copy a selection read from stdin
fn cmd_select(clock: Box<dyn Clock>, config: &Config, dry_run: bool) -> Result<()> {
    // Let the selection settle before reading it
    thread::sleep(Duration::from_millis(config.selection.settle_ms));

    let mut selected = String::new();
    std::io::stdin()
        .read_to_string(&mut selected)
        .context("failed to read selection from stdin")?;

    let session = Session::new(clock, config.table.clone());

    let outcome = if dry_run {
        let mut exporter = ClipboardExporter::new(MemoryClipboard::new());
        let outcome = session.copy_selection(&selected, &mut exporter);
        print_dry_run(exporter.clipboard());
        outcome
    } else {
        let mut exporter = ClipboardExporter::new(SystemClipboard::new(&config.clipboard));
        session.copy_selection(&selected, &mut exporter)
    };

    match outcome {
        Some(outcome) => report(outcome),
        None => {
            tracing::info!("empty selection, nothing copied");
            Ok(())
        }
    }
}

/// Print the default anchor
fn cmd_anchor(clock: &dyn Clock) -> Result<()> {
    let anchor = fortnight::anchor::default_anchor(clock)?;
    println!("{}", fortnight::sequence::full_label(anchor));
    Ok(())
}

fn print_dry_run(clipboard: &MemoryClipboard) {
    if let Some(contents) = clipboard.contents() {
        println!("{}", contents.plain);
    }
}

fn report(outcome: ExportOutcome) -> Result<()> {
    match outcome {
        ExportOutcome::Copied { tier } => {
            eprintln!("Copied to clipboard ({})", tier);
            Ok(())
        }
        ExportOutcome::Manual { text } => {
            eprintln!("Copy failed, please copy the following manually:\n");
            println!("{}", text);
            Err(fortnight::Error::ClipboardExhausted.into())
        }
    }
}
