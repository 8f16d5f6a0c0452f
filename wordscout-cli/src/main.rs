use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordscout::{
    config::{SearchConfig, DEFAULT_LOG_FILE},
    report,
    search::{search_content, search_names},
    SearchError,
};

type Result<T> = std::result::Result<T, SearchError>;

/// Look for literal words in a directory tree and tabulate the hits
/// per file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word(s) to look for
    #[arg(required = true)]
    words: Vec<String>,

    /// Directory in which to search (recursive)
    #[arg(short = 'd', long, default_value = ".")]
    directory: PathBuf,

    /// Print every matching line with its line number and file path
    #[arg(short, long)]
    verbose: bool,

    /// Aggregate under the full file path instead of the bare file name
    #[arg(long)]
    full_path: bool,

    /// Fold case before matching (the default is case sensitive)
    #[arg(short, long)]
    case_fold: bool,

    /// Also append match details to logs.txt, recreated on every run
    #[arg(short, long)]
    save: bool,

    /// Match file names instead of file contents
    #[arg(short, long)]
    name: bool,

    /// Search every non-hidden file, not just the known text extensions
    #[arg(short, long)]
    all_files: bool,

    /// Never count a line containing one of these words
    #[arg(short, long, num_args = 0..)]
    exclude: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SearchConfig {
        words: cli.words,
        exclude: cli.exclude,
        root_path: cli.directory,
        case_fold: cli.case_fold,
        full_path: cli.full_path,
        name_search: cli.name,
        all_files: cli.all_files,
        verbose: cli.verbose,
        save: cli.save,
        log_file: PathBuf::from(DEFAULT_LOG_FILE),
    };
    config.validate()?;
    debug!("running with {:?}", config);

    if config.name_search {
        search_names(&config)?;
        return Ok(());
    }

    let table = search_content(&config)?;
    match report::render(&table) {
        Some(rendered) => print!("{}", rendered),
        None => println!("{}", "No results found.".yellow()),
    }
    Ok(())
}
