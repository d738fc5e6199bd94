use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use wheredb::config::Config;
use wheredb::error::StoreError;
use wheredb::output::{prompt_format, OutputFormat, OutputFormatter};
use wheredb::store::Store;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record file to load (JSON array, optionally `var x = [...];`)
    #[arg(short, long, env = "WHEREDB_DATA")]
    data: Option<PathBuf>,

    /// Output format; skips the format prompt
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Run a single query and exit
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(data) = args.data {
        config.data_file = data;
    }

    let store = Store::from_json_file(&config.data_file).map_err(|e| {
        log::error!("Application failed: {}", e);
        e
    })?;
    let formatter = OutputFormatter::from_config(&config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(query) = args.query {
        let results = store.query(&query)?;
        let format = args.format.unwrap_or(config.default_format);
        formatter.display(&results, format, &mut out)?;
        return Ok(());
    }

    writeln!(out, "\nDatabase loaded with {} records", store.count())?;

    loop {
        writeln!(out, "\nEnter a query (or 'quit' to exit):")?;
        writeln!(out, "Example: {}", config.example_query)?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.eq_ignore_ascii_case("quit") {
            break;
        }

        let results = match store.query(query) {
            Ok(results) => results,
            Err(StoreError::Query(e)) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let format = match args.format {
            Some(format) => format,
            None => prompt_format(&mut input, &mut out, config.default_format)?,
        };

        if let Err(e) = formatter.display(&results, format, &mut out) {
            log::error!("Unexpected error: {}", e);
            writeln!(out, "An unexpected error occurred. Please try again.")?;
        }
    }

    Ok(())
}
