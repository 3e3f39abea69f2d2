use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use scel_reader::scel::batch::{self, BatchEvent};
use scel_reader::scel::export;
use scel_reader::{LogSink, ParsedDictionary, ScelReader, VocabularyItem};

const DEFAULT_BATCH_OUTPUT: &str = "all.txt";
const IMPORT_COMMAND: &str = "ibus-libpinyin-import-text-db";

/// Exit status when the merged file was written but some inputs failed.
const EXIT_PARTIAL: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert Sogou .scel dictionaries to ibus-libpinyin text format",
    long_about = None
)]
struct Cli {
    /// Treat INPUT as a directory and merge every .scel file below it
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// A .scel file, or a directory with -R
    input: PathBuf,

    /// Output file [default: INPUT with a .txt extension, or all.txt with -R]
    output: Option<PathBuf>,

    /// Number of converted items shown per file
    #[arg(long, default_value_t = 3)]
    preview: usize,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,
}

enum Outcome {
    Success,
    PartialFailure,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = if cli.recursive {
        run_batch(&cli)
    } else {
        run_single(&cli)
    };

    match result {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::PartialFailure) => ExitCode::from(EXIT_PARTIAL),
        Err(e) => {
            eprintln!("\nERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match (quiet, verbose) {
        (q, _) if q >= 2 => "off",
        (1, _) => "error",
        (_, 0) => "warn",
        (_, 1) => "info",
        (_, 2) => "debug",
        _ => "trace",
    };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn run_single(cli: &Cli) -> Result<Outcome> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("txt"));

    println!("Converting: {}", cli.input.display());
    let started = Instant::now();
    let reader = ScelReader::new(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let dictionary = reader.parse(&mut LogSink);
    println!("Parsed in {:.2}s", started.elapsed().as_secs_f64());
    print_dictionary(&dictionary, cli.preview);

    write_output(&output, &dictionary.items)?;
    Ok(Outcome::Success)
}

fn run_batch(cli: &Cli) -> Result<Outcome> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BATCH_OUTPUT));

    let root = fs::canonicalize(&cli.input).unwrap_or_else(|_| cli.input.clone());
    println!("Converting directory: {}", root.display());
    let started = Instant::now();

    let report = batch::convert_directory(&cli.input, &mut LogSink, |event| match event {
        BatchEvent::Converted {
            index,
            total,
            path,
            dictionary,
        } => {
            println!("\n[{}/{}] {}", index, total, display_name(path));
            print_dictionary(dictionary, cli.preview);
        }
        BatchEvent::Failed {
            index,
            total,
            path,
            error,
        } => {
            println!("\n[{}/{}] {}", index, total, display_name(path));
            println!("  FAILED: {}", error);
        }
    })
    .with_context(|| format!("failed to scan {}", cli.input.display()))?;

    if report.files.is_empty() {
        bail!("no .scel files found in {}", cli.input.display());
    }

    println!("\n{}", "=".repeat(60));
    println!(
        "Processed {} files in {:.2}s: {} converted, {} failed",
        report.files.len(),
        started.elapsed().as_secs_f64(),
        report.converted.len(),
        report.failures.len()
    );
    for (path, error) in &report.failures {
        println!("  {}: {}", path.display(), error);
    }
    println!(
        "Items read: {}, unique: {}, duplicates removed: {}",
        report.items_read,
        report.items.len(),
        report.duplicates_removed()
    );

    if report.items.is_empty() {
        bail!("no vocabulary items were converted");
    }

    write_output(&output, &report.items)?;
    if report.failures.is_empty() {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::PartialFailure)
    }
}

fn print_dictionary(dictionary: &ParsedDictionary, preview: usize) {
    let meta = &dictionary.metadata;
    println!("  Name:        {}", meta.name);
    println!("  Category:    {}", meta.category);
    println!("  Description: {}", meta.description);
    println!("  Examples:    {}", meta.examples);
    println!("  Syllables:   {}", dictionary.pinyin_table.len());
    println!("  Items:       {}", dictionary.items.len());

    if dictionary.items.is_empty() {
        println!("  WARNING: no vocabulary items recovered");
        return;
    }
    if preview > 0 {
        println!("  Preview:");
        for item in dictionary.items.iter().take(preview) {
            println!("    {:<10} {:<30} {}", item.word, item.pinyin, item.frequency);
        }
    }
}

fn write_output(path: &Path, items: &[VocabularyItem]) -> Result<()> {
    let written = export::write_file(path, items)
        .with_context(|| format!("failed to write {}", path.display()))?;
    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    println!("\nWrote {} items ({} KiB) to {}", written, size / 1024, path.display());
    println!("Import with:");
    println!("  {} \"{}\"", IMPORT_COMMAND, absolute.display());
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
