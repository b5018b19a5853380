use anyhow::Context;
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use listsift::{filter_stream, FilterConfig, SuffixSet};

#[derive(Parser)]
#[command(name = "listsift")]
#[command(about = "Filter path list files by suffix patterns")]
#[command(version)]
struct Args {
    /// Input list file (one path per line)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file for matching lines (created or overwritten)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Suffix to match (repeatable; a line is kept if it ends with any)
    #[arg(short = 'p', long = "pattern", value_name = "SUFFIX", action = ArgAction::Append)]
    patterns: Vec<String>,

    /// Debug mode - show processing details
    #[arg(long)]
    debug: bool,

    /// Maximum line length
    #[arg(long, default_value = "1048576")] // 1MB
    max_line_length: usize,

    /// Buffer size for I/O
    #[arg(long, default_value = "65536")] // 64KB
    buffer_size: usize,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("listsift: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = FilterConfig {
        debug: args.debug,
        buffer_size: args.buffer_size,
        max_line_length: args.max_line_length,
    };

    let patterns: SuffixSet = args.patterns.iter().cloned().collect();

    if args.debug && patterns.is_empty() {
        eprintln!("listsift: no patterns given, output will be empty");
    }

    let input = File::open(&args.input)
        .with_context(|| format!("failed to open input file '{}'", args.input.display()))?;
    let mut reader = BufReader::with_capacity(config.buffer_size, input);

    let output = File::create(&args.output)
        .with_context(|| format!("failed to create output file '{}'", args.output.display()))?;
    let mut writer = BufWriter::with_capacity(config.buffer_size, output);

    let stats = filter_stream(&mut reader, &mut writer, &patterns, &config)
        .with_context(|| format!("failed to filter '{}'", args.input.display()))?;

    writer.flush()?;

    if args.debug {
        eprintln!("Final statistics:");
        eprintln!("  Lines read: {}", stats.lines_read);
        eprintln!("  Lines matched: {}", stats.lines_matched);
        eprintln!("  Processing time: {:?}", stats.processing_time);

        if stats.lines_read > 0 {
            let rate = stats.lines_read as f64 / stats.processing_time.as_secs_f64();
            eprintln!("  Processing rate: {:.0} lines/second", rate);
        }
    }

    Ok(())
}
