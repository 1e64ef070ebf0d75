//! untoc CLI - document outline inference tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use untoc::{
    outline_file, pick_heading_levels, JsonFormat, JsonSpanFile, OutlineOptions, SizeHistogram,
    SpanSource,
};

#[derive(Parser)]
#[command(name = "untoc")]
#[command(version)]
#[command(about = "Infer document outlines (title + H1-H3) from span dumps", long_about = None)]
struct Cli {
    /// Minimum heading text length in characters
    #[arg(long, global = true, default_value = "2")]
    min_heading_len: usize,

    /// Lower bound of the valid font size band
    #[arg(long, global = true, default_value = "6.0")]
    font_size_min: f32,

    /// Upper bound of the valid font size band
    #[arg(long, global = true, default_value = "80.0")]
    font_size_max: f32,

    /// Fraction of first-page height forming the title top band
    #[arg(long, global = true, default_value = "0.30")]
    top_band: f32,

    /// Emit zero-based page numbers
    #[arg(long, global = true)]
    zero_based: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the outline of a single span dump
    Outline {
        /// Input span dump file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Process every span dump in a directory
    Batch {
        /// Input directory of span dumps
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory for outline files
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show span dump statistics
    Info {
        /// Input span dump file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let options = build_options(&cli);
    let result = match cli.command {
        Commands::Outline {
            ref input,
            ref output,
            compact,
        } => cmd_outline(input, output.as_deref(), compact, &options),
        Commands::Batch {
            ref input,
            ref output,
            compact,
        } => cmd_batch(input, output, compact, &options),
        Commands::Info { ref input } => cmd_info(input, &options),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(cli: &Cli) -> OutlineOptions {
    let mut options = OutlineOptions::new()
        .with_min_heading_len(cli.min_heading_len)
        .with_size_band(cli.font_size_min, cli.font_size_max)
        .with_top_band_frac(cli.top_band);
    if cli.zero_based {
        options = options.zero_based();
    }
    options
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &OutlineOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = outline_file(input, options)?;
    let json = untoc::to_json(&result, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    compact: bool,
    options: &OutlineOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Processing {}...", input.display()));

    let summary = untoc::process_dir(input, output, options, json_format(compact))?;
    pb.finish_and_clear();

    println!(
        "{} {} document(s) -> {}",
        "Done!".green().bold(),
        summary.succeeded(),
        output.display()
    );

    if !summary.is_clean() {
        println!();
        for failure in &summary.failures {
            println!(
                "  {} {}: {}",
                "✗".red(),
                failure.path.display(),
                failure.error
            );
        }
        return Err(format!("{} document(s) failed", summary.failures.len()).into());
    }

    Ok(())
}

fn cmd_info(input: &Path, options: &OutlineOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = JsonSpanFile::new(input).read_document()?;
    let histogram = SizeHistogram::collect(&doc, options);
    let levels = pick_heading_levels(&histogram);
    let result = untoc::extract_outline(&doc, options);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Spans".bold(), doc.span_count());
    println!("{}: {}", "Distinct sizes".bold(), histogram.distinct_sizes());

    let tier = |key: Option<untoc::analyze::SizeKey>| match key {
        Some(k) => format!("{:.1}pt", untoc::analyze::key_to_points(k)),
        None => "-".to_string(),
    };
    println!(
        "{}: H1={} H2={} H3={}",
        "Tiers".bold(),
        tier(levels.h1),
        tier(levels.h2),
        tier(levels.h3)
    );

    println!();
    println!("{}", "Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Title".bold(), result.title);
    println!("{}: {}", "Headings".bold(), result.outline.len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "untoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document outline inference tool");
}
