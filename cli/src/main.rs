//! unxd CLI - XD container inspection tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unxd::render::{self, JsonFormat};
use unxd::{Error, ParseOptions, XdFile};

#[derive(Parser)]
#[command(name = "unxd")]
#[command(version)]
#[command(about = "Inspect XD design containers: artboards, JSON export and assets", long_about = None)]
struct Cli {
    #[command(flatten)]
    load: LoadArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LoadArgs {
    /// Load artboards in parallel
    #[arg(long, global = true, env = "UNXD_PARALLEL")]
    parallel: bool,

    /// Reject containers whose mimetype entry names another format
    #[arg(long, global = true)]
    check_mime: bool,
}

impl LoadArgs {
    fn options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_parallel(self.parallel)
            .with_mime_check(self.check_mime)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show artboards and load statistics
    Info {
        /// Input container
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the loaded graph as JSON
    Json {
        /// Input container
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract pattern-fill assets
    Extract {
        /// Input container
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.load.options();

    let result = match cli.command {
        Commands::Info { input, json } => cmd_info(&input, options, json),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, options, output.as_deref(), compact),
        Commands::Extract { input, output } => cmd_extract(&input, options, output.as_deref()),
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

fn load(input: &Path, options: ParseOptions) -> Result<XdFile, Error> {
    log::info!("Loading {}", input.display());
    unxd::parse_file_with_options(input, options)
}

fn cmd_info(
    input: &Path,
    options: ParseOptions,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = load(input, options)?;
    let summary = render::summarize(&file);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Container Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref name) = summary.name {
        println!("{}: {}", "Name".bold(), name);
    }
    println!("{}: {}", "Artboards".bold(), summary.artboard_count);

    println!();
    println!("{}", "Artboards".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (i, artboard) in summary.artboards.iter().enumerate() {
        let branch = if i + 1 == summary.artboards.len() {
            "└─"
        } else {
            "├─"
        };
        let detail = format!(
            "[{}] {} nodes",
            artboard.path.as_deref().unwrap_or_default(),
            artboard.object_count
        );
        println!(
            "  {} {} {}",
            branch.dimmed(),
            artboard.name.as_deref().unwrap_or("(unnamed)").bold(),
            detail.as_str().dimmed()
        );
        if let (Some(width), Some(height)) = (artboard.width, artboard.height) {
            println!("     {}x{}", width, height);
        }
    }

    println!();
    println!("{}", "Load Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "{}: {}",
        "Resources decoded".bold(),
        summary.stats.resources_decoded
    );
    println!("{}: {}", "Cache hits".bold(), summary.stats.cache_hits);

    Ok(())
}

fn cmd_json(
    input: &Path,
    options: ParseOptions,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = load(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&file, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_extract(
    input: &Path,
    options: ParseOptions,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = load(input, options)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let metas = file.pattern_metas();
    let pb = ProgressBar::new(metas.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut extracted = 0;
    let mut missing = Vec::new();
    for meta in metas {
        let uid = meta.uid().unwrap_or_default();
        pb.set_message(uid.to_string());

        match file.resource_bytes(Some(meta)) {
            Ok(Some(bytes)) => {
                fs::write(output_dir.join(asset_file_name(uid)), bytes)?;
                extracted += 1;
            }
            Ok(None) => {}
            Err(Error::ResourceMissing(uid)) => missing.push(uid),
            Err(e) => return Err(e.into()),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    for uid in &missing {
        println!("{} {}", "Missing".yellow(), uid);
    }
    println!(
        "\n{} {} assets extracted to {}",
        "Done!".green().bold(),
        extracted,
        output_dir.display()
    );

    Ok(())
}

/// Content ids are opaque; keep them from escaping the output directory.
fn asset_file_name(uid: &str) -> String {
    uid.replace(['/', '\\'], "_")
}

fn cmd_version() {
    println!("{} {}", "unxd".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("XD design container inspection tool");
    println!();
    println!("License: MIT");
}
