mod logger;

use anyhow::Result;
use clap::Parser;
use pdf_eurion::{EurionError, EurionOptions, OverlayStatistics, constants};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfe",
    about = "Overlay a PDF with tiled Eurion constellations to discourage photocopying",
    version
)]
struct Cli {
    /// Input PDF file
    #[arg(short, long)]
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long, required_unless_present = "stats_only")]
    output: Option<PathBuf>,

    /// Hex color of the constellation dots (e.g. A0A0A0 or #A0A0A0)
    #[arg(short, long, default_value = constants::DEFAULT_COLOR_HEX)]
    color: String,

    /// Horizontal density (approximate constellations across the width).
    /// Also accepted as --dx or -dx
    #[arg(long, alias = "dx", default_value_t = constants::DEFAULT_DENSITY_X)]
    density_x: u32,

    /// Vertical density (approximate constellations along the height).
    /// Also accepted as --dy or -dy
    #[arg(long, alias = "dy", default_value_t = constants::DEFAULT_DENSITY_Y)]
    density_y: u32,

    /// Size of each constellation in points
    #[arg(short, long, default_value_t = constants::DEFAULT_MOTIF_SIZE)]
    size: u32,

    /// Opacity of the constellations (0.0 fully transparent, 1.0 fully opaque)
    #[arg(short, long, default_value_t = constants::DEFAULT_OPACITY, allow_negative_numbers = true)]
    transparency: f64,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Rewrite the single-dash `-dx`/`-dy` spellings (including `-dx=N`) to
/// their `--dx`/`--dy` aliases so older invocations keep working.
fn normalize_legacy_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if is_legacy_density_flag(s) => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

fn is_legacy_density_flag(arg: &str) -> bool {
    ["-dx", "-dy"].iter().any(|flag| {
        arg.strip_prefix(flag)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    logger::StderrLogger::from_verbosity(cli.verbose).init()?;

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<EurionError>() {
            Some(e) if e.is_validation() || is_missing_file(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            _ => Err(err),
        },
    }
}

fn is_missing_file(err: &EurionError) -> bool {
    matches!(err, EurionError::Io(io) if io.kind() == std::io::ErrorKind::NotFound)
}

fn run(cli: &Cli) -> Result<()> {
    let options = EurionOptions {
        color: pdf_eurion::parse_hex_color(&cli.color)?,
        density_x: cli.density_x,
        density_y: cli.density_y,
        size: f64::from(cli.size),
        opacity: cli.transparency,
    };
    options.validate()?;

    if cli.stats_only {
        let source = pdf_eurion::load_pdf(&cli.input)?;
        let stats = pdf_eurion::calculate_statistics(&source, &options)?;
        if cli.json {
            print_json(cli, &options, &stats)?;
        } else {
            print_statistics(&stats);
        }
        return Ok(());
    }

    let Some(output) = &cli.output else {
        anyhow::bail!("--output is required unless --stats-only is given");
    };

    let stats = pdf_eurion::overlay_file(&cli.input, output, &options)?;

    if cli.json {
        print_json(cli, &options, &stats)?;
    } else {
        println!(
            "Processed file saved as {} with Eurion color #{}, horizontal density {}, vertical density {}, size {}, and transparency {}",
            output.display(),
            options.color.to_hex(),
            options.density_x,
            options.density_y,
            cli.size,
            options.opacity
        );
    }

    Ok(())
}

fn print_statistics(stats: &OverlayStatistics) {
    println!("Overlay Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    if let (Some(min), Some(max)) = (
        stats.motifs_per_page.iter().min(),
        stats.motifs_per_page.iter().max(),
    ) {
        if min == max {
            println!("  Constellations per page: {}", min);
        } else {
            println!("  Constellations per page: {}-{}", min, max);
        }
    }
    println!("  Total constellations: {}", stats.total_motifs);
    println!("  Total dots: {}", stats.total_dots);
}

fn print_json(cli: &Cli, options: &EurionOptions, stats: &OverlayStatistics) -> Result<()> {
    let summary = serde_json::json!({
        "input": cli.input,
        "output": cli.output,
        "color": options.color.to_hex(),
        "options": options,
        "statistics": stats,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
