use std::path::PathBuf;

use clap::Parser;
use labelgif::{BatchConfig, FontChain, Manifest, PairOutcome, PairReport, ResolvedFont};

#[derive(Parser, Debug)]
#[command(
    name = "labelgif",
    version,
    about = "Label before/after screenshot pairs and write them as looping GIFs"
)]
struct Cli {
    /// JSON manifest overriding the built-in pair list, directories and fonts.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Directory holding the screenshots.
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// Directory the GIFs are written to (created if missing).
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Display time of each frame in milliseconds.
    #[arg(long)]
    duration_ms: Option<u32>,

    /// Font file to probe for labels; repeat to build an ordered list.
    #[arg(long = "font", value_name = "PATH")]
    fonts: Vec<PathBuf>,

    /// Print which font the label font chain resolves to.
    #[arg(long)]
    dump_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = build_config(&cli)?;

    if cli.dump_fonts {
        dump_font_diagnostics(&cfg.fonts);
    }

    println!("Creating GIF animations...");
    println!("Source: {}", cfg.source_dir.display());
    println!("Output: {}", cfg.output_dir.display());
    println!();

    let report = labelgif::run_batch_with(&cfg, print_pair)?;

    println!();
    println!(
        "Successfully created {}/{} GIF files.",
        report.succeeded(),
        report.total()
    );
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<BatchConfig> {
    let mut cfg = BatchConfig::default();
    if let Some(path) = &cli.manifest {
        cfg = cfg.with_manifest(Manifest::load(path)?);
    }
    if let Some(dir) = &cli.source_dir {
        cfg.source_dir = dir.clone();
    }
    if let Some(dir) = &cli.out_dir {
        cfg.output_dir = dir.clone();
    }
    if let Some(ms) = cli.duration_ms {
        cfg.frame_duration_ms = ms;
    }
    if !cli.fonts.is_empty() {
        cfg.fonts = FontChain::new(cli.fonts.iter().cloned());
    }
    Ok(cfg)
}

fn print_pair(report: &PairReport) {
    let d = &report.descriptor;
    match &report.outcome {
        PairOutcome::Created { .. } => println!("✓ Created: {}", d.output),
        PairOutcome::MissingBefore { .. } => println!("✗ Before image not found: {}", d.before),
        PairOutcome::MissingAfter { .. } => println!("✗ After image not found: {}", d.after),
        PairOutcome::Failed { error, .. } => {
            eprintln!("✗ Error creating {}: {error}", d.output);
            if let Some(causes) = cause_chain(error) {
                eprintln!("{causes}");
            }
        }
    }
}

/// The `Caused by:` section for `err`, or `None` when it has no source.
fn cause_chain(err: &(dyn std::error::Error + 'static)) -> Option<String> {
    let mut source = err.source()?;
    let mut out = String::from("Caused by:");
    let mut i = 0usize;
    loop {
        out.push_str(&format!("\n    {i}: {source}"));
        match source.source() {
            Some(next) => source = next,
            None => break,
        }
        i += 1;
    }
    Some(out)
}

fn dump_font_diagnostics(fonts: &FontChain) {
    eprintln!("label font diagnostics:");
    for (i, path) in fonts.candidates().iter().enumerate() {
        let state = if path.exists() { "present" } else { "missing" };
        eprintln!("  candidate {i}: {} ({state})", path.display());
    }
    let mut engine = labelgif::TextLayoutEngine::new();
    match fonts.resolve(&mut engine) {
        ResolvedFont::Outline(font) => {
            eprintln!("  resolved:    {}", font.path().display());
            eprintln!("  family:      {}", font.family());
            eprintln!("  bytes:       {}", font.bytes().len());
        }
        ResolvedFont::Builtin => eprintln!("  resolved:    builtin bitmap font"),
    }
}
