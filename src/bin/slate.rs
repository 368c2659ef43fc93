use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "slate", version, about = "Export static video overlay cards as PNGs")]
struct Cli {
    /// Output directory for the exported PNGs.
    #[arg(long, default_value = slate::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// JSON file holding an array of overlay specs, replacing the built-in
    /// title/lower-third/end-card set.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file probed before the built-in candidate list.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let specs: Vec<slate::OverlaySpec> = match &cli.config {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read overlay config '{}'", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parse overlay config '{}'", path.display()))?
        }
        None => slate::builtin_overlays(),
    };

    let candidates: Vec<PathBuf> = cli
        .font
        .into_iter()
        .chain(slate::DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from))
        .collect();

    let written = slate::export_overlays(&specs, &cli.out_dir, &candidates)?;
    println!("exported {} overlays to '{}'", written.len(), cli.out_dir.display());
    Ok(())
}
