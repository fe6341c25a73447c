use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pwaicons",
    version,
    about = "Generate PWA, Apple touch and favicon icons from one source image"
)]
pub struct CliArgs {
    /// Source image (default: logo.png)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory, created if missing (default: public)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON config file with `source`, `output_dir` and `manifest` keys.
    /// Flags given on the command line take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write icons.json (web app manifest `icons` entries)
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
