use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "favsquare", version)]
struct Cli {
    /// Input image (any format the `image` crate can decode).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path (overwritten if it exists).
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    favsquare::normalize(&cli.in_path, &cli.out)?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
