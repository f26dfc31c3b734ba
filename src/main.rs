use anyhow::Result;
use bolt_icons::{icon_gen, render::Gradient};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "bolt-icons",
    about = "Generate gradient lightning-bolt icons for a browser extension"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// Icon sizes to generate, in pixels.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = [16, 48, 128]
    )]
    sizes: Vec<u32>,

    /// Gradient start color (CSS color format)
    #[clap(long, default_value = "#667eea")]
    top_color: String,

    /// Gradient end color (CSS color format)
    #[clap(long, default_value = "#764ba2")]
    bottom_color: String,

    /// Lightning bolt color (CSS color format)
    #[clap(long, default_value = "#ffffff")]
    bolt_color: String,

    /// Direction of the background gradient
    #[clap(long, value_enum, default_value_t = GradientArg::Vertical)]
    gradient: GradientArg,

    /// Also bundle every size into favicon.ico
    #[clap(long)]
    ico: bool,

    /// Also write icons.json for the extension manifest
    #[clap(long)]
    manifest: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GradientArg {
    Vertical,
    Diagonal,
}

impl From<GradientArg> for Gradient {
    fn from(arg: GradientArg) -> Self {
        match arg {
            GradientArg::Vertical => Gradient::Vertical,
            GradientArg::Diagonal => Gradient::Diagonal,
        }
    }
}

impl From<Args> for icon_gen::Args {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            sizes: args.sizes,
            top_color: args.top_color,
            bottom_color: args.bottom_color,
            bolt_color: args.bolt_color,
            gradient: args.gradient.into(),
            ico: args.ico,
            manifest: args.manifest,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(args.into())
}
