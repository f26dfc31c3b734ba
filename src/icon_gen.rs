use crate::manifest::{icon_filename, write_icon_manifest};
use crate::render::{render_icon, Gradient, IconStyle};
use anyhow::{Context, Result};
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::PngEncoder,
    },
    ColorType, DynamicImage, ImageEncoder, Rgb, RgbImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Sizes rendered when none are requested
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Largest frame an ICO directory entry can describe
const MAX_ICO_SIZE: u32 = 256;

#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub top_color: String,
    pub bottom_color: String,
    pub bolt_color: String,
    pub gradient: Gradient,
    pub ico: bool,
    pub manifest: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("./icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            top_color: "#667eea".to_string(),
            bottom_color: "#764ba2".to_string(),
            bolt_color: "#ffffff".to_string(),
            gradient: Gradient::Vertical,
            ico: false,
            manifest: false,
        }
    }
}

pub fn generate_icons(args: Args) -> Result<()> {
    validate_sizes(&args.sizes, args.ico)?;
    let style = build_style(&args)?;

    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    let mut rendered = Vec::with_capacity(args.sizes.len());
    for &size in &args.sizes {
        let icon = render_icon(size, &style);
        let filename = icon_filename(size);
        save_png(&icon, &args.output.join(&filename))?;
        println!("✓ Created {filename}");
        rendered.push(icon);
    }

    if args.ico {
        generate_ico(&rendered, &args.output)?;
    }

    if args.manifest {
        let prefix = args
            .output
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        write_icon_manifest(&args.output, prefix, &args.sizes)?;
    }

    println!("All icons generated successfully!");
    Ok(())
}

fn validate_sizes(sizes: &[u32], ico: bool) -> Result<()> {
    if sizes.is_empty() {
        anyhow::bail!("At least one icon size is required");
    }

    if sizes.contains(&0) {
        anyhow::bail!("Icon sizes must be positive");
    }

    if ico {
        if let Some(size) = sizes.iter().find(|&&size| size > MAX_ICO_SIZE) {
            anyhow::bail!("ICO frames can't exceed {MAX_ICO_SIZE}x{MAX_ICO_SIZE}, got {size}");
        }
    }

    Ok(())
}

fn build_style(args: &Args) -> Result<IconStyle> {
    Ok(IconStyle {
        top: parse_color(&args.top_color)?,
        bottom: parse_color(&args.bottom_color)?,
        bolt: parse_color(&args.bolt_color)?,
        gradient: args.gradient,
    })
}

/// Parse a CSS color string into an opaque RGB pixel
pub fn parse_color(color: &str) -> Result<Rgb<u8>> {
    let to_channel = |value: f32| (value * 255.).round().clamp(0., 255.) as u8;

    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                to_channel(color.red),
                to_channel(color.green),
                to_channel(color.blue),
            ])
        })
        .map_err(|_| anyhow::anyhow!("Invalid color: {color}"))
}

/// Bundle every rendered size into `favicon.ico`
fn generate_ico(icons: &[RgbImage], out_dir: &Path) -> Result<()> {
    let mut frames = Vec::with_capacity(icons.len());

    for icon in icons {
        let size = icon.width();
        let rgba_image = DynamicImage::ImageRgb8(icon.clone()).to_rgba8();

        // Each entry is stored as an embedded PNG
        frames.push(IcoFrame::as_png(
            rgba_image.as_raw(),
            size,
            size,
            ColorType::Rgba8,
        )?);
    }

    let mut out_file = BufWriter::new(
        File::create(out_dir.join("favicon.ico")).context("Failed to create favicon.ico")?,
    );
    let encoder = IcoEncoder::new(&mut out_file);
    encoder
        .encode_images(&frames)
        .context("Failed to encode favicon.ico")?;
    out_file.flush()?;

    println!("✓ Created favicon.ico");
    Ok(())
}

/// Write an RGB bitmap as a PNG file, replacing any existing file
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    PngEncoder::new(&mut out_file)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ColorType::Rgb8,
        )
        .context("Failed to write PNG")?;
    out_file.flush()?;
    Ok(())
}
