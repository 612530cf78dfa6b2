use anyhow::{bail, Context};
use cardtrip_canvas::{svg, CardCanvas, CardPaint};
use cardtrip_rs::{CardAttributes, CardKind, CornerStyle};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Png,
    Svg,
}

/// cardtrip: A utility for rendering card outlines with rounded, cut or notched corners
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Card kind. One of special, trip-header, trip-content
    #[clap(short, long, default_value = "special")]
    pub kind: CardKind,

    /// Card width in pixels
    #[clap(short = 'W', long)]
    pub width: f32,

    /// Card height in pixels
    #[clap(short = 'H', long)]
    pub height: f32,

    /// Path to a JSON file with card attributes
    #[clap(short, long)]
    pub attributes: Option<PathBuf>,

    /// Radius shared by every corner (overrides cornerValue)
    #[clap(long)]
    pub corner_value: Option<f32>,

    /// Style shared by every corner (overrides allCornerType). One of rounded, curve, cut
    #[clap(long)]
    pub corner_type: Option<CornerStyle>,

    /// Border color as a CSS color string (overrides borderColor)
    #[clap(long)]
    pub border_color: Option<String>,

    /// Path to the output file. The format follows the extension unless --format is given
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[clap(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pixels per inch written to PNG metadata
    #[clap(long, default_value_t = 72.0)]
    pub ppi: f32,

    /// Print the outline as SVG path data on stdout
    #[clap(long)]
    pub print_path: bool,

    /// Enable debug logging
    #[clap(short, long)]
    pub verbose: bool,
}

fn main() {
    let args: Args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("cardtrip: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut attributes = match &args.attributes {
        Some(path) => read_attributes(path)?,
        None => CardAttributes::default(),
    };
    if let Some(value) = args.corner_value {
        attributes.corner_value = Some(value);
    }
    if let Some(style) = args.corner_type {
        attributes.all_corner_type = Some(style.ordinal());
    }
    if let Some(color) = &args.border_color {
        attributes.border_color = Some(color.clone());
    }

    let spec = attributes
        .resolve(args.kind, args.width, args.height)
        .context("Invalid card attributes")?;
    let path = spec.build_path();
    log::info!(
        "built {} outline: {} commands",
        spec.kind(),
        path.commands().len()
    );

    if args.print_path {
        println!("{}", path.to_svg_path_data());
    }

    let Some(output) = &args.output else {
        if !args.print_path {
            bail!("Nothing to do: pass --output and/or --print-path");
        }
        return Ok(());
    };

    let paint = CardPaint::for_spec(&spec);
    match output_format(output, args.format)? {
        OutputFormat::Png => {
            let mut canvas =
                CardCanvas::new(spec.width().ceil() as u32, spec.height().ceil() as u32)?;
            canvas.draw_card(&path, &paint)?;
            let png_data = canvas.to_png(Some(args.ppi))?;
            std::fs::write(output, png_data)
                .with_context(|| format!("Failed to write output to {}", output.display()))?;
        }
        OutputFormat::Svg => {
            let doc = svg::card_document(&path, &paint, spec.width(), spec.height());
            std::fs::write(output, doc)
                .with_context(|| format!("Failed to write output to {}", output.display()))?;
        }
    }
    log::info!("wrote {}", output.display());
    Ok(())
}

fn read_attributes(path: &Path) -> anyhow::Result<CardAttributes> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read attributes file: {}", path.display()))?;
    CardAttributes::from_json(&text)
        .with_context(|| format!("Failed to parse attributes file: {}", path.display()))
}

fn output_format(path: &Path, explicit: Option<OutputFormat>) -> anyhow::Result<OutputFormat> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => Ok(OutputFormat::Png),
        Some("svg") => Ok(OutputFormat::Svg),
        _ => bail!(
            "Cannot infer output format from {}; pass --format png or --format svg",
            path.display()
        ),
    }
}
