use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slidetype::{
    AspectRatio, BackgroundImage, BrandStyle, CompositeRequest, Engine, EngineOpts, ImageMime,
    LayoutId, SlideText,
};

#[derive(Parser, Debug)]
#[command(name = "slidetype", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite one slide and write the PNG.
    Render(RenderArgs),
    /// Write the text layer as SVG, without rasterizing.
    Svg(SvgArgs),
    /// List the layout catalog.
    Layouts,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Job JSON describing the slide.
    #[arg(long)]
    job: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Engine options JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Job JSON describing the slide.
    #[arg(long)]
    job: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

/// On-disk job. `background` is resolved relative to the job file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct Job {
    #[serde(default)]
    background: Option<PathBuf>,
    #[serde(default)]
    background_mime: Option<ImageMime>,
    slide: SlideText,
    #[serde(default)]
    brand: BrandStyle,
    #[serde(default)]
    aspect_ratio: AspectRatio,
    #[serde(default)]
    layout: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Layouts => cmd_layouts(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read {what} '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {what} '{}'", path.display()))
}

fn load_request(job_path: &Path, with_background: bool) -> anyhow::Result<CompositeRequest> {
    let job: Job = read_json(job_path, "job")?;
    let root = job_path.parent().unwrap_or_else(|| Path::new("."));

    let background = match (&job.background, with_background) {
        (Some(rel), true) => {
            let path = root.join(rel);
            let bytes = std::fs::read(&path)
                .with_context(|| format!("read background '{}'", path.display()))?;
            let mime = job.background_mime.or_else(|| mime_from_extension(&path));
            BackgroundImage::new(bytes, mime)
        }
        (None, true) => anyhow::bail!("job '{}' has no background", job_path.display()),
        (_, false) => BackgroundImage::default(),
    };

    let mut req = CompositeRequest::new(background, job.slide)
        .with_brand(job.brand)
        .with_aspect_ratio(job.aspect_ratio);
    if let Some(layout) = job.layout {
        req = req.with_layout(layout);
    }
    Ok(req)
}

fn mime_from_extension(path: &Path) -> Option<ImageMime> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some(ImageMime::Png),
        "jpg" | "jpeg" => Some(ImageMime::Jpeg),
        "webp" => Some(ImageMime::Webp),
        _ => None,
    }
}

fn create_parent(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let opts: EngineOpts = match &args.config {
        Some(path) => read_json(path, "config")?,
        None => EngineOpts::default(),
    };
    let engine = Engine::new(opts)?;
    let req = load_request(&args.job, true)?;
    let result = engine.composite(&req)?;

    create_parent(&args.out)?;
    std::fs::write(&args.out, &result.bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{}, {})",
        args.out.display(),
        result.width,
        result.height,
        result.mime
    );
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let engine = Engine::new(EngineOpts {
        load_system_fonts: false,
        ..EngineOpts::default()
    })?;
    let req = load_request(&args.job, false)?;
    let svg = engine.render_svg(&req)?;

    create_parent(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_layouts() -> anyhow::Result<()> {
    for id in LayoutId::ALL {
        let kind = if id.entry().is_parametric() {
            "parametric"
        } else {
            "bespoke"
        };
        println!("{:<20} {:<10} {kind}", id.as_str(), id.category().as_str());
    }
    Ok(())
}
