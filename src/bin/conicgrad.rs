use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "conicgrad", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a gradient definition to a PNG.
    Render(RenderArgs),
    /// Validate a gradient definition without rendering.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input gradient definition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Attribute override `name=value`, applied in order after loading (e.g. `angle=45`).
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    attrs: Vec<String>,

    /// Split rows across worker threads.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print the SHA-256 of the raw RGBA buffer.
    #[arg(long, default_value_t = false)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input gradient definition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Attribute override `name=value`, applied in order after loading.
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    attrs: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_def(path: &Path, attrs: &[String]) -> anyhow::Result<conicgrad::GradientDef> {
    let mut def = conicgrad::GradientDef::from_path(path)
        .with_context(|| format!("load gradient '{}'", path.display()))?;
    for attr in attrs {
        let (name, value) = attr
            .split_once('=')
            .with_context(|| format!("attribute override '{attr}' must be NAME=VALUE"))?;
        def = def
            .with_attribute(name.trim(), value)
            .with_context(|| format!("apply attribute '{name}'"))?;
    }
    Ok(def)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let def = load_def(&args.in_path, &args.attrs)?;
    let config = def.build().context("build gradient")?;

    let threading = conicgrad::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let buffer = conicgrad::render_with(&config, &threading)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &buffer.data,
        buffer.width,
        buffer.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.digest {
        let digest = sha2::Sha256::digest(&buffer.data);
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        println!("{hex}");
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let def = load_def(&args.in_path, &args.attrs)?;
    let config = def.build().context("build gradient")?;
    let canvas = config.canvas();
    eprintln!(
        "ok: {}x{} canvas, {} stops",
        canvas.width,
        canvas.height,
        config.stops().len()
    );
    Ok(())
}
