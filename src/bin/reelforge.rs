use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reelforge", version)]
struct Cli {
    /// Log debug events to stderr (overrides RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a template and print the render tree as JSON.
    Compose(ComposeCmd),
    /// Evaluate one frame and print its layers as JSON.
    Frame(FrameArgs),
    /// Print one fingerprint per frame.
    Digest(DigestArgs),
    /// Report template and fill diagnostics.
    Lint(LintArgs),
    /// Write a grain tile as a grayscale PNG.
    Grain(GrainArgs),
}

#[derive(Args, Debug)]
struct ComposeArgs {
    /// Template JSON.
    #[arg(long)]
    template: PathBuf,

    /// Slot fills JSON (array or `{"fills": [...]}`).
    #[arg(long)]
    fills: Option<PathBuf>,

    /// Music track URL.
    #[arg(long)]
    music: Option<String>,

    /// Compose options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the frame rate (integral fps).
    #[arg(long)]
    fps: Option<u32>,

    /// Show slot placeholder text for unfilled text slots.
    #[arg(long, default_value_t = false)]
    placeholders: bool,
}

#[derive(Parser, Debug)]
struct ComposeCmd {
    #[command(flatten)]
    compose: ComposeArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    compose: ComposeArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DigestArgs {
    #[command(flatten)]
    compose: ComposeArgs,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluation chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct LintArgs {
    /// Template JSON.
    #[arg(long)]
    template: PathBuf,

    /// Slot fills JSON to check against the template.
    #[arg(long)]
    fills: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GrainArgs {
    /// Frame whose grain phase to draw.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Grain cell size in pixels.
    #[arg(long, default_value_t = 2)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Digest(args) => cmd_digest(args),
        Command::Lint(args) => cmd_lint(args),
        Command::Grain(args) => cmd_grain(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_compose(args: ComposeCmd) -> anyhow::Result<()> {
    let tree = compose_from_args(&args.compose)?;
    write_json(args.out.as_deref(), &tree)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let tree = compose_from_args(&args.compose)?;
    let frame = tree.evaluate_frame(reelforge::FrameIndex(args.frame))?;
    write_json(args.out.as_deref(), &frame)
}

fn cmd_digest(args: DigestArgs) -> anyhow::Result<()> {
    let tree = compose_from_args(&args.compose)?;
    if tree.duration_frames == 0 {
        eprintln!("composition has no frames");
        return Ok(());
    }
    let threading = reelforge::EvalThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let frames = reelforge::evaluate_range(&tree, tree.range(), &threading)?;
    for frame in &frames {
        println!(
            "{} {} {}",
            frame.frame.0,
            frame.scene_id,
            reelforge::fingerprint_frame(frame)
        );
    }
    Ok(())
}

fn cmd_lint(args: LintArgs) -> anyhow::Result<()> {
    let template = reelforge::TemplateSchema::from_path(&args.template)?;
    if let Err(e) = reelforge::validate_template(&template) {
        println!("error: {e}");
    }

    let mut count = 0usize;
    for issue in reelforge::lint_template(&template) {
        println!("template {issue}");
        count += 1;
    }
    if let Some(path) = &args.fills {
        let fills = load_fills(path)?;
        for issue in reelforge::lint_fills(&template, &fills) {
            println!("fills {issue}");
            count += 1;
        }
    }
    eprintln!("{count} issue(s)");
    Ok(())
}

fn cmd_grain(args: GrainArgs) -> anyhow::Result<()> {
    let tile =
        reelforge::GrainTile::for_phase(args.frame % reelforge::GRAIN_CYCLE_FRAMES, args.size);
    create_parent_dir(&args.out)?;
    tile.to_image()
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {} ({}x{})", args.out.display(), tile.width(), tile.height());
    Ok(())
}

fn compose_from_args(args: &ComposeArgs) -> anyhow::Result<reelforge::RenderTree> {
    let mut opts = match &args.config {
        Some(path) => reelforge::ComposeOpts::from_path(path)?,
        None => reelforge::ComposeOpts::default(),
    };
    if let Some(fps) = args.fps {
        opts.fps = reelforge::Fps::integral(fps)?;
    }
    if args.placeholders {
        opts.placeholder_previews = true;
    }

    let template = reelforge::TemplateSchema::from_path(&args.template)?;
    let fills = match &args.fills {
        Some(path) => load_fills(path)?,
        None => Vec::new(),
    };
    Ok(reelforge::compose(
        Some(&template),
        &fills,
        args.music.as_deref(),
        &opts,
    )?)
}

fn load_fills(path: &Path) -> anyhow::Result<Vec<reelforge::SlotFill>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read fills '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse fills '{}'", path.display()))?;
    Ok(reelforge::fills_from_json_value(value)?)
}

fn write_json(out: Option<&Path>, value: &impl serde::Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            create_parent_dir(path)?;
            std::fs::write(path, json + "\n")
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
