use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use textfx::{Effect, FontResolver, FrameThreading, RenderOptions, Renderer, Service, ServiceConfig};

#[derive(Parser, Debug)]
#[command(name = "textfx", version)]
struct Cli {
    /// Font file tried before the system fonts.
    #[arg(long, env = "TEXTFX_FONT", global = true)]
    font: Option<PathBuf>,

    /// Render animation frames in parallel.
    #[arg(long, env = "TEXTFX_PARALLEL_FRAMES", default_value_t = false, global = true)]
    parallel_frames: bool,

    /// Override rayon worker threads (parallel frames only).
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Frames in one animated gradient loop.
    #[arg(long, env = "TEXTFX_GRADIENT_FRAMES", global = true)]
    gradient_frames: Option<u32>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (the default).
    Serve(ServeArgs),
    /// Render one effect to a file.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Interface to bind.
    #[arg(long, env = "TEXTFX_HOST", default_value = textfx::DEFAULT_HOST)]
    host: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = textfx::DEFAULT_PORT)]
    port: u16,

    /// Request-handling threads. Defaults to the number of CPUs.
    #[arg(long)]
    workers: Option<usize>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Effect to render.
    #[arg(long, value_enum)]
    effect: EffectArg,

    /// Text to render.
    #[arg(long, default_value = textfx::DEFAULT_TEXT)]
    text: String,

    /// Output path. Defaults to the effect's download name.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EffectArg {
    Basic,
    Gradient,
    GradientGif,
    Neon,
    RainbowWave,
    Glitch,
}

impl From<EffectArg> for Effect {
    fn from(arg: EffectArg) -> Self {
        match arg {
            EffectArg::Basic => Effect::Basic,
            EffectArg::Gradient => Effect::Gradient,
            EffectArg::GradientGif => Effect::AnimatedGradient,
            EffectArg::Neon => Effect::Neon,
            EffectArg::RainbowWave => Effect::RainbowWave,
            EffectArg::Glitch => Effect::Glitch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let renderer = build_renderer(&cli)?;
    match cli.cmd {
        Some(Command::Render(args)) => cmd_render(&renderer, args),
        Some(Command::Serve(args)) => cmd_serve(renderer, args),
        None => cmd_serve(renderer, ServeArgs::parse_from(["serve"])),
    }
}

fn build_renderer(cli: &Cli) -> anyhow::Result<Renderer> {
    let mut fonts = FontResolver::default();
    if let Some(path) = &cli.font {
        fonts = fonts.prefer(path);
    }
    let threading = if cli.parallel_frames {
        FrameThreading::Parallel
    } else {
        FrameThreading::Sequential
    };
    let renderer = Renderer::new(RenderOptions {
        fonts,
        threading,
        threads: cli.threads,
        gradient_frames: cli.gradient_frames,
    })
    .context("configure renderer")?;
    tracing::info!(
        threading = ?renderer.threading(),
        gradient_frames = renderer.gradient_timing().frames,
        "renderer ready"
    );
    Ok(renderer)
}

fn cmd_serve(renderer: Renderer, args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServiceConfig {
        host: args.host,
        port: args.port,
        ..ServiceConfig::default()
    };
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    let service = Service::bind(&config, renderer).context("start http service")?;
    service.run();
    Ok(())
}

fn cmd_render(renderer: &Renderer, args: RenderArgs) -> anyhow::Result<()> {
    let effect = Effect::from(args.effect);
    let image = renderer
        .render(effect, &args.text)
        .with_context(|| format!("render {effect:?}"))?;
    let out = args.out.unwrap_or_else(|| PathBuf::from(&image.filename));
    std::fs::write(&out, &image.bytes).with_context(|| format!("write {}", out.display()))?;
    tracing::info!(path = %out.display(), bytes = image.bytes.len(), "wrote image");
    Ok(())
}
