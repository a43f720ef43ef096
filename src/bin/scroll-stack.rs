use std::{
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use scroll_stack::{
    ItemSample, ScriptedScroll, ScrollSource, SmoothScrollOptions, SmoothScroller, StackConfig,
    StackEngine, VirtualPage,
};
use tracing_subscriber::EnvFilter;

/// Upper bound on frames for a smooth-scroll run that never settles.
const MAX_SMOOTH_FRAMES: u64 = 10_000;
const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "scroll-stack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive a headless page through a scroll sweep and print one JSON line per frame.
    Simulate(SimulateArgs),
    /// Print every item's computed transform at a single scroll offset.
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Stack configuration JSON (camelCase keys; missing keys use defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cards in the section.
    #[arg(long, default_value_t = 3)]
    cards: usize,

    /// Height of each card (px).
    #[arg(long, default_value_t = 400.0)]
    card_height: f64,

    /// Viewport height (px).
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// Document-absolute top of the section (px).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    section_top: f64,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    page: PageArgs,

    /// First offset of the sweep.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    from: f64,

    /// Last offset of the sweep (defaults to the page's scroll limit).
    #[arg(long, allow_negative_numbers = true)]
    to: Option<f64>,

    /// Offset increment per frame for scripted sweeps.
    #[arg(long, default_value_t = 16.0)]
    step: f64,

    /// Use the smooth scrolling substrate instead of a fixed-step sweep.
    #[arg(long)]
    smooth: bool,
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Scroll offset to evaluate.
    #[arg(long, allow_negative_numbers = true)]
    offset: f64,
}

#[derive(serde::Serialize)]
struct FrameLine<'a> {
    frame: u64,
    offset: f64,
    writes: Vec<&'a ItemSample>,
    complete: bool,
    completed_now: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<StackConfig> {
    let Some(path) = path else {
        return Ok(StackConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    StackConfig::from_json(&s).with_context(|| format!("parse config '{}'", path.display()))
}

fn build_page(args: &PageArgs) -> VirtualPage {
    VirtualPage::new(args.section_top, args.viewport)
        .with_items(std::iter::repeat_n(args.card_height, args.cards))
}

/// Scroll limit once setup has reserved trailing space between cards.
fn mounted_scroll_limit(page: &VirtualPage, config: &StackConfig) -> f64 {
    let gaps = page.item_count().saturating_sub(1) as f64;
    page.scroll_limit() + gaps * config.item_distance
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = read_config(args.page.config.as_deref())?;
    let page = build_page(&args.page);

    let limit = mounted_scroll_limit(&page, &config);
    let to = args.to.unwrap_or(limit);

    if args.smooth {
        let source = SmoothScroller::new(SmoothScrollOptions::default(), limit)?;
        let mut engine = StackEngine::new(config, source)?;
        engine.setup(page.mount())?;
        engine.source_mut().scroll_to(args.from, true);
        engine.source_mut().scroll_to(to, false);
        drive(&mut engine, &page, MAX_SMOOTH_FRAMES, |s: &mut SmoothScroller| {
            s.offset() != s.target()
        })?;
        engine.teardown();
        return Ok(());
    }

    let source = ScriptedScroll::sweep(args.from, to, args.step);
    let frames = source.remaining() as u64;
    let mut engine = StackEngine::new(config, source)?;
    engine.setup(page.mount())?;
    drive(&mut engine, &page, frames, |s: &mut ScriptedScroll| {
        s.remaining() > 0
    })?;
    engine.teardown();
    Ok(())
}

fn drive<S: ScrollSource>(
    engine: &mut StackEngine<S>,
    page: &VirtualPage,
    max_frames: u64,
    mut keep_going: impl FnMut(&mut S) -> bool,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = page.item_count();

    for frame in 0..max_frames {
        let before: Vec<usize> = (0..count).map(|i| page.write_count(i)).collect();
        let was_complete = engine.is_stack_complete();
        if !engine.frame(frame as f64 * FRAME_MS) {
            break;
        }

        let writes = engine
            .samples()
            .iter()
            .filter(|s| page.write_count(s.index) != before[s.index])
            .collect::<Vec<_>>();
        let complete = engine.is_stack_complete();
        let line = FrameLine {
            frame,
            offset: engine.source().offset(),
            writes,
            complete,
            completed_now: complete && !was_complete,
        };
        serde_json::to_writer(&mut out, &line).context("write frame line")?;
        writeln!(out).context("write frame line")?;

        if !keep_going(engine.source_mut()) {
            break;
        }
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config = read_config(args.page.config.as_deref())?;
    let page = build_page(&args.page);

    let mut engine = StackEngine::new(config, ScriptedScroll::new([args.offset]))?;
    engine.setup(page.mount())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, engine.samples()).context("write samples")?;
    writeln!(out).context("write samples")?;
    engine.teardown();
    Ok(())
}
