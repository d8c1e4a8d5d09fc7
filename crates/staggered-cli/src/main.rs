use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Deserialize;
use staggered_core::{BoxSize, Constraints, Layout, PackerConfig, pack_batch, pack_layout};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "staggered",
    about = "Lay out boxes in a staggered grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack box sizes and export placements
    Pack(PackArgs),
    /// Print the merged configuration (after CLI/YAML) and exit
    PrintConfig(PrintConfigArgs),
    /// Simple timing bench over random boxes
    Bench(BenchArgs),
}

#[derive(Args, Debug, Clone)]
struct LayoutArgs {
    /// Number of staggered rows
    #[arg(long, default_value_t = 3, help_heading = "Layout")]
    rows: usize,
    /// Minimum bounding width
    #[arg(long, default_value_t = 0, help_heading = "Layout")]
    min_width: u32,
    /// Maximum bounding width
    #[arg(long, default_value_t = u32::MAX, help_heading = "Layout")]
    max_width: u32,
    /// Minimum bounding height
    #[arg(long, default_value_t = 0, help_heading = "Layout")]
    min_height: u32,
    /// Maximum bounding height
    #[arg(long, default_value_t = u32::MAX, help_heading = "Layout")]
    max_height: u32,
    /// Pack batches in parallel (requires core feature `parallel`)
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    parallel: bool,
    /// YAML config file path (overrides the options above)
    #[arg(long, help_heading = "Layout")]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct PackArgs {
    /// Input file (JSON or YAML list of [w, h] or {key, w, h}); `-` reads JSON from stdin
    #[arg(help_heading = "Input/Output")]
    input: Option<PathBuf>,
    /// Inline box size WIDTHxHEIGHT (repeatable, used when no input file is given)
    #[arg(long = "box", value_parser = parse_box, help_heading = "Input/Output")]
    boxes: Vec<BoxSize>,
    /// Output file (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    #[command(flatten)]
    layout: LayoutArgs,
    /// Output format: json-array | json (alias) | json-hash | text
    #[arg(long, default_value = "json-array", help_heading = "Export")]
    format: String,
    /// Export layout stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct PrintConfigArgs {
    #[command(flatten)]
    layout: LayoutArgs,
    /// Output format: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"])]
    format: String,
}

#[derive(Args, Debug, Clone)]
struct BenchArgs {
    /// Number of random boxes
    #[arg(long, default_value_t = 10_000)]
    count: usize,
    /// Smallest generated side
    #[arg(long, default_value_t = 8)]
    min_size: u32,
    /// Largest generated side
    #[arg(long, default_value_t = 128)]
    max_size: u32,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Independent layouts to pack per run (more than one goes through the batch API)
    #[arg(long, default_value_t = 1)]
    batches: usize,
    #[command(flatten)]
    layout: LayoutArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::PrintConfig(args) => run_print_config(args),
        Commands::Bench(args) => run_bench(args),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.layout)?;
    let inputs = match &args.input {
        Some(path) => read_inputs(path)?,
        None if !args.boxes.is_empty() => args
            .boxes
            .iter()
            .enumerate()
            .map(|(i, b)| (i.to_string(), b.width, b.height))
            .collect(),
        None => anyhow::bail!("no boxes given: pass an input file or --box WIDTHxHEIGHT"),
    };
    info!(count = inputs.len(), rows = cfg.rows, "loaded boxes");

    let layout = pack_layout(inputs, cfg)?;
    let rendered = match args.format.as_str() {
        "json-array" | "json" => {
            serde_json::to_string_pretty(&staggered_core::to_json_array(&layout))?
        }
        "json-hash" => serde_json::to_string_pretty(&staggered_core::to_json_hash(&layout))?,
        "text" => render_text(&layout),
        other => anyhow::bail!("unknown output format: {}", other),
    };

    match &args.out {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!(?path, cells = layout.cells.len(), "layout written");
        }
        None => println!("{}", rendered),
    }

    let stats = layout.stats();
    debug!("{}", stats.summary());
    if let Some(stats_path) = &args.export_stats {
        fs::write(stats_path, serde_json::to_string_pretty(&stats)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
    }
    Ok(())
}

fn run_print_config(args: &PrintConfigArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.layout)?;
    match args.format.as_str() {
        "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
        _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
    }
    Ok(())
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};
    if b.min_size > b.max_size {
        anyhow::bail!("--min-size ({}) exceeds --max-size ({})", b.min_size, b.max_size);
    }
    let cfg = build_config(&b.layout)?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(b.seed);
    let mut gen_boxes = || -> Vec<BoxSize> {
        (0..b.count)
            .map(|_| {
                let w = rng.gen_range(b.min_size..=b.max_size);
                let h = rng.gen_range(b.min_size..=b.max_size);
                BoxSize::new(w, h)
            })
            .collect()
    };

    if b.batches > 1 {
        let batches: Vec<Vec<BoxSize>> = (0..b.batches).map(|_| gen_boxes()).collect();
        let start = Instant::now();
        let results = pack_batch(&batches, &cfg)?;
        let dur = start.elapsed();
        let (w, h) = results
            .iter()
            .fold((0u32, 0u32), |(w, h), r| (w.max(r.width), h.max(r.height)));
        println!(
            "batches={} cells={} rows={} max_size={}x{} parallel={} time={}",
            results.len(),
            results.iter().map(|r| r.placements.len()).sum::<usize>(),
            cfg.rows,
            w,
            h,
            cfg.parallel,
            bench_fmt_dur(dur)
        );
        return Ok(());
    }

    let inputs: Vec<(String, u32, u32)> = gen_boxes()
        .into_iter()
        .enumerate()
        .map(|(i, s)| (format!("box_{}", i), s.width, s.height))
        .collect();

    let start = Instant::now();
    let layout = pack_layout(inputs, cfg)?;
    let dur = start.elapsed();
    let stats = layout.stats();
    println!(
        "cells={} rows={} size={}x{} occupancy={:.2}% time={}",
        stats.num_cells,
        stats.num_rows,
        layout.width,
        layout.height,
        stats.occupancy * 100.0,
        bench_fmt_dur(dur)
    );
    Ok(())
}

fn bench_fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn build_config(args: &LayoutArgs) -> anyhow::Result<PackerConfig> {
    let base = PackerConfig {
        rows: args.rows,
        constraints: Constraints::new(
            args.min_width,
            args.max_width,
            args.min_height,
            args.max_height,
        ),
        parallel: args.parallel,
    };
    // Config file sets layout options en bloc
    let cfg = if let Some(path) = &args.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        y.into_packer_config(base)
    } else {
        base
    };
    cfg.validate()?;
    Ok(cfg)
}

/// One entry of an input file: `[w, h]` or `{ key, w, h }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputEntry {
    Pair(u32, u32),
    Keyed {
        #[serde(default)]
        key: Option<String>,
        #[serde(alias = "width")]
        w: u32,
        #[serde(alias = "height")]
        h: u32,
    },
}

fn read_inputs(path: &Path) -> anyhow::Result<Vec<(String, u32, u32)>> {
    let entries: Vec<InputEntry> = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        serde_json::from_str(&buf).context("parse stdin as JSON")?
    } else {
        let text =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        if is_yaml(path) {
            serde_yaml::from_str(&text).with_context(|| format!("parse {}", path.display()))?
        } else {
            serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?
        }
    };
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| match e {
            InputEntry::Pair(w, h) => (i.to_string(), w, h),
            InputEntry::Keyed { key, w, h } => (key.unwrap_or_else(|| i.to_string()), w, h),
        })
        .collect())
}

fn is_yaml(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "yaml" | "yml")
    )
}

fn parse_box(s: &str) -> Result<BoxSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{}`", s))?;
    let w = w
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad width `{}`: {}", w, e))?;
    let h = h
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad height `{}`: {}", h, e))?;
    Ok(BoxSize::new(w, h))
}

fn render_text(layout: &Layout) -> String {
    let mut out = format!("size {}x{}\n", layout.width, layout.height);
    for c in &layout.cells {
        out.push_str(&format!(
            "{}\trow={}\tx={}\ty={}\tw={}\th={}\n",
            c.key, c.row, c.rect.x, c.rect.y, c.rect.w, c.rect.h
        ));
    }
    out.push_str(&layout.stats().summary());
    out
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    rows: Option<usize>,
    min_width: Option<u32>,
    max_width: Option<u32>,
    min_height: Option<u32>,
    max_height: Option<u32>,
    parallel: Option<bool>,
}

impl YamlConfig {
    fn into_packer_config(self, mut cfg: PackerConfig) -> PackerConfig {
        if let Some(v) = self.rows {
            cfg.rows = v;
        }
        if let Some(v) = self.min_width {
            cfg.constraints.min_width = v;
        }
        if let Some(v) = self.max_width {
            cfg.constraints.max_width = v;
        }
        if let Some(v) = self.min_height {
            cfg.constraints.min_height = v;
        }
        if let Some(v) = self.max_height {
            cfg.constraints.max_height = v;
        }
        if let Some(v) = self.parallel {
            cfg.parallel = v;
        }
        cfg
    }
}
