use crate::config::{Config, load_config};
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::render::{PngEncoder, render_to_buffer, write_image};
use crate::walk::walk_directory;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dirtree", version, about = "Render a directory tree as a PNG diagram")]
pub struct Args {
    /// Directory to draw
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output PNG file
    #[arg(short = 'o', long = "output", default_value = "tree.png")]
    pub output: PathBuf,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width and height in pixels
    #[arg(short = 'w', long = "size")]
    pub size: Option<u32>,

    /// Integer font scale
    #[arg(long)]
    pub scale: Option<i32>,

    /// Space between sibling boxes
    #[arg(long)]
    pub gap: Option<i32>,

    /// Space between a box edge and its label
    #[arg(long)]
    pub padding: Option<i32>,

    /// Print the walked hierarchy before drawing
    #[arg(long = "print-tree")]
    pub print_tree: bool,

    /// Write the computed layout as JSON
    #[arg(long = "dump-layout")]
    pub dump_layout: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut config = load_config(args.config.as_deref())
        .with_context(|| format!("loading config {:?}", args.config))?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    let tree = walk_directory(&args.root)?;
    if args.print_tree {
        print!("{}", tree.outline());
    }

    let layout = compute_layout(&tree, &config.theme, &config)?;
    if layout.overflow_count > 0 {
        warn!(
            rows = layout.overflow_count,
            gap = layout.final_gap,
            "some child rows did not fit the canvas"
        );
    }
    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout)?;
    }

    let buf = render_to_buffer(&layout, &config.theme, &config)?;
    write_image(&buf, &PngEncoder::new(&args.output))?;
    info!(output = %args.output.display(), nodes = layout.node_count, "wrote diagram");
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(size) = args.size {
        config.canvas.width = size;
        config.canvas.height = size;
    }
    if let Some(scale) = args.scale {
        config.layout.scale = scale;
    }
    if let Some(gap) = args.gap {
        config.layout.gap = gap;
    }
    if let Some(padding) = args.padding {
        config.layout.padding = padding;
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
