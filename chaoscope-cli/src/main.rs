use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _};
use clap::{Parser, Subcommand};

use chaoscope_core::{format, presets, ChaosCanvas, ChaosGame, ChaosGameDescription};

#[derive(Parser, Debug)]
#[command(name = "chaoscope", version, about = "Render IFS attractors with the chaos game")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in attractor presets.
    Presets,
    /// Run the chaos game and print (or save) the attractor.
    Render(RenderArgs),
    /// Write a preset to a description file.
    Save(SaveArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Built-in preset name (see `presets`).
    #[arg(long, conflicts_with = "file")]
    preset: Option<String>,

    /// Description file to load instead of a preset.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Number of iterations.
    #[arg(long, default_value_t = 100_000)]
    steps: usize,

    /// Canvas width in cells.
    #[arg(long, default_value_t = 150)]
    width: u32,

    /// Canvas height in cells.
    #[arg(long, default_value_t = 150)]
    height: u32,

    /// Seed the random source for a reproducible render.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a plain PBM bitmap here instead of printing ASCII art.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SaveArgs {
    /// Preset to export.
    #[arg(long)]
    preset: String,

    /// Destination path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Render(args) => cmd_render(args),
        Command::Save(args) => cmd_save(args),
    }
}

fn cmd_presets() -> anyhow::Result<()> {
    for name in presets::PRESET_NAMES {
        println!("{name}");
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let description = load_description(args.preset.as_deref(), args.file.as_deref())?;
    let mut game = match args.seed {
        Some(seed) => ChaosGame::with_seed(description, args.width, args.height, seed)?,
        None => ChaosGame::new(description, args.width, args.height)?,
    };

    log::info!(
        "rendering {} steps on a {}x{} canvas",
        args.steps,
        args.width,
        args.height
    );
    game.run_steps(args.steps);

    match args.out {
        Some(path) => {
            write_pbm(game.canvas(), &path)
                .with_context(|| format!("write bitmap '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{}", game.canvas().to_ascii()),
    }
    Ok(())
}

fn cmd_save(args: SaveArgs) -> anyhow::Result<()> {
    let description = presets::by_name(&args.preset)
        .with_context(|| format!("unknown preset '{}', try `chaoscope presets`", args.preset))?;
    format::write_file(&description, &args.out)
        .with_context(|| format!("write description '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn load_description(
    preset: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<ChaosGameDescription> {
    match (preset, file) {
        (Some(name), None) => presets::by_name(name)
            .with_context(|| format!("unknown preset '{name}', try `chaoscope presets`")),
        (None, Some(path)) => format::read_file(path)
            .with_context(|| format!("load description '{}'", path.display())),
        _ => bail!("exactly one of --preset and --file is required"),
    }
}

/// Plain PBM (P1): `1` for visited cells, `0` for background.
fn write_pbm(canvas: &ChaosCanvas, path: &Path) -> std::io::Result<()> {
    let mut out = String::with_capacity(canvas.cells().len() * 2 + 16);
    out.push_str("P1\n");
    out.push_str(&format!("{} {}\n", canvas.width(), canvas.height()));
    for row in canvas.rows() {
        let line: Vec<&str> = row
            .iter()
            .map(|&cell| if cell == 1 { "1" } else { "0" })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    std::fs::write(path, out)
}
