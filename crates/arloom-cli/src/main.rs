use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use arloom_anim::{AnimationClock, evaluate};
use arloom_core::math::rad_to_deg;
use arloom_core::Timestamp;
use arloom_export::markup;
use arloom_scene::{validate_project, Project};

#[derive(Parser)]
#[command(
    name = "arloom",
    version,
    about = "Arloom — layer animation engine for marker-tracked AR overlays"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a project file for structural errors
    Validate {
        /// Path to the project .json file
        #[arg()]
        file: PathBuf,
    },

    /// Print evaluated layer poses across one animation cycle
    Sample {
        /// Path to the project .json file
        #[arg()]
        file: PathBuf,

        /// Number of samples across the cycle
        #[arg(short, long, default_value_t = 10)]
        steps: u32,
    },

    /// Generate the marker-anchored AR scene fragment
    Export {
        /// Path to the project .json file
        #[arg()]
        file: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Marker pattern name referenced by the generated scene
        #[arg(long, default_value = "marker")]
        marker: String,
    },
}

fn load_project(path: &PathBuf) -> Result<Project> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading project file {}", path.display()))?;
    let project: Project = serde_json::from_str(&contents)
        .with_context(|| format!("parsing project file {}", path.display()))?;
    Ok(project)
}

fn cmd_validate(file: PathBuf) -> Result<()> {
    let project = load_project(&file)?;
    match validate_project(&project) {
        Ok(()) => {
            println!(
                "OK: '{}' ({} layers)",
                project.settings.name,
                project.layers.len()
            );
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("error: {}", error);
            }
            anyhow::bail!("{} validation error(s)", errors.len());
        }
    }
}

fn cmd_sample(file: PathBuf, steps: u32) -> Result<()> {
    let project = load_project(&file)?;
    validate_project(&project)
        .map_err(|errors| anyhow::anyhow!("project is invalid: {} error(s)", errors.len()))?;

    let steps = steps.max(1);
    for layer in &project.layers {
        if layer.animation.is_inert() {
            println!("layer {} '{}': no animation", layer.id, layer.name);
            continue;
        }

        println!(
            "layer {} '{}': effect={} keyframes={} duration={} loop={}",
            layer.id,
            layer.name,
            layer.animation.effect,
            layer.animation.enable_keyframes,
            layer.animation.duration,
            layer.animation.looped
        );

        let clock = AnimationClock::for_spec(&layer.animation, Timestamp::zero());
        let cycle = layer.animation.duration.as_seconds() / layer.animation.speed;
        for i in 0..=steps {
            let now = Timestamp::from_seconds(cycle * i as f64 / steps as f64);
            let pose = evaluate(&layer.base, &layer.animation, clock.sample(now));
            println!(
                "  t={:6.3}s  pos=({:+.3}, {:+.3}, {:+.3})  rotZ={:+8.2}°  scale={:.3}  opacity={:.3}",
                now.as_seconds(),
                pose.position.x,
                pose.position.y,
                pose.position.z,
                rad_to_deg(pose.rotation.z),
                pose.scale.x,
                pose.opacity
            );
        }
    }
    Ok(())
}

fn cmd_export(file: PathBuf, output: Option<PathBuf>, marker: String) -> Result<()> {
    let project = load_project(&file)?;
    validate_project(&project)
        .map_err(|errors| anyhow::anyhow!("project is invalid: {} error(s)", errors.len()))?;

    let fragment = markup::scene_fragment(&project, &marker).context("serializing layers")?;
    match output {
        Some(path) => {
            std::fs::write(&path, fragment)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("exported scene fragment to {}", path.display());
        }
        None => println!("{}", fragment),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Validate { file } => cmd_validate(file),
        Commands::Sample { file, steps } => cmd_sample(file, steps),
        Commands::Export {
            file,
            output,
            marker,
        } => cmd_export(file, output, marker),
    }
}
