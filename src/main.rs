use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fretboard::{
    generate, layout_with, render_text, resolve_degree, schedule_progression, to_playback_events,
    Config, FretboardError, GENERATOR_KEYS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "fretboard", version, about = "Guitar chord diagrams and progressions")]
struct Cli {
    /// YAML config file (catalog paths, playback and diagram settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the diagram and playback events for a chord
    Chord {
        /// Chord symbol, e.g. "Am" or "F#m"
        name: String,

        /// Print geometry and events as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a chord progression
    Progression {
        /// Style id (defaults to the first style in the catalog)
        #[arg(short, long)]
        style: Option<String>,

        /// Key, spelled with sharps
        #[arg(short, long, default_value = "C")]
        key: String,

        /// Seed for a repeatable pattern choice
        #[arg(long)]
        seed: Option<u64>,

        /// Print the progression and its schedule as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a roman-numeral degree in a key
    Resolve { degree: String, key: String },

    /// List catalog chords
    Chords,

    /// List progression styles
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    let catalogs = config.catalogs().context("loading catalogs")?;

    match cli.command {
        Commands::Chord { name, json } => {
            let shape = catalogs
                .chords()
                .find_shape_or_triad(&name)
                .ok_or_else(|| FretboardError::UnknownChord(name.clone()))?;
            let geometry = layout_with(shape, &config.diagram);
            let events = to_playback_events(shape, 0.0, &config.playback);

            if json {
                let out = serde_json::json!({
                    "shape": shape,
                    "geometry": geometry,
                    "events": events,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render_text(&shape.label, &geometry));
                if !shape.tags.is_empty() {
                    println!("tags: {}", shape.tags.join(", "));
                }
                for event in &events {
                    println!(
                        "  string {} fret {:>2}  {:>7.2} Hz  gain {:.2}",
                        event.string_index + 1,
                        event.fret,
                        event.frequency,
                        event.gain
                    );
                }
            }
        }

        Commands::Progression {
            style,
            key,
            seed,
            json,
        } => {
            let styles = catalogs.styles();
            let style = match &style {
                Some(id) => styles.get(id),
                None => styles.first(),
            }
            .ok_or_else(|| FretboardError::UnknownStyle(style.clone().unwrap_or_default()))?;
            if !GENERATOR_KEYS.contains(&key.as_str()) {
                log::info!("Key {} is outside the usual generator keys", key);
            }

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let progression = generate(style, &key, catalogs.chords(), &mut rng);
            let schedule = schedule_progression(&progression.chords, &config.playback);

            if json {
                let out = serde_json::json!({
                    "progression": progression,
                    "schedule": schedule,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} in {}: {}", style.label, key, progression.pattern.join(" - "));
                for chord in &progression.chords {
                    println!();
                    match chord.shape {
                        Some(shape) => {
                            let geometry = layout_with(shape, &config.diagram);
                            print!("{} ({})  ", chord.degree, chord.name);
                            print!("{}", render_text(&shape.label, &geometry));
                        }
                        None => println!("{} ({})  no diagram available", chord.degree, chord.name),
                    }
                }
            }
        }

        Commands::Resolve { degree, key } => {
            println!("{}", resolve_degree(&degree, &key));
        }

        Commands::Chords => {
            for shape in catalogs.chords().iter() {
                println!("{:<6} {:<10} {}", shape.name, shape.label, shape.tags.join(", "));
            }
        }

        Commands::Styles => {
            for style in catalogs.styles().iter() {
                println!("{:<8} {} - {}", style.id, style.label, style.description);
                for pattern in &style.patterns {
                    println!("         {}", pattern.join(" "));
                }
            }
        }
    }

    Ok(())
}
