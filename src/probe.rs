//! Headless magnifier probe.
//!
//! Lays a text file out on a monospace grid, hovers the requested words one
//! after another and prints what the magnifier would show for each, one JSON
//! object per line.

use anyhow::{Context, Result};
use egui::vec2;
use rloupe::{HostEvent, LayoutHost, Magnifier, MagnifierConfig, MonospaceLayout, PointerTarget};
use serde_json::json;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

struct Config {
    magnifier: MagnifierConfig,
    columns: usize,
    input: Option<PathBuf>,
    word_indices: Vec<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            magnifier: MagnifierConfig::default(),
            columns: 80,
            input: None,
            word_indices: Vec::new(),
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--before" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--before requires an argument");
                }
                config.magnifier.words_before = args[i].parse().context("--before expects a count")?;
            }
            "--after" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--after requires an argument");
                }
                config.magnifier.words_after = args[i].parse().context("--after expects a count")?;
            }
            "--width" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--width requires an argument");
                }
                config.columns = args[i].parse().context("--width expects a column count")?;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            arg if config.input.is_none() => {
                config.input = Some(PathBuf::from(arg));
            }
            arg => {
                let index = arg
                    .parse()
                    .with_context(|| format!("invalid word index: {}", arg))?;
                config.word_indices.push(index);
            }
        }
        i += 1;
    }

    if config.input.is_none() {
        print_help();
        anyhow::bail!("missing input file");
    }
    Ok(config)
}

fn print_help() {
    println!("Magnifier probe");
    println!("Usage: loupe-probe [OPTIONS] <FILE|-> <WORD-INDEX>...");
    println!();
    println!("OPTIONS:");
    println!("  --before <N>           Words of context before the hovered word (default: 2)");
    println!("  --after <N>            Words of context after the hovered word (default: 2)");
    println!("  --width <COLS>         Layout width in columns (default: 80)");
    println!("  -h, --help             Show this help message");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = parse_args()?;
    let input = config.input.clone().unwrap_or_else(|| PathBuf::from("-"));
    let doc = rloupe::load_document(&input)?;
    let layout = MonospaceLayout::new(&doc, config.columns);
    let words = doc.words();

    let (mut magnifier, _) = Magnifier::init(config.magnifier.clone());
    for &index in &config.word_indices {
        let unit = match words.get(index) {
            Some(&unit) => unit,
            None => {
                log::warn!("word index {} out of range ({} words)", index, words.len());
                continue;
            }
        };

        // Start every probe from a hidden overlay
        magnifier.dispatch(&doc, &layout, HostEvent::Resize, Instant::now());
        magnifier.dispatch(&doc, &layout, HostEvent::PointerEnter { target: PointerTarget::Node(unit) }, Instant::now());

        let overlay = magnifier.overlay().state();
        if !overlay.visible() {
            println!("{}", json!({ "index": index, "word": doc.text_content(unit), "hidden": true }));
            continue;
        }

        // Measure the overlay the way a monospace renderer would
        let text = overlay.text().to_string();
        let rect = overlay.anchor().translate(-layout.scroll_offset());
        let size = vec2(
            text.chars().count() as f32 * layout.glyph_advance(),
            layout.line_height(),
        );
        magnifier.overlay_rendered(size);
        let position = magnifier.overlay().state().position();

        let window: Vec<String> = rloupe::resolve(
            &doc,
            unit,
            config.magnifier.words_before,
            config.magnifier.words_after,
        )
        .units()
        .iter()
        .map(|&w| doc.text_content(w))
        .collect();

        println!(
            "{}",
            json!({
                "index": index,
                "word": doc.text_content(unit),
                "window": window,
                "text": text,
                "rect": [rect.min.x, rect.min.y, rect.max.x, rect.max.y],
                "overlay": [position.x, position.y],
            })
        );
    }

    Ok(())
}
