//! tint CLI - thin wrapper over tint-core.
//!
//! Each subcommand stands in for one control of the original picker UI:
//! channel edits, direct selection, palette save/remove/clear, export, and
//! copy-to-clipboard. Command output goes to stdout; notices and logs go to
//! stderr so piped output stays clean.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use tint_core::clipboard::{ClipboardWriter, Osc52Clipboard};
use tint_core::config::Config;
use tint_core::convert::{Rgb, hex_to_rgb};
use tint_core::logging::{LogConfig, init_logging};
use tint_core::notify::{NoticeBoard, NoticeSink, Severity};
use tint_core::palette::{Palette, clear_and_notify, save_and_notify};
use tint_core::presets::{AddOutcome, BUILTIN_PRESETS, Presets};
use tint_core::state::{ColorEvent, ColorSnapshot, ColorState, HslChannel, RgbChannel};
use tint_core::store::{CURRENT_KEY, JsonFileStore, load_or_default, save_json};

#[derive(Parser)]
#[command(name = "tint", version, about = "Terminal color picker and palette manager")]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Data directory (overrides config and the platform default)
    #[arg(long, global = true, env = "TINT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable, no ANSI escapes
    Plain,
    /// Machine-parseable JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Repr {
    Hex,
    Rgb,
    Hsl,
}

#[derive(Subcommand)]
enum Command {
    /// Show a color (the current one by default)
    Show {
        /// Hex string or preset name
        color: Option<String>,
    },
    /// Edit channels of the current color, e.g. `tint set h=120 s=80`
    Set {
        /// Channel edits: r/g/b (0-255), h (0-360), s/l (0-100)
        #[arg(required = true)]
        edits: Vec<String>,
    },
    /// Select a color directly (hex string or preset name)
    Pick {
        color: String,
    },
    /// Save a color to the palette (the current one by default)
    Save {
        color: Option<String>,
    },
    /// List the saved palette
    List,
    /// Remove the palette entry at INDEX (0-based)
    Remove {
        index: usize,
    },
    /// Clear the saved palette
    Clear {
        /// Confirm the clear; without this the command refuses to run
        #[arg(long)]
        yes: bool,
    },
    /// Export the palette to a JSON document
    Export {
        path: PathBuf,
        /// Palette name stamped into the document
        #[arg(long)]
        name: Option<String>,
    },
    /// Copy a representation of a color to the clipboard (OSC 52)
    Copy {
        /// Hex string or preset name; defaults to the current color
        color: Option<String>,
        /// Which representation to copy
        #[arg(long, value_enum, default_value_t = Repr::Hex)]
        repr: Repr,
    },
    /// List preset swatches, or add one with --add NAME=HEX
    Presets {
        /// Add a named preset, e.g. --add brand=#112233
        #[arg(long, value_name = "NAME=HEX")]
        add: Option<String>,
    },
}

/// Shared command context: output format, config, store, notice board.
struct App {
    format: OutputFormat,
    config: Config,
    store: JsonFileStore,
    notices: NoticeBoard,
}

impl App {
    fn open(cli: &Cli) -> Result<Self> {
        // Flag/env beats config; config beats the platform default.
        let (config, data_dir) = match &cli.data_dir {
            Some(dir) => (Config::load_from(&dir.join("tint.toml"))?, dir.clone()),
            None => {
                let bootstrap = Config::default();
                let dir = bootstrap.data_dir()?;
                let config = Config::load_from(&dir.join("tint.toml"))?;
                let dir = config.data_dir()?;
                (config, dir)
            }
        };

        let log_config = LogConfig {
            level: config.general.log_level.clone(),
            ..LogConfig::default()
        };
        // Ignore AlreadyInitialized when the binary is driven twice in-process.
        let _ = init_logging(&log_config);

        let store = JsonFileStore::new(&data_dir);
        let dismiss = std::time::Duration::from_millis(config.notify.dismiss_ms);
        Ok(Self {
            format: cli.format,
            config,
            store,
            notices: NoticeBoard::new(dismiss),
        })
    }

    /// Load the persisted current color, defaulting to pure red.
    fn current_state(&self) -> ColorState {
        let stored: Option<Rgb> = load_or_default(&self.store, CURRENT_KEY);
        stored.map_or_else(ColorState::new, ColorState::from_rgb)
    }

    fn persist_current(&self, state: &ColorState) -> Result<()> {
        save_json(&self.store, CURRENT_KEY, &state.rgb()).context("persist current color")
    }

    /// Resolve a color argument: hex first, then preset name.
    fn resolve_color(&self, presets: &Presets, input: &str) -> Option<Rgb> {
        hex_to_rgb(input).or_else(|| presets.lookup(input).and_then(hex_to_rgb))
    }

    fn print_snapshot(&self, snap: &ColorSnapshot) -> Result<()> {
        match self.format {
            OutputFormat::Plain => {
                println!("hex  {}", snap.hex);
                println!("rgb  {}", snap.rgb_css);
                println!("hsl  {}", snap.hsl_css);
                println!("r {:>3}  g {:>3}  b {:>3}", snap.r, snap.g, snap.b);
                println!("h {:>3}  s {:>3}  l {:>3}", snap.h, snap.s, snap.l);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(snap)?);
            }
        }
        Ok(())
    }

    /// Sweep expired notices and print the rest to stderr.
    fn flush_notices(&mut self) {
        self.notices.sweep(Instant::now());
        let mut err = std::io::stderr().lock();
        for notice in self.notices.active() {
            let _ = writeln!(err, "tint: [{}] {}", notice.severity.as_str(), notice.message);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut app = App::open(&cli)?;

    let result = run(&mut app, &cli.command);
    app.flush_notices();
    result
}

fn run(app: &mut App, command: &Command) -> Result<()> {
    match command {
        Command::Show { color } => cmd_show(app, color.as_deref()),
        Command::Set { edits } => cmd_set(app, edits),
        Command::Pick { color } => cmd_pick(app, color),
        Command::Save { color } => cmd_save(app, color.as_deref()),
        Command::List => cmd_list(app),
        Command::Remove { index } => cmd_remove(app, *index),
        Command::Clear { yes } => cmd_clear(app, *yes),
        Command::Export { path, name } => cmd_export(app, path, name.as_deref()),
        Command::Copy { color, repr } => cmd_copy(app, color.as_deref(), *repr),
        Command::Presets { add } => cmd_presets(app, add.as_deref()),
    }
}

fn cmd_show(app: &App, color: Option<&str>) -> Result<()> {
    let snap = match color {
        Some(input) => {
            let presets = Presets::load(&app.store);
            let rgb = app
                .resolve_color(&presets, input)
                .with_context(|| format!("'{input}' is not a hex color or preset name"))?;
            ColorState::from_rgb(rgb).snapshot()
        }
        None => app.current_state().snapshot(),
    };
    app.print_snapshot(&snap)
}

fn cmd_set(app: &mut App, edits: &[String]) -> Result<()> {
    let mut state = app.current_state();
    let mut snap = state.snapshot();
    for edit in edits {
        let event = parse_edit(edit)?;
        snap = state.apply(&event);
    }
    app.persist_current(&state)?;
    app.print_snapshot(&snap)
}

fn cmd_pick(app: &mut App, color: &str) -> Result<()> {
    let presets = Presets::load(&app.store);
    let Some(rgb) = app.resolve_color(&presets, color) else {
        bail!("'{color}' is not a hex color or preset name");
    };

    let mut state = app.current_state();
    let snap = state.apply(&ColorEvent::Select {
        hex: tint_core::convert::rgb_to_hex(rgb.r, rgb.g, rgb.b),
    });
    app.persist_current(&state)?;
    app.print_snapshot(&snap)
}

fn cmd_save(app: &mut App, color: Option<&str>) -> Result<()> {
    let hex = match color {
        Some(input) => {
            let presets = Presets::load(&app.store);
            let rgb = app
                .resolve_color(&presets, input)
                .with_context(|| format!("'{input}' is not a hex color or preset name"))?;
            tint_core::convert::rgb_to_hex(rgb.r, rgb.g, rgb.b)
        }
        None => app.current_state().snapshot().hex,
    };

    let mut palette = Palette::load(&app.store);
    let outcome = save_and_notify(&mut palette, &app.store, &mut app.notices, &hex)?;

    if app.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({ "outcome": outcome, "palette": palette.colors() })
        );
    }
    Ok(())
}

fn cmd_list(app: &App) -> Result<()> {
    let palette = Palette::load(&app.store);
    match app.format {
        OutputFormat::Plain => {
            if palette.is_empty() {
                println!("(palette is empty)");
            }
            for (i, color) in palette.colors().iter().enumerate() {
                println!("{i:>3}  {color}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(palette.colors())?);
        }
    }
    Ok(())
}

fn cmd_remove(app: &mut App, index: usize) -> Result<()> {
    let mut palette = Palette::load(&app.store);
    // Out-of-range removal stays silent by contract.
    if let Some(removed) = palette.remove(index) {
        palette.persist(&app.store)?;
        app.notices
            .notify(Severity::Success, &format!("Removed {removed}"));
    }
    Ok(())
}

fn cmd_clear(app: &mut App, yes: bool) -> Result<()> {
    if !yes {
        bail!("refusing to clear the palette without --yes");
    }
    let mut palette = Palette::load(&app.store);
    clear_and_notify(&mut palette, &app.store, &mut app.notices)?;
    Ok(())
}

fn cmd_export(app: &mut App, path: &std::path::Path, name: Option<&str>) -> Result<()> {
    let palette = Palette::load(&app.store);
    let name = name.unwrap_or(&app.config.export.name);
    let doc = tint_core::export::PaletteExport::now(name, palette.colors().to_vec());
    tint_core::export::write_export(path, &doc)?;
    app.notices.notify(
        Severity::Success,
        &format!("Exported {} colors to {}", doc.colors.len(), path.display()),
    );
    Ok(())
}

fn cmd_copy(app: &mut App, color: Option<&str>, repr: Repr) -> Result<()> {
    let snap = match color {
        Some(input) => {
            let presets = Presets::load(&app.store);
            let rgb = app
                .resolve_color(&presets, input)
                .with_context(|| format!("'{input}' is not a hex color or preset name"))?;
            ColorState::from_rgb(rgb).snapshot()
        }
        None => app.current_state().snapshot(),
    };

    let text = match repr {
        Repr::Hex => snap.hex.clone(),
        Repr::Rgb => snap.rgb_css.clone(),
        Repr::Hsl => snap.hsl_css.clone(),
    };

    // Copy failure surfaces as a notice, not an error.
    let mut clipboard = Osc52Clipboard::new(std::io::stdout().lock());
    match clipboard.copy(&text) {
        Ok(()) => {
            println!();
            app.notices
                .notify(Severity::Success, &format!("Copied {text}"));
        }
        Err(err) => {
            tracing::warn!(%err, "clipboard write failed");
            app.notices
                .notify(Severity::Error, &format!("Copy failed: {err}"));
        }
    }
    Ok(())
}

fn cmd_presets(app: &mut App, add: Option<&str>) -> Result<()> {
    let mut presets = Presets::load(&app.store);

    if let Some(spec) = add {
        let Some((name, hex)) = spec.split_once('=') else {
            bail!("expected NAME=HEX, got '{spec}'");
        };
        match presets.add(name, hex) {
            AddOutcome::Added => {
                presets.persist(&app.store)?;
                app.notices
                    .notify(Severity::Success, &format!("Added preset {name}"));
            }
            AddOutcome::DuplicateName => {
                app.notices
                    .notify(Severity::Warning, &format!("Preset '{name}' already exists"));
            }
            AddOutcome::InvalidColor => {
                app.notices
                    .notify(Severity::Warning, &format!("Not a hex color: {hex}"));
            }
        }
        return Ok(());
    }

    match app.format {
        OutputFormat::Plain => {
            for (name, hex) in BUILTIN_PRESETS {
                println!("{name:<10} {hex}");
            }
            for entry in presets.user() {
                println!("{:<10} {}", entry.name, entry.hex);
            }
        }
        OutputFormat::Json => {
            let all: Vec<serde_json::Value> = BUILTIN_PRESETS
                .iter()
                .map(|(name, hex)| serde_json::json!({ "name": name, "hex": hex }))
                .chain(
                    presets
                        .user()
                        .iter()
                        .map(|e| serde_json::json!({ "name": e.name, "hex": e.hex })),
                )
                .collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
    }
    Ok(())
}

/// Parse one `channel=value` edit. Values are clamped to the channel's
/// range before they reach the state layer.
fn parse_edit(edit: &str) -> Result<ColorEvent> {
    let Some((channel, value)) = edit.split_once('=') else {
        bail!("expected CHANNEL=VALUE, got '{edit}'");
    };
    let value: i64 = value
        .parse()
        .with_context(|| format!("'{value}' is not a number"))?;

    let event = match channel.to_ascii_lowercase().as_str() {
        "r" => rgb_edit(RgbChannel::Red, value),
        "g" => rgb_edit(RgbChannel::Green, value),
        "b" => rgb_edit(RgbChannel::Blue, value),
        "h" => ColorEvent::SetHsl {
            channel: HslChannel::Hue,
            value: value.clamp(0, 360) as u16,
        },
        "s" => ColorEvent::SetHsl {
            channel: HslChannel::Saturation,
            value: value.clamp(0, 100) as u16,
        },
        "l" => ColorEvent::SetHsl {
            channel: HslChannel::Lightness,
            value: value.clamp(0, 100) as u16,
        },
        other => bail!("unknown channel '{other}' (expected r, g, b, h, s or l)"),
    };
    Ok(event)
}

fn rgb_edit(channel: RgbChannel, value: i64) -> ColorEvent {
    ColorEvent::SetRgb {
        channel,
        value: value.clamp(0, 255) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_edit_accepts_all_channels() {
        for edit in ["r=255", "g=0", "b=128", "h=120", "s=50", "l=50"] {
            assert!(parse_edit(edit).is_ok(), "{edit}");
        }
    }

    #[test]
    fn parse_edit_clamps_out_of_range() {
        let event = parse_edit("r=999").unwrap();
        assert_eq!(
            event,
            ColorEvent::SetRgb {
                channel: RgbChannel::Red,
                value: 255
            }
        );
        let event = parse_edit("h=-40").unwrap();
        assert_eq!(
            event,
            ColorEvent::SetHsl {
                channel: HslChannel::Hue,
                value: 0
            }
        );
    }

    #[test]
    fn parse_edit_rejects_unknown_channel() {
        assert!(parse_edit("x=1").is_err());
        assert!(parse_edit("r").is_err());
        assert!(parse_edit("r=abc").is_err());
    }
}
