#![deny(unsafe_code)]
//! CLI binary for the dock theme color tools.
//!
//! Subcommands:
//! - `show <prefs>` — decode a preference color and print its HSV fields
//! - `adjust <prefs>` — apply adjustments and print the resulting color
//! - `hsv <h> <s> <v>` — build a color from HSV and print its preference string
//! - `list` — print available adjustments
//!
//! Diagnostics go through `log`; set `RUST_LOG=debug` to trace each step.

mod error;

use clap::{Parser, Subcommand};
use dock_theme_core::{Adjustment, Color};
use error::CliError;
use std::process;

#[derive(Parser)]
#[command(name = "dock-theme", about = "Dock theme color tools")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a preference color ("R;;G;;B;;A") and print it.
    Show {
        /// Color preference string.
        color: String,
    },
    /// Apply adjustments to a preference color and print the result.
    #[command(allow_negative_numbers = true)]
    Adjust {
        /// Color preference string.
        color: String,

        /// Adjustment as name=amount (e.g. darken_val=0.25). Repeatable,
        /// applied in order after --script.
        #[arg(short, long = "adjust")]
        adjustments: Vec<Adjustment>,

        /// Adjustments as a JSON array of {"op": ..., "amount": ...}.
        #[arg(long, default_value = "[]")]
        script: String,
    },
    /// Build a color from hue, saturation and value.
    #[command(allow_negative_numbers = true)]
    Hsv {
        /// Hue in degrees, [0, 360].
        hue: f64,
        /// Saturation, [0, 1].
        sat: f64,
        /// Value, [0, 1].
        val: f64,

        /// Alpha, [0, 1]. Defaults to transparent, like a new color.
        #[arg(long, default_value_t = 0.0)]
        alpha: f64,
    },
    /// List available adjustments.
    List,
}

fn print_color(color: &Color, json: bool) -> Result<(), CliError> {
    if json {
        let info = serde_json::json!({
            "hue": color.get_hue(),
            "sat": color.get_sat(),
            "val": color.get_val(),
            "alpha": color.get_alpha(),
            "prefs": color.to_prefs_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!(
            "hue {:.2}  sat {:.3}  val {:.3}  alpha {:.3}",
            color.get_hue(),
            color.get_sat(),
            color.get_val(),
            color.get_alpha()
        );
        println!("{color}");
    }
    Ok(())
}

/// Decodes `color`, then applies the `script` adjustments followed by
/// `adjustments`, in order.
fn adjust_color(
    color: &str,
    script: &str,
    adjustments: Vec<Adjustment>,
) -> Result<Color, CliError> {
    let mut current = Color::from_prefs_string(color)?;
    let mut steps = Adjustment::list_from_json(script)?;
    steps.extend(adjustments);
    for step in &steps {
        step.apply(&mut current);
        log::debug!("{} -> {current:?}", step.name());
    }
    Ok(current)
}

fn hsv_color(hue: f64, sat: f64, val: f64, alpha: f64) -> Color {
    let in_range =
        (0.0..=360.0).contains(&hue) && (0.0..=1.0).contains(&sat) && (0.0..=1.0).contains(&val);
    if !in_range {
        log::warn!("hsv ({hue}, {sat}, {val}) out of range, using black");
    }
    let mut color = Color::from_hsv(hue, sat, val);
    color.set_alpha(alpha);
    if color.get_alpha() != alpha {
        log::warn!("alpha {alpha} out of range, keeping {}", color.get_alpha());
    }
    color
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let names = Adjustment::list_names();
            if cli.json {
                let info = serde_json::json!({ "adjustments": names });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Adjustments:");
                for name in names {
                    println!("  {name}");
                }
            }
        }
        Command::Show { color } => {
            let parsed = Color::from_prefs_string(&color)?;
            log::debug!("decoded {color:?} as {parsed:?}");
            print_color(&parsed, cli.json)?;
        }
        Command::Adjust {
            color,
            adjustments,
            script,
        } => {
            let adjusted = adjust_color(&color, &script, adjustments)?;
            print_color(&adjusted, cli.json)?;
        }
        Command::Hsv {
            hue,
            sat,
            val,
            alpha,
        } => {
            let color = hsv_color(hue, sat, val, alpha);
            print_color(&color, cli.json)?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            log::error!("{e}");
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
