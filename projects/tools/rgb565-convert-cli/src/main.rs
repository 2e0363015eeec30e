mod error;
mod util;

use argh::FromArgs;
use core::error::Error;
use error::CliError;
use rgb565_convert::{color_rgba32::Rgba32, ConvertStrategy};
use std::io;
use tracing::{debug, level_filters::LevelFilter, warn};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};
use util::*;

#[derive(FromArgs, Debug)]
/// Converts packed RGBA8888 colours to RGB565. Does nothing when run without a command.
struct TopLevel {
    #[argh(subcommand)]
    command: Option<Commands>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Convert(ConvertCmd),
    Strategies(StrategiesCmd),
}

#[derive(FromArgs, Debug)]
/// Convert hex RGBA8888 colours (red in the low byte) to RGB565
#[argh(subcommand, name = "convert")]
struct ConvertCmd {
    /// conversion strategy to use [default: shift-mask]
    #[argh(option, from_str_fn(parse_strategy))]
    pub strategy: Option<ConvertStrategy>,

    /// colours to convert, e.g. 0xDDCCBBAA
    #[argh(positional)]
    pub colours: Vec<String>,
}

#[derive(FromArgs, Debug)]
/// List the conversion strategies available in this build
#[argh(subcommand, name = "strategies")]
struct StrategiesCmd {}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;
    let cli: TopLevel = argh::from_env();

    match cli.command {
        None => debug!("No command given, nothing to do"),
        Some(Commands::Convert(cmd)) => {
            let strategy = cmd.strategy.unwrap_or_default();
            debug!(strategy = strategy.name(), count = cmd.colours.len(), "Converting");

            for input in &cmd.colours {
                match parse_hex_colour(input) {
                    Ok(color32) => println!("{}", describe(strategy, color32)),
                    Err(e) => warn!("Skipping colour: {e}"),
                }
            }
        }
        Some(Commands::Strategies(_)) => {
            for strategy in ConvertStrategy::all_values() {
                println!("{}", strategy.name());
            }
        }
    }

    Ok(())
}

fn init_logging() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .finish()
        .try_init()?;
    Ok(())
}

/// Formats one conversion as
/// `0xAABBGGRR -> 0xXXXX (r=.. g=.. b=.. a=.. => r5=.. g6=.. b5=..)`.
fn describe(strategy: ConvertStrategy, color32: u32) -> String {
    let color16 = strategy.convert(color32);
    let rgba = Rgba32::from_packed(color32);
    format!(
        "{color32:#010X} -> {:#06X} (r={} g={} b={} a={} => r5={} g6={} b5={})",
        color16.raw_value(),
        rgba.r,
        rgba.g,
        rgba.b,
        rgba.a,
        color16.red5(),
        color16.green6(),
        color16.blue5()
    )
}
