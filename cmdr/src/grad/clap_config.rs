// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gradient_studio::{ANIMATION_SPEED_RANGE, ColorPair, CopyFormat, GradientMode, HexColor};

#[derive(Debug, Parser)]
#[command(bin_name = "grad")]
#[command(about = "🎨 Random CSS gradients, scored for accessibility")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  grad [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `gradient_studio_log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long = "config",
        value_name = "PATH",
        help = "Use this config file instead of the one in the user config folder"
    )]
    pub maybe_config_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🎲 Generate a batch of gradients\n💡 Eg: `grad generate -c 6 --mood ocean`")]
    Generate {
        #[command(flatten)]
        batch: BatchArgs,

        #[arg(
            long = "lock",
            value_name = "I=C1,C2",
            value_parser = parse_lock,
            help = "Pin slot I to the colors C1,C2. Can be repeated"
        )]
        locks: Vec<(usize, ColorPair)>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Cards)]
        format: OutputFormat,
    },

    #[clap(about = "🌈 Show the 5 stop Oklab palette between two colors")]
    Palette { start: HexColor, end: HexColor },

    #[clap(about = "🔍 Show the WCAG contrast ratio of two colors")]
    Contrast { start: HexColor, end: HexColor },

    #[clap(about = "😌 List the mood presets")]
    Moods,

    #[clap(about = "📋 Copy a gradient to the clipboard\n💡 Eg: `grad copy '#8BC6EC' '#9599E2' --format vendor`")]
    Copy {
        #[command(flatten)]
        gradient: GradientArgs,

        #[arg(long, value_parser = parse_copy_format, help = "css, detailed, or vendor")]
        format: Option<CopyFormat>,
    },

    #[clap(about = "🎨 Print a full analysis of a gradient")]
    Analyze {
        #[command(flatten)]
        gradient: GradientArgs,

        #[arg(long, help = "Mood label to show, or `random`")]
        mood: Option<String>,
    },

    #[clap(about = "🔗 Share a gradient (copies the share text to the clipboard)")]
    Share {
        #[command(flatten)]
        gradient: GradientArgs,

        #[arg(long)]
        url: Option<String>,
    },

    #[clap(about = "🖼️ Export a gradient as a PNG\n💡 Eg: `grad export '#0F2027' '#203A43' -o ~/Pictures`")]
    Export {
        #[command(flatten)]
        gradient: GradientArgs,

        #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
        maybe_output_dir: Option<PathBuf>,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        #[arg(long)]
        scale: Option<u32>,
    },

    #[clap(about = "⭐ Toggle or list favorites")]
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommand,
    },

    #[clap(about = "💾 Save gradients to the library, or list it")]
    Library {
        #[command(subcommand)]
        command: LibraryCommand,
    },

    #[clap(about = "⏱️ Regenerate a random unlocked slot on a timer\n💡 Eg: `grad animate --speed 3 --ticks 10`")]
    Animate {
        #[command(flatten)]
        batch: BatchArgs,

        #[arg(
            long,
            value_parser = clap::value_parser!(u8).range(1..=i64::from(*ANIMATION_SPEED_RANGE.end())),
            help = "1 is one refresh every 3 seconds, 5 is five times faster"
        )]
        speed: Option<u8>,

        #[arg(long, default_value_t = 5, help = "Stop after this many refreshes")]
        ticks: usize,

        #[arg(
            long = "lock-slot",
            value_name = "I",
            help = "Keep slot I out of the refresh. Can be repeated"
        )]
        lock_slots: Vec<usize>,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoriteCommand {
    #[clap(about = "Add the pair if it isn't a favorite, remove it if it is")]
    Toggle { start: HexColor, end: HexColor },
    #[clap(about = "List every favorite pair")]
    List,
}

#[derive(Debug, Subcommand)]
pub enum LibraryCommand {
    #[clap(about = "Save one gradient")]
    Save {
        #[command(flatten)]
        gradient: GradientArgs,
    },
    #[clap(about = "Generate a batch and save all of it")]
    SaveBatch {
        #[command(flatten)]
        batch: BatchArgs,
    },
    #[clap(about = "List saved gradients, oldest first")]
    List,
}

/// Settings shared by every command that generates a batch.
#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(short = 'c', long)]
    pub count: Option<usize>,

    #[arg(short = 'm', long, value_parser = parse_mode, help = "linear or radial")]
    pub mode: Option<GradientMode>,

    #[arg(long, help = "A preset from `grad moods`, or `random`")]
    pub mood: Option<String>,

    #[arg(long, help = "Seed the generator to get the same batch again")]
    pub seed: Option<u64>,
}

/// One gradient given on the command line.
#[derive(Debug, Args)]
pub struct GradientArgs {
    pub start: HexColor,

    pub end: HexColor,

    #[arg(long, help = "Degrees, only used by linear gradients [default: 135]")]
    pub angle: Option<u16>,

    #[arg(short = 'm', long, value_parser = parse_mode, help = "linear or radial")]
    pub mode: Option<GradientMode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[clap(help = "Truecolor swatches")]
    Cards,
    #[clap(help = "One CSS declaration per line")]
    Css,
    #[clap(help = "Every descriptor as JSON")]
    Json,
}

/// `I=C1,C2`, eg: `0=#000000,#FFFFFF`.
///
/// # Errors
///
/// If the slot is not a number, or either color is not a hex color.
pub fn parse_lock(input: &str) -> Result<(usize, ColorPair), String> {
    let Some((slot, colors)) = input.split_once('=') else {
        return Err(format!("expected I=C1,C2 but got '{input}'"));
    };
    let slot = slot
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("'{slot}' is not a slot index"))?;
    let colors = colors
        .parse::<ColorPair>()
        .map_err(|error| error.to_string())?;
    Ok((slot, colors))
}

fn parse_mode(input: &str) -> Result<GradientMode, String> {
    input
        .parse()
        .map_err(|_| format!("'{input}' is not linear or radial"))
}

fn parse_copy_format(input: &str) -> Result<CopyFormat, String> {
    input
        .parse()
        .map_err(|_| format!("'{input}' is not css, detailed, or vendor"))
}
