// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeSet,
          fmt::{Debug, Formatter},
          io::Write,
          path::PathBuf};

use gradient_studio::{Angle, AutoRegenTimer, ClipboardService, ColorPair, CommonResult,
                      ExportNotice, ExportOptions, FavoritesStore, GradientDescriptor,
                      GradientLibrary, GradientMode, LockedSlots, Mood, ShareOutcome,
                      ShareService, StudioAction, StudioState, analysis_text, contrast,
                      copy_gradient, derive_palette, download_gradient, generate_batch,
                      is_accessible, load_or_create_store, reduce, share_gradient,
                      tick_period};
use miette::IntoDiagnostic;
use rand::{SeedableRng, rngs::StdRng};

use super::{AppPaths, BatchArgs, CLIArg, CLICommand, FavoriteCommand, GradientArgs,
            LibraryCommand, OutputFormat, StudioConfig, render, ui_str};
use crate::fmt;

/// Used when `--angle` isn't given.
pub const DEFAULT_ANGLE: u16 = 135;

/// Buffer for auto regeneration ticks.
pub const TICK_CHANNEL_SIZE: usize = 16;

/// Everything a command needs besides its arguments.
pub struct AppContext {
    pub config: StudioConfig,
    pub paths: AppPaths,
    pub clipboard: Box<dyn ClipboardService>,
    pub share: Box<dyn ShareService>,
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("paths", &self.paths)
            .finish_non_exhaustive()
    }
}

/// Runs one `grad` command, writing everything it has to say into `out`.
///
/// # Errors
///
/// If an argument doesn't make sense (eg: an unknown mood), or the clipboard, store, or
/// file system fails.
pub async fn try_run_command(
    cli_arg: &CLIArg,
    ctx: &mut AppContext,
    out: &mut impl Write,
) -> CommonResult<()> {
    match &cli_arg.command {
        CLICommand::Generate {
            batch,
            locks,
            format,
        } => {
            let locked: LockedSlots = locks.iter().cloned().collect();
            let (count, mode, mood, mut rng) = resolve_batch(batch, &ctx.config)?;
            let gradients = generate_batch(count, mode, mood, &locked, &mut rng);
            write_batch(out, &gradients, *format, &load_favorite_keys(&ctx.paths))
        }

        CLICommand::Palette { start, end } => {
            write!(out, "{}", render::render_palette(&derive_palette(start, end)))
                .into_diagnostic()
        }

        CLICommand::Contrast { start, end } => {
            let ratio = contrast(start, end);
            let marker = if is_accessible(ratio) {
                "✅ Accessible"
            } else {
                "⚠️ Low Contrast"
            };
            writeln!(
                out,
                "{}{} {ratio:.2}:1 {marker}",
                render::chip(start, start.as_str()),
                render::chip(end, end.as_str()),
            )
            .into_diagnostic()
        }

        CLICommand::Moods => write!(out, "{}", render::render_moods()).into_diagnostic(),

        CLICommand::Copy { gradient, format } => {
            let gradient = build_gradient(gradient, &ctx.config, None);
            let format = format.unwrap_or(ctx.config.copy_format);
            let copied = copy_gradient(ctx.clipboard.as_mut(), &gradient, format)
                .map_err(|error| CommandErrorCouldNot::UseClipboard {
                    reason: error.to_string(),
                })?;
            writeln!(out, "{}\n{copied}", ui_str::copied_msg(format)).into_diagnostic()
        }

        CLICommand::Analyze { gradient, mood } => {
            let mood = resolve_mood(mood.as_deref(), None)?;
            let gradient = build_gradient(gradient, &ctx.config, mood);
            writeln!(out, "{}", analysis_text(&gradient)).into_diagnostic()
        }

        CLICommand::Share { gradient, url } => {
            let gradient = build_gradient(gradient, &ctx.config, None);
            let url = url.as_deref().unwrap_or(&ctx.config.share_url);
            let outcome =
                share_gradient(ctx.share.as_mut(), ctx.clipboard.as_mut(), &gradient, url)
                    .map_err(|error| CommandErrorCouldNot::UseClipboard {
                        reason: error.to_string(),
                    })?;
            let written = match outcome {
                ShareOutcome::Shared => writeln!(out, "{}", ui_str::shared_msg()),
                ShareOutcome::CopiedToClipboard(text) => {
                    writeln!(out, "{}\n{text}", ui_str::share_copied_msg())
                }
            };
            written.into_diagnostic()
        }

        CLICommand::Export {
            gradient,
            maybe_output_dir,
            width,
            height,
            scale,
        } => {
            let gradient = build_gradient(gradient, &ctx.config, None);
            let defaults = ExportOptions::from(ctx.config.export);
            let options = ExportOptions {
                width: width.unwrap_or(defaults.width),
                height: height.unwrap_or(defaults.height),
                scale: scale.unwrap_or(defaults.scale),
            };
            let output_dir = maybe_output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
            match download_gradient(gradient, 0, output_dir, options).await {
                ExportNotice::Saved(path) => {
                    writeln!(out, "{}", ui_str::export_saved_msg(&path)).into_diagnostic()
                }
                ExportNotice::Failed(message) => {
                    writeln!(out, "{}", ui_str::export_failed_msg(&message))
                        .into_diagnostic()?;
                    Err(CommandErrorCouldNot::ExportImage { message }.into())
                }
            }
        }

        CLICommand::Favorite { command } => {
            let store = open_store(&ctx.paths)?;
            let favorites = FavoritesStore::open(&store)?;
            match command {
                FavoriteCommand::Toggle { start, end } => {
                    let colors = ColorPair::new(start.clone(), end.clone());
                    let is_favorite = favorites.toggle(&colors)?;
                    writeln!(
                        out,
                        "{}",
                        ui_str::favorite_toggled_msg(&colors.favorite_key(), is_favorite)
                    )
                    .into_diagnostic()
                }
                FavoriteCommand::List => {
                    let list = favorites.list();
                    if list.is_empty() {
                        return writeln!(out, "{}", ui_str::no_favorites_msg()).into_diagnostic();
                    }
                    for colors in list {
                        writeln!(
                            out,
                            "⭐ {}{}",
                            render::chip(&colors.start, colors.start.as_str()),
                            render::chip(&colors.end, colors.end.as_str())
                        )
                        .into_diagnostic()?;
                    }
                    Ok(())
                }
            }
        }

        CLICommand::Library { command } => {
            let store = open_store(&ctx.paths)?;
            let library = GradientLibrary::open(&store)?;
            let favorite_keys = FavoritesStore::open(&store)?.keys();
            match command {
                LibraryCommand::Save { gradient } => {
                    let gradient = build_gradient(gradient, &ctx.config, None);
                    let outcome = library.save(&gradient)?;
                    writeln!(out, "{}", ui_str::saved_msg(outcome)).into_diagnostic()
                }
                LibraryCommand::SaveBatch { batch } => {
                    let (count, mode, mood, mut rng) = resolve_batch(batch, &ctx.config)?;
                    let gradients =
                        generate_batch(count, mode, mood, &LockedSlots::new(), &mut rng);
                    let saved = library.save_batch(&gradients)?;
                    writeln!(out, "{}", ui_str::batch_saved_msg(saved)).into_diagnostic()?;
                    write!(out, "{}", render::render_cards(&gradients, &favorite_keys))
                        .into_diagnostic()
                }
                LibraryCommand::List => {
                    let list = library.list();
                    if list.is_empty() {
                        return writeln!(out, "{}", ui_str::empty_library_msg())
                            .into_diagnostic();
                    }
                    write!(out, "{}", render::render_cards(&list, &favorite_keys))
                        .into_diagnostic()
                }
            }
        }

        CLICommand::Animate {
            batch,
            speed,
            ticks,
            lock_slots,
        } => {
            let speed = speed.unwrap_or(ctx.config.animation_speed).max(1);
            run_animation(batch, speed, *ticks, lock_slots, &ctx.config, out).await
        }
    }
}

/// Build a studio, start the timer, and print one card per refresh until `ticks`
/// refreshes happened or Ctrl+C is pressed.
async fn run_animation(
    batch: &BatchArgs,
    speed: u8,
    ticks: usize,
    lock_slots: &[usize],
    config: &StudioConfig,
    out: &mut impl Write,
) -> CommonResult<()> {
    let (count, mode, mood, mut rng) = resolve_batch(batch, config)?;

    let mut state = StudioState::new(count, mode, mood, &mut rng);
    for &slot in lock_slots {
        if !state.is_locked(slot) {
            state = reduce(&state, &StudioAction::ToggleLock(slot), &mut rng);
        }
    }
    state = reduce(&state, &StudioAction::SetAnimationSpeed(speed), &mut rng);

    write!(out, "{}", render::render_cards(state.gradients(), state.favorites()))
        .into_diagnostic()?;

    let (mut timer, mut receiver) = AutoRegenTimer::with_channel(TICK_CHANNEL_SIZE);
    timer.set_speed(state.animation_speed());
    if let Some(period) = tick_period(timer.speed()) {
        writeln!(out, "{}", ui_str::animate_header_msg(timer.speed(), period, ticks))
            .into_diagnostic()?;
    }

    let mut refreshes = 0;
    while refreshes < ticks {
        tokio::select! {
            maybe_tick = receiver.recv() => {
                let Some(tick) = maybe_tick else { break };
                if !timer.accepts(&tick) {
                    continue;
                }
                let next = reduce(&state, &StudioAction::AutoRegenerateRandomSlot, &mut rng);
                match changed_slot(&state, &next) {
                    Some(slot) => {
                        let gradient = &next.gradients()[slot];
                        let line =
                            render::render_card(slot, gradient, next.is_favorite(gradient));
                        writeln!(out, "{line}").into_diagnostic()?;
                    }
                    None => {
                        writeln!(out, "{}", ui_str::all_slots_locked_msg())
                            .into_diagnostic()?;
                        break;
                    }
                }
                state = next;
                refreshes += 1;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    timer.stop();
    writeln!(out, "{}", render::render_stats(&state.stats())).into_diagnostic()
}

/// The first slot whose gradient was replaced.
fn changed_slot(before: &StudioState, after: &StudioState) -> Option<usize> {
    before
        .gradients()
        .iter()
        .zip(after.gradients())
        .position(|(lhs, rhs)| lhs.id() != rhs.id())
}

fn write_batch(
    out: &mut impl Write,
    gradients: &[GradientDescriptor],
    format: OutputFormat,
    favorite_keys: &BTreeSet<String>,
) -> CommonResult<()> {
    match format {
        OutputFormat::Cards => {
            write!(out, "{}", render::render_cards(gradients, favorite_keys)).into_diagnostic()
        }
        OutputFormat::Css => {
            for gradient in gradients {
                writeln!(out, "{}", gradient.css_declaration()).into_diagnostic()?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(gradients).into_diagnostic()?;
            writeln!(out, "{json}").into_diagnostic()
        }
    }
}

/// Flags win over the config file.
fn resolve_batch(
    batch: &BatchArgs,
    config: &StudioConfig,
) -> CommonResult<(usize, GradientMode, Option<Mood>, StdRng)> {
    let count = batch.count.unwrap_or(config.count);
    let mode = batch.mode.unwrap_or(config.mode);
    let mood = resolve_mood(batch.mood.as_deref(), config.mood)?;
    let rng = match batch.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "batch settings",
        count = %count,
        mode = %mode,
        mood = ?mood,
        seed = ?batch.seed
    );

    Ok((count, mode, mood, rng))
}

fn resolve_mood(maybe_input: Option<&str>, default: Option<Mood>) -> CommonResult<Option<Mood>> {
    match maybe_input {
        Some(input) => Ok(Mood::parse_choice(input)?),
        None => Ok(default),
    }
}

fn build_gradient(
    args: &GradientArgs,
    config: &StudioConfig,
    mood: Option<Mood>,
) -> GradientDescriptor {
    GradientDescriptor::new(
        ColorPair::new(args.start.clone(), args.end.clone()),
        Angle::new(args.angle.unwrap_or(DEFAULT_ANGLE)),
        args.mode.unwrap_or(config.mode),
        mood,
        false,
    )
}

fn open_store(paths: &AppPaths) -> CommonResult<kv::Store> {
    let folder = paths.store_folder.display().to_string();
    load_or_create_store(Some(&folder))
}

/// Favorites only decorate the cards, so a store that can't be opened (eg: another
/// `grad` holds the lock) is logged and treated as empty.
fn load_favorite_keys(paths: &AppPaths) -> BTreeSet<String> {
    match open_store(paths).and_then(|store| FavoritesStore::open(&store)) {
        Ok(favorites) => favorites.keys(),
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::warn!(message = "favorites unavailable", error = ?error);
            BTreeSet::new()
        }
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum CommandErrorCouldNot {
    #[error("📋 Could not use the clipboard: {reason}")]
    #[diagnostic(
        code(gradient_cmdr::clipboard),
        help("Is a display server running? Use `--format` with `grad generate` to print CSS instead")
    )]
    UseClipboard { reason: String },

    #[error("🖼️ {message}")]
    #[diagnostic(code(gradient_cmdr::export))]
    ExportImage { message: String },
}

/// Styled one-liner for an error that reached `main`.
#[must_use]
pub fn could_not_run_msg(error: &miette::Report) -> String {
    format!("{}{}\n{error:?}", fmt::error("Could not run grad"), fmt::colon())
}
