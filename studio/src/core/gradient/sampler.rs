// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The gradient sampler: pure functions with no state of their own.
//!
//! Everything a call depends on is passed in. That includes the lock set, the mood,
//! and the [`Rng`], so a seeded [`rand::rngs::StdRng`] makes every result
//! reproducible. The presentation layer owns all mutable state (see
//! [`crate::StudioState`]).
//!
//! None of these functions can fail. Out of range counts are clamped.

use std::ops::RangeInclusive;

use rand::Rng;

use super::{Angle, ColorPair, GradientDescriptor, GradientMode, LockedSlots, Mood};
use crate::{HexColor, MIN_VISUAL_SEPARATION_RATIO, contrast, darken, random_color,
            rotate_hue};

/// Any `count` given to [`generate_batch`] is clamped to this range.
pub const BATCH_SIZE_RANGE: RangeInclusive<usize> = 1..=50;

/// Absolute OKLCH lightness taken off the second color when a pair is too close.
pub const CONTRAST_REPAIR_DARKEN_AMOUNT: f32 = 0.3;

/// How the second color of a random pair is derived from the first.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HueStrategy {
    /// +180°.
    Complementary,
    /// +30°.
    Analogous,
}

impl HueStrategy {
    #[must_use]
    pub fn degrees(self) -> f32 {
        match self {
            HueStrategy::Complementary => 180.0,
            HueStrategy::Analogous => 30.0,
        }
    }

    /// Fair coin.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            HueStrategy::Complementary
        } else {
            HueStrategy::Analogous
        }
    }
}

/// One of the mood's two anchors (fair coin), or a uniformly random color.
pub fn sample_color<R: Rng + ?Sized>(mood: Option<Mood>, rng: &mut R) -> HexColor {
    match mood {
        Some(mood) => {
            let ColorPair { start, end } = mood.anchors();
            if rng.random_bool(0.5) { start } else { end }
        }
        None => random_color(rng),
    }
}

/// A mood gives its anchors, in fixed order. Otherwise a random base color is paired
/// with a hue rotated copy of itself.
///
/// If the random pair is too close (contrast below [`MIN_VISUAL_SEPARATION_RATIO`]),
/// the second color is darkened once by [`CONTRAST_REPAIR_DARKEN_AMOUNT`]. The result
/// may still be below the accessible threshold.
pub fn build_pair<R: Rng + ?Sized>(mood: Option<Mood>, rng: &mut R) -> ColorPair {
    if let Some(mood) = mood {
        return mood.anchors();
    }

    let base = random_color(rng);
    let strategy = HueStrategy::random(rng);
    let second = rotate_hue(&base, strategy.degrees());
    let second = if contrast(&base, &second) < MIN_VISUAL_SEPARATION_RATIO {
        darken(&second, CONTRAST_REPAIR_DARKEN_AMOUNT)
    } else {
        second
    };

    ColorPair::new(base, second)
}

/// One slot: the pinned pair if `locked_slots` has one (and then `locked == true`),
/// otherwise [`build_pair`]. The angle is always drawn fresh, for pinned slots too.
pub fn regenerate_one<R: Rng + ?Sized>(
    slot: usize,
    mode: GradientMode,
    mood: Option<Mood>,
    locked_slots: &LockedSlots,
    rng: &mut R,
) -> GradientDescriptor {
    let (colors, locked) = match locked_slots.get(&slot) {
        Some(pinned) => (pinned.clone(), true),
        None => (build_pair(mood, rng), false),
    };
    let angle = Angle::random(rng);
    GradientDescriptor::new(colors, angle, mode, mood, locked)
}

/// Slots `0..count` in order. `count` is clamped to [`BATCH_SIZE_RANGE`]. A pinned
/// pair wins over the mood.
pub fn generate_batch<R: Rng + ?Sized>(
    count: usize,
    mode: GradientMode,
    mood: Option<Mood>,
    locked_slots: &LockedSlots,
    rng: &mut R,
) -> Vec<GradientDescriptor> {
    let count = count.clamp(*BATCH_SIZE_RANGE.start(), *BATCH_SIZE_RANGE.end());

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "generate batch",
        count = %count,
        mode = %mode,
        mood = ?mood,
        locked = %locked_slots.len()
    );

    (0..count)
        .map(|slot| regenerate_one(slot, mode, mood, locked_slots, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, compose_expression, is_accessible};

    fn pair(a: &str, b: &str) -> ColorPair {
        ColorPair::new(a.parse().unwrap(), b.parse().unwrap())
    }

    #[test_case(1)]
    #[test_case(3)]
    #[test_case(4)]
    #[test_case(20)]
    #[test_case(50)]
    fn test_batch_has_exactly_count_items(count: usize) {
        let mut rng = StdRng::seed_from_u64(count as u64);
        let batch =
            generate_batch(count, GradientMode::Linear, None, &LockedSlots::new(), &mut rng);
        assert_eq2!(batch.len(), count);
    }

    #[test_case(0, 1)]
    #[test_case(51, 50)]
    #[test_case(10_000, 50)]
    fn test_batch_count_is_clamped(count: usize, expected: usize) {
        let mut rng = StdRng::seed_from_u64(1);
        let batch =
            generate_batch(count, GradientMode::Radial, None, &LockedSlots::new(), &mut rng);
        assert_eq2!(batch.len(), expected);
    }

    #[test]
    fn test_descriptor_invariants_hold_across_seeds() {
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mode = if seed % 2 == 0 {
                GradientMode::Linear
            } else {
                GradientMode::Radial
            };
            for it in generate_batch(12, mode, None, &LockedSlots::new(), &mut rng) {
                assert_eq2!(
                    it.expression(),
                    compose_expression(it.mode(), it.colors(), it.angle())
                );
                assert_eq2!(it.expression(), it.expression());
                assert!(it.contrast_ratio() >= 1.0);
                assert_eq2!(it.accessible(), it.contrast_ratio() > 4.5);
                assert_eq2!(it.accessible(), is_accessible(it.contrast_ratio()));
                assert!(it.angle().degrees() < 360);
                assert_eq2!(it.palette().len(), 5);
                assert_eq2!(&it.palette()[0], &it.colors().start);
                assert_eq2!(&it.palette()[4], &it.colors().end);
                assert!(!it.locked());
            }
        }
    }

    #[test]
    fn test_locked_slot_in_radial_batch_of_three() {
        let mut locked_slots = LockedSlots::new();
        locked_slots.insert(1, pair("#111111", "#222222"));

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch =
                generate_batch(3, GradientMode::Radial, None, &locked_slots, &mut rng);
            assert_eq2!(batch.len(), 3);
            assert_eq2!(batch[1].colors(), &pair("#111111", "#222222"));
            assert!(batch[1].locked());
            assert!(!batch[0].locked());
            assert!(!batch[2].locked());
        }
    }

    #[test]
    fn test_locked_slot_angle_still_varies() {
        let mut locked_slots = LockedSlots::new();
        locked_slots.insert(0, pair("#111111", "#222222"));
        let mut rng = StdRng::seed_from_u64(99);

        let angles = (0..30)
            .map(|_| {
                regenerate_one(0, GradientMode::Linear, None, &locked_slots, &mut rng)
                    .angle()
            })
            .collect::<std::collections::HashSet<_>>();
        assert!(angles.len() > 1);
    }

    #[test]
    fn test_pin_overrides_mood() {
        let mut locked_slots = LockedSlots::new();
        locked_slots.insert(2, pair("#abcdef", "#123456"));
        let mut rng = StdRng::seed_from_u64(5);

        let batch = generate_batch(
            4,
            GradientMode::Linear,
            Some(Mood::Ocean),
            &locked_slots,
            &mut rng,
        );
        assert_eq2!(batch[2].colors(), &pair("#abcdef", "#123456"));
        assert_eq2!(batch[0].colors(), &Mood::Ocean.anchors());
    }

    #[test]
    fn test_mood_pairs_only_use_anchor_colors() {
        let mut rng = StdRng::seed_from_u64(11);
        for mood in Mood::iter() {
            let anchors = mood.anchors();
            let allowed = [&anchors.start, &anchors.end];
            for it in
                generate_batch(8, GradientMode::Linear, Some(mood), &LockedSlots::new(), &mut rng)
            {
                assert!(allowed.contains(&&it.colors().start));
                assert!(allowed.contains(&&it.colors().end));
                assert_eq2!(it.mood(), Some(mood));
            }
            for _ in 0..20 {
                let color = sample_color(Some(mood), &mut rng);
                assert!(allowed.contains(&&color));
            }
        }
    }

    #[test]
    fn test_mood_angles_still_vary() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = generate_batch(
            20,
            GradientMode::Linear,
            Some(Mood::Calm),
            &LockedSlots::new(),
            &mut rng,
        );
        let first = batch[0].angle();
        assert!(batch.iter().any(|it| it.angle() != first));
    }

    #[test]
    fn test_sample_color_uses_both_anchors() {
        let mut rng = StdRng::seed_from_u64(8);
        let anchors = Mood::Sunset.anchors();
        let samples = (0..64)
            .map(|_| sample_color(Some(Mood::Sunset), &mut rng))
            .collect::<Vec<_>>();
        assert!(samples.contains(&anchors.start));
        assert!(samples.contains(&anchors.end));
    }

    #[test]
    fn test_random_pairs_have_visual_separation_or_were_repaired() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let ColorPair { start, end } = build_pair(None, &mut rng);

            // Replay the same draws to recover the unrepaired second color.
            let mut replay = StdRng::seed_from_u64(seed);
            let base = random_color(&mut replay);
            let strategy = HueStrategy::random(&mut replay);
            let rotated = rotate_hue(&base, strategy.degrees());

            assert_eq2!(start, base);
            if contrast(&base, &rotated) < MIN_VISUAL_SEPARATION_RATIO {
                assert_eq2!(end, darken(&rotated, CONTRAST_REPAIR_DARKEN_AMOUNT));
            } else {
                assert_eq2!(end, rotated);
            }
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(2024);
            generate_batch(6, GradientMode::Linear, None, &LockedSlots::new(), &mut rng)
                .into_iter()
                .map(|it| it.expression())
                .collect::<Vec<_>>()
        };
        assert_eq2!(run(), run());
    }

    #[test]
    fn test_contrast_is_idempotent() {
        let it = pair("#ff5f6d", "#2193b0");
        assert_eq2!(contrast(&it.start, &it.end), contrast(&it.start, &it.end));
    }
}
