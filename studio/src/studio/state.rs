// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything the presentation layer knows, in one value.
//!
//! [`reduce`] takes the current [`StudioState`] and a [`StudioAction`] and returns the
//! next state. It never mutates its input. The sampler is called as a pure function of
//! the state, so no sampler-side state exists anywhere.

use std::{collections::BTreeSet, ops::RangeInclusive};

use rand::Rng;
use serde::Serialize;

use crate::{GradientDescriptor, GradientMode, LockedSlots, Mood, generate_batch, mood_name,
            regenerate_one};

pub const DEFAULT_COUNT: usize = 20;

/// What a user may pick for the number of cards. The sampler itself accepts more.
pub const COUNT_RANGE: RangeInclusive<usize> = 4..=50;

/// `0` turns auto regeneration off.
pub const ANIMATION_SPEED_RANGE: RangeInclusive<u8> = 0..=5;

#[derive(Debug, Clone, PartialEq)]
pub struct StudioState {
    count: usize,
    mode: GradientMode,
    mood: Option<Mood>,
    locked_slots: LockedSlots,
    favorites: BTreeSet<String>,
    gradients: Vec<GradientDescriptor>,
    animation_speed: u8,
    search_term: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudioAction {
    GenerateAll,
    RegenerateSlot(usize),
    /// Timer tick. Picks one unlocked slot at random.
    AutoRegenerateRandomSlot,
    SetCount(usize),
    SetMode(GradientMode),
    SetMood(Option<Mood>),
    ToggleLock(usize),
    ToggleFavorite(usize),
    /// Replace the favorite keys, eg: with what was loaded from disk.
    LoadFavorites(BTreeSet<String>),
    /// Show saved gradients instead of fresh ones, up to `count` of them. Clears locks.
    LoadSaved(Vec<GradientDescriptor>),
    SetAnimationSpeed(u8),
    SetSearch(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StudioStats {
    pub total: usize,
    pub visible: usize,
    pub accessible: usize,
    pub locked: usize,
    pub favorites: usize,
}

impl Default for StudioState {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            mode: GradientMode::default(),
            mood: None,
            locked_slots: LockedSlots::new(),
            favorites: BTreeSet::new(),
            gradients: Vec::new(),
            animation_speed: 0,
            search_term: String::new(),
        }
    }
}

impl StudioState {
    /// Settings applied (and clamped), then a first batch generated.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        mode: GradientMode,
        mood: Option<Mood>,
        rng: &mut R,
    ) -> Self {
        let it = Self {
            count: clamp_count(count),
            mode,
            mood,
            ..Self::default()
        };
        reduce(&it, &StudioAction::GenerateAll, rng)
    }

    #[must_use]
    pub fn count(&self) -> usize { self.count }

    #[must_use]
    pub fn mode(&self) -> GradientMode { self.mode }

    #[must_use]
    pub fn mood(&self) -> Option<Mood> { self.mood }

    #[must_use]
    pub fn locked_slots(&self) -> &LockedSlots { &self.locked_slots }

    #[must_use]
    pub fn favorites(&self) -> &BTreeSet<String> { &self.favorites }

    #[must_use]
    pub fn gradients(&self) -> &[GradientDescriptor] { &self.gradients }

    #[must_use]
    pub fn animation_speed(&self) -> u8 { self.animation_speed }

    #[must_use]
    pub fn search_term(&self) -> &str { &self.search_term }

    #[must_use]
    pub fn is_favorite(&self, gradient: &GradientDescriptor) -> bool {
        self.favorites.contains(&gradient.favorite_key())
    }

    #[must_use]
    pub fn is_locked(&self, slot: usize) -> bool { self.locked_slots.contains_key(&slot) }

    /// Slots matching the search term, with their index. An empty term matches all.
    ///
    /// A gradient matches if either hex value contains the term (case insensitive), its
    /// contrast text (eg: `4.48`) contains it, the word "accessible" contains it and the
    /// gradient is accessible, or its mood name contains it.
    #[must_use]
    pub fn visible_gradients(&self) -> Vec<(usize, &GradientDescriptor)> {
        self.gradients
            .iter()
            .enumerate()
            .filter(|(_, it)| matches_search(it, &self.search_term))
            .collect()
    }

    #[must_use]
    pub fn favorites_only(&self) -> Vec<(usize, &GradientDescriptor)> {
        self.gradients
            .iter()
            .enumerate()
            .filter(|(_, it)| self.is_favorite(it))
            .collect()
    }

    #[must_use]
    pub fn accessible_only(&self) -> Vec<(usize, &GradientDescriptor)> {
        self.gradients
            .iter()
            .enumerate()
            .filter(|(_, it)| it.accessible())
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> StudioStats {
        StudioStats {
            total: self.gradients.len(),
            visible: self.visible_gradients().len(),
            accessible: self.gradients.iter().filter(|it| it.accessible()).count(),
            locked: self.gradients.iter().filter(|it| it.locked()).count(),
            favorites: self.favorites.len(),
        }
    }

    fn regenerate_all<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.gradients =
            generate_batch(self.count, self.mode, self.mood, &self.locked_slots, rng);
        self
    }

    fn regenerate_slot<R: Rng + ?Sized>(mut self, slot: usize, rng: &mut R) -> Self {
        if let Some(it) = self.gradients.get_mut(slot) {
            *it = regenerate_one(slot, self.mode, self.mood, &self.locked_slots, rng);
        }
        self
    }
}

/// Returns the next state. Out of range slot indices leave the state unchanged.
pub fn reduce<R: Rng + ?Sized>(
    state: &StudioState,
    action: &StudioAction,
    rng: &mut R,
) -> StudioState {
    let next = state.clone();

    // % is Display, ? is Debug.
    tracing::debug!(message = "reduce", action = ?action);

    match action {
        StudioAction::GenerateAll => next.regenerate_all(rng),

        StudioAction::RegenerateSlot(slot) => next.regenerate_slot(*slot, rng),

        StudioAction::AutoRegenerateRandomSlot => {
            let unlocked = (0..next.gradients.len())
                .filter(|slot| !next.is_locked(*slot))
                .collect::<Vec<_>>();
            if unlocked.is_empty() {
                return next;
            }
            let slot = unlocked[rng.random_range(0..unlocked.len())];
            next.regenerate_slot(slot, rng)
        }

        StudioAction::SetCount(count) => StudioState {
            count: clamp_count(*count),
            ..next
        }
        .regenerate_all(rng),

        StudioAction::SetMode(mode) => StudioState {
            mode: *mode,
            ..next
        }
        .regenerate_all(rng),

        StudioAction::SetMood(mood) => StudioState {
            mood: *mood,
            ..next
        }
        .regenerate_all(rng),

        StudioAction::ToggleLock(slot) => {
            let mut next = next;
            let Some(current) = next.gradients.get(*slot) else {
                return next;
            };
            let replacement = if next.locked_slots.remove(slot).is_some() {
                current.with_locked(false)
            } else {
                next.locked_slots.insert(*slot, current.colors().clone());
                current.with_locked(true)
            };
            next.gradients[*slot] = replacement;
            next
        }

        StudioAction::ToggleFavorite(slot) => {
            let mut next = next;
            let Some(key) = next.gradients.get(*slot).map(GradientDescriptor::favorite_key)
            else {
                return next;
            };
            if !next.favorites.remove(&key) {
                next.favorites.insert(key);
            }
            next
        }

        StudioAction::LoadFavorites(favorites) => StudioState {
            favorites: favorites.clone(),
            ..next
        },

        StudioAction::LoadSaved(saved) => StudioState {
            locked_slots: LockedSlots::new(),
            gradients: saved
                .iter()
                .take(next.count)
                .map(|it| it.with_locked(false))
                .collect(),
            ..next
        },

        StudioAction::SetAnimationSpeed(speed) => StudioState {
            animation_speed: (*speed).clamp(
                *ANIMATION_SPEED_RANGE.start(),
                *ANIMATION_SPEED_RANGE.end(),
            ),
            ..next
        },

        StudioAction::SetSearch(term) => StudioState {
            search_term: term.clone(),
            ..next
        },
    }
}

fn clamp_count(count: usize) -> usize {
    count.clamp(*COUNT_RANGE.start(), *COUNT_RANGE.end())
}

fn matches_search(gradient: &GradientDescriptor, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let lower = term.to_lowercase();
    let colors = gradient.colors();
    colors.start.as_str().to_lowercase().contains(&lower)
        || colors.end.as_str().to_lowercase().contains(&lower)
        || gradient.contrast_text().contains(term)
        || (gradient.accessible() && "accessible".contains(&lower))
        || mood_name(gradient.mood()).contains(&lower)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{Angle, ColorPair, assert_eq2};

    fn rng() -> StdRng { StdRng::seed_from_u64(17) }

    fn pair(a: &str, b: &str) -> ColorPair {
        ColorPair::new(a.parse().unwrap(), b.parse().unwrap())
    }

    fn fixed(a: &str, b: &str, mood: Option<Mood>) -> GradientDescriptor {
        GradientDescriptor::new(pair(a, b), Angle::new(45), GradientMode::Linear, mood, false)
    }

    #[test]
    fn test_new_generates_default_count() {
        let state = StudioState::new(DEFAULT_COUNT, GradientMode::Linear, None, &mut rng());
        assert_eq2!(state.gradients().len(), 20);
        assert_eq2!(state.animation_speed(), 0);
        assert!(state.locked_slots().is_empty());
    }

    #[test]
    fn test_count_is_clamped_to_ui_bounds() {
        let mut rng = rng();
        let state = StudioState::new(DEFAULT_COUNT, GradientMode::Linear, None, &mut rng);
        let small = reduce(&state, &StudioAction::SetCount(1), &mut rng);
        assert_eq2!(small.count(), 4);
        assert_eq2!(small.gradients().len(), 4);
        let big = reduce(&state, &StudioAction::SetCount(500), &mut rng);
        assert_eq2!(big.gradients().len(), 50);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let mut rng = rng();
        let state = StudioState::new(6, GradientMode::Linear, None, &mut rng);
        let snapshot = state.clone();
        let next = reduce(&state, &StudioAction::GenerateAll, &mut rng);
        assert_eq2!(state, snapshot);
        assert_ne!(next.gradients(), state.gradients());
    }

    #[test]
    fn test_toggle_lock_pins_current_colors_across_mood_change() {
        let mut rng = rng();
        let state = StudioState::new(6, GradientMode::Linear, None, &mut rng);
        let pinned = state.gradients()[2].colors().clone();

        let locked = reduce(&state, &StudioAction::ToggleLock(2), &mut rng);
        assert!(locked.gradients()[2].locked());
        assert_eq2!(locked.locked_slots().get(&2), Some(&pinned));

        let moody = reduce(&locked, &StudioAction::SetMood(Some(Mood::Dark)), &mut rng);
        assert_eq2!(moody.gradients()[2].colors(), &pinned);
        assert!(moody.gradients()[2].locked());
        assert_eq2!(moody.gradients()[0].colors(), &Mood::Dark.anchors());

        let unlocked = reduce(&moody, &StudioAction::ToggleLock(2), &mut rng);
        assert!(!unlocked.gradients()[2].locked());
        assert!(unlocked.locked_slots().is_empty());
    }

    #[test]
    fn test_locked_flag_matches_lock_set_after_every_action() {
        let mut rng = rng();
        let mut state = StudioState::new(8, GradientMode::Radial, None, &mut rng);
        let actions = [
            StudioAction::ToggleLock(1),
            StudioAction::ToggleLock(5),
            StudioAction::GenerateAll,
            StudioAction::RegenerateSlot(1),
            StudioAction::AutoRegenerateRandomSlot,
            StudioAction::SetMode(GradientMode::Linear),
            StudioAction::ToggleLock(1),
            StudioAction::SetCount(10),
        ];
        for action in &actions {
            state = reduce(&state, action, &mut rng);
            for (slot, it) in state.gradients().iter().enumerate() {
                assert_eq2!(it.locked(), state.is_locked(slot));
            }
        }
    }

    #[test]
    fn test_auto_regenerate_skips_locked_slots() {
        let mut rng = rng();
        let mut state = StudioState::new(4, GradientMode::Linear, None, &mut rng);
        for slot in [0, 1, 3] {
            state = reduce(&state, &StudioAction::ToggleLock(slot), &mut rng);
        }
        let before = state.gradients().to_vec();

        let after = reduce(&state, &StudioAction::AutoRegenerateRandomSlot, &mut rng);
        for slot in [0, 1, 3] {
            assert_eq2!(after.gradients()[slot].id(), before[slot].id());
        }
        assert_ne!(after.gradients()[2].id(), before[2].id());
    }

    #[test]
    fn test_auto_regenerate_with_everything_locked_is_a_no_op() {
        let mut rng = rng();
        let mut state = StudioState::new(4, GradientMode::Linear, None, &mut rng);
        for slot in 0..4 {
            state = reduce(&state, &StudioAction::ToggleLock(slot), &mut rng);
        }
        let after = reduce(&state, &StudioAction::AutoRegenerateRandomSlot, &mut rng);
        assert_eq2!(after, state);
    }

    #[test]
    fn test_out_of_range_slots_are_ignored() {
        let mut rng = rng();
        let state = StudioState::new(4, GradientMode::Linear, None, &mut rng);
        for action in [
            StudioAction::RegenerateSlot(9),
            StudioAction::ToggleLock(9),
            StudioAction::ToggleFavorite(9),
        ] {
            assert_eq2!(reduce(&state, &action, &mut rng), state);
        }
    }

    #[test]
    fn test_toggle_favorite() {
        let mut rng = rng();
        let state = StudioState::new(4, GradientMode::Linear, None, &mut rng);
        let key = state.gradients()[0].favorite_key();

        let fav = reduce(&state, &StudioAction::ToggleFavorite(0), &mut rng);
        assert!(fav.favorites().contains(&key));
        assert_eq2!(fav.favorites_only().len(), 1);
        assert_eq2!(fav.stats().favorites, 1);

        let unfav = reduce(&fav, &StudioAction::ToggleFavorite(0), &mut rng);
        assert!(unfav.favorites().is_empty());
    }

    #[test]
    fn test_animation_speed_is_clamped_and_keeps_gradients() {
        let mut rng = rng();
        let state = StudioState::new(4, GradientMode::Linear, None, &mut rng);
        let next = reduce(&state, &StudioAction::SetAnimationSpeed(9), &mut rng);
        assert_eq2!(next.animation_speed(), 5);
        assert_eq2!(next.gradients(), state.gradients());
    }

    #[test]
    fn test_search() {
        let mut seed_rng = rng();
        let state = reduce(
            &StudioState::default(),
            &StudioAction::LoadSaved(vec![
                fixed("#000000", "#FFFFFF", None),
                fixed("#0F2027", "#203A43", Some(Mood::Dark)),
                fixed("#134E5E", "#71B280", Some(Mood::Nature)),
            ]),
            &mut seed_rng,
        );
        let search = |term: &str| {
            reduce(&state, &StudioAction::SetSearch(term.to_string()), &mut rng())
                .visible_gradients()
                .into_iter()
                .map(|(slot, _)| slot)
                .collect::<Vec<_>>()
        };

        assert_eq2!(search(""), vec![0, 1, 2]);
        assert_eq2!(search("#ffffff"), vec![0]);
        assert_eq2!(search("0f20"), vec![1]);
        assert_eq2!(search("21.00"), vec![0]);
        assert_eq2!(search("access"), vec![0]);
        assert_eq2!(search("nature"), vec![2]);
        assert_eq2!(search("random"), vec![0]);
        assert_eq2!(search("zzz"), Vec::<usize>::new());
    }

    #[test]
    fn test_load_saved_truncates_and_clears_locks() {
        let mut rng = rng();
        let state = StudioState::new(4, GradientMode::Linear, None, &mut rng);
        let state = reduce(&state, &StudioAction::ToggleLock(0), &mut rng);
        let saved = (0..6)
            .map(|_| fixed("#111111", "#222222", None).with_locked(true))
            .collect::<Vec<_>>();

        let next = reduce(&state, &StudioAction::LoadSaved(saved), &mut rng);
        assert_eq2!(next.gradients().len(), 4);
        assert!(next.locked_slots().is_empty());
        assert!(next.gradients().iter().all(|it| !it.locked()));
    }

    #[test]
    fn test_stats() {
        let mut rng = rng();
        let state = reduce(
            &StudioState::default(),
            &StudioAction::LoadSaved(vec![
                fixed("#000000", "#FFFFFF", None),
                fixed("#0F2027", "#203A43", Some(Mood::Dark)),
            ]),
            &mut rng,
        );
        let state = reduce(&state, &StudioAction::ToggleLock(1), &mut rng);
        let state = reduce(&state, &StudioAction::SetSearch("dark".into()), &mut rng);
        assert_eq2!(
            state.stats(),
            StudioStats {
                total: 2,
                visible: 1,
                accessible: 1,
                locked: 1,
                favorites: 0,
            }
        );
        assert_eq2!(state.accessible_only().len(), 1);
    }
}
