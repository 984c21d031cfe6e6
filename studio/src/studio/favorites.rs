// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeSet;

use kv::Store;

use crate::{ColorPair, KVBucket, get_from_bucket, insert_into_bucket, is_key_contained_in_bucket,
            iterate_bucket, load_or_create_bucket_from_store, remove_from_bucket};

pub const FAVORITES_BUCKET_NAME: &str = "favorites";

/// Favorites are keyed by [`ColorPair::favorite_key`], so two gradients with the same
/// colors share one entry regardless of angle or mode.
pub struct FavoritesStore {
    bucket: KVBucket<'static, String, ColorPair>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore").finish_non_exhaustive()
    }
}

impl FavoritesStore {
    /// # Errors
    ///
    /// If the bucket can't be opened.
    pub fn open(store: &Store) -> miette::Result<Self> {
        let bucket = load_or_create_bucket_from_store(store, FAVORITES_BUCKET_NAME)?;
        Ok(Self { bucket })
    }

    /// Add the pair if absent, remove it if present. Returns `true` when the pair is a
    /// favorite afterwards.
    ///
    /// # Errors
    ///
    /// If the bucket can't be read or written.
    pub fn toggle(&self, colors: &ColorPair) -> miette::Result<bool> {
        let key = colors.favorite_key();
        if is_key_contained_in_bucket(&self.bucket, key.clone())? {
            remove_from_bucket(&self.bucket, key)?;
            Ok(false)
        } else {
            insert_into_bucket(&self.bucket, key, colors.clone())?;
            Ok(true)
        }
    }

    /// # Errors
    ///
    /// If the bucket can't be read.
    pub fn contains(&self, colors: &ColorPair) -> miette::Result<bool> {
        is_key_contained_in_bucket(&self.bucket, colors.favorite_key())
    }

    /// # Errors
    ///
    /// If the bucket can't be read.
    pub fn get(&self, key: &str) -> miette::Result<Option<ColorPair>> {
        get_from_bucket(&self.bucket, key.to_string())
    }

    /// All favorite keys, ready for [`crate::StudioAction::LoadFavorites`].
    #[must_use]
    pub fn keys(&self) -> BTreeSet<String> {
        let mut acc = BTreeSet::new();
        iterate_bucket(&self.bucket, |key, _: ColorPair| {
            acc.insert(key);
        });
        acc
    }

    /// All favorite pairs, in key order.
    #[must_use]
    pub fn list(&self) -> Vec<ColorPair> {
        let mut acc = vec![];
        iterate_bucket(&self.bucket, |_: String, value| acc.push(value));
        acc
    }
}
