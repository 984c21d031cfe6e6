// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use kv::Store;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Angle, ColorPair, GradientDescriptor, GradientMode, KVBucket, Mood,
            insert_into_bucket, is_key_contained_in_bucket, iterate_bucket,
            load_or_create_bucket_from_store};

pub const LIBRARY_BUCKET_NAME: &str = "library";

/// What is persisted for a saved gradient. Everything else on a
/// [`GradientDescriptor`] is derived from these fields when it is loaded again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGradient {
    pub id: Uuid,
    pub colors: ColorPair,
    pub angle: Angle,
    pub mode: GradientMode,
    pub mood: Option<Mood>,
    pub saved_at: DateTime<Utc>,
}

impl SavedGradient {
    #[must_use]
    pub fn from_descriptor(gradient: &GradientDescriptor, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: gradient.id(),
            colors: gradient.colors().clone(),
            angle: gradient.angle(),
            mode: gradient.mode(),
            mood: gradient.mood(),
            saved_at,
        }
    }

    /// Loaded gradients are never locked.
    #[must_use]
    pub fn to_descriptor(&self) -> GradientDescriptor {
        GradientDescriptor::from_parts(
            self.id,
            self.saved_at,
            self.colors.clone(),
            self.angle,
            self.mode,
            self.mood,
            false,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

pub struct GradientLibrary {
    bucket: KVBucket<'static, String, SavedGradient>,
}

impl std::fmt::Debug for GradientLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientLibrary").finish_non_exhaustive()
    }
}

impl GradientLibrary {
    /// # Errors
    ///
    /// If the bucket can't be opened.
    pub fn open(store: &Store) -> miette::Result<Self> {
        let bucket = load_or_create_bucket_from_store(store, LIBRARY_BUCKET_NAME)?;
        Ok(Self { bucket })
    }

    /// Saving the same gradient (same id) twice leaves the first record alone.
    ///
    /// # Errors
    ///
    /// If the bucket can't be read or written.
    pub fn save(&self, gradient: &GradientDescriptor) -> miette::Result<SaveOutcome> {
        let key = gradient.id().to_string();
        if is_key_contained_in_bucket(&self.bucket, key.clone())? {
            return Ok(SaveOutcome::AlreadySaved);
        }
        insert_into_bucket(
            &self.bucket,
            key,
            SavedGradient::from_descriptor(gradient, Utc::now()),
        )?;
        Ok(SaveOutcome::Saved)
    }

    /// Returns how many gradients were newly saved.
    ///
    /// # Errors
    ///
    /// Stops at the first gradient that can't be saved.
    pub fn save_batch(&self, gradients: &[GradientDescriptor]) -> miette::Result<usize> {
        let mut saved = 0;
        for gradient in gradients {
            if self.save(gradient)? == SaveOutcome::Saved {
                saved += 1;
            }
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "💾 save batch",
            requested = %gradients.len(),
            saved = %saved
        );

        Ok(saved)
    }

    /// Oldest first.
    #[must_use]
    pub fn list(&self) -> Vec<GradientDescriptor> {
        let mut records: Vec<SavedGradient> = vec![];
        iterate_bucket(&self.bucket, |_: String, record| records.push(record));
        records.sort_by_key(|it| it.saved_at);
        records.iter().map(SavedGradient::to_descriptor).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use serial_test::serial;

    use super::*;
    use crate::{LockedSlots, assert_eq2, generate_batch, load_or_create_store,
                try_create_temp_dir};

    #[test]
    #[serial]
    fn test_save_is_deduplicated_by_id() -> miette::Result<()> {
        let temp_dir = try_create_temp_dir()?;
        let path = temp_dir.join("db").to_string_lossy().to_string();
        let store = load_or_create_store(Some(&path))?;
        let library = GradientLibrary::open(&store)?;

        let gradient = GradientDescriptor::new(
            Mood::Ocean.anchors(),
            Angle::new(200),
            GradientMode::Radial,
            Some(Mood::Ocean),
            true,
        );

        assert_eq2!(library.save(&gradient)?, SaveOutcome::Saved);
        assert_eq2!(library.save(&gradient)?, SaveOutcome::AlreadySaved);

        let list = library.list();
        assert_eq2!(list.len(), 1);
        let loaded = &list[0];
        assert_eq2!(loaded.id(), gradient.id());
        assert_eq2!(loaded.colors(), gradient.colors());
        assert_eq2!(loaded.angle(), gradient.angle());
        assert_eq2!(loaded.mode(), GradientMode::Radial);
        assert_eq2!(loaded.mood(), Some(Mood::Ocean));
        assert_eq2!(loaded.expression(), gradient.expression());
        assert_eq2!(loaded.contrast_ratio(), gradient.contrast_ratio());
        assert!(!loaded.locked());
        assert_eq2!(format!("{library:?}"), "GradientLibrary { .. }");

        Ok(())
    }

    #[test]
    #[serial]
    fn test_save_batch_and_reopen() -> miette::Result<()> {
        let temp_dir = try_create_temp_dir()?;
        let path = temp_dir.join("db").to_string_lossy().to_string();
        let mut rng = StdRng::seed_from_u64(7);
        let batch = generate_batch(5, GradientMode::Linear, None, &LockedSlots::new(), &mut rng);

        {
            let store = load_or_create_store(Some(&path))?;
            let library = GradientLibrary::open(&store)?;
            assert_eq2!(library.save_batch(&batch)?, 5);
            assert_eq2!(library.save_batch(&batch[..2])?, 0);
        }

        let store = load_or_create_store(Some(&path))?;
        let library = GradientLibrary::open(&store)?;
        let list = library.list();
        assert_eq2!(list.len(), 5);
        for it in &batch {
            assert!(list.iter().any(|loaded| loaded.id() == it.id()));
        }
        assert!(list.windows(2).all(|w| w[0].created_at() <= w[1].created_at()));

        Ok(())
    }
}
