// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A thin wrapper around the [kv] crate, the embedded key/value store that holds the
//! favorites and the saved gradient library.
//!
//! - [`load_or_create_store`]
//! - [`load_or_create_bucket_from_store`]
//! - [`insert_into_bucket`]
//! - [`get_from_bucket`]
//! - [`remove_from_bucket`]
//! - [`is_key_contained_in_bucket`]
//! - [`iterate_bucket`]
//!
//! Errors are fine grained, using [miette] and [thiserror] (see [`KvErrorCouldNot`]).
//!
//! Values are stored as [JSON](kv::Json), so a saved library stays readable with any
//! JSON tool, and records written by an older version still decode if fields are only
//! ever added.
//!
//! [sled](https://github.com/spacejam/sled), which [kv] wraps, does not support access
//! from multiple processes at once. Only one `grad` process should touch the store at a
//! time.

use std::fmt::{Debug, Display};

use kv::{Config, Json, Store};
use miette::{Context, IntoDiagnostic};
use serde::{Serialize, de::DeserializeOwned};

/// A [`kv::Bucket`] is a named, typed section of a [Store]. Keys are not serialized,
/// values are JSON.
pub type KVBucket<'a, KeyT, ValueT> = kv::Bucket<'a, KeyT, Json<ValueT>>;

pub const DEFAULT_STORE_FOLDER_NAME: &str = "gradient_studio_db";

/// Open the store in `db_folder_path`, creating the folder if it doesn't exist.
///
/// # Errors
///
/// If the folder can't be created, or the store is corrupted or locked by another
/// process.
#[tracing::instrument]
pub fn load_or_create_store(maybe_db_folder_path: Option<&String>) -> miette::Result<Store> {
    let db_folder_path = maybe_db_folder_path
        .cloned()
        .unwrap_or_else(|| DEFAULT_STORE_FOLDER_NAME.to_string());

    let cfg = Config::new(db_folder_path.clone());

    let store = Store::new(cfg)
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::CreateDbFolder {
            db_folder_path: db_folder_path.clone(),
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📑 load or create a store",
        db_folder_path = %db_folder_path
    );

    Ok(store)
}

/// # Errors
///
/// If the bucket can't be created, or the store is inaccessible.
#[tracing::instrument(skip(store))]
pub fn load_or_create_bucket_from_store<'a, KeyT, ValueT>(
    store: &Store,
    bucket_name: &str,
) -> miette::Result<KVBucket<'a, KeyT, ValueT>>
where
    KeyT: for<'k> kv::Key<'k>,
    ValueT: Serialize + DeserializeOwned,
{
    let bucket: KVBucket<'_, KeyT, ValueT> = store
        .bucket(Some(bucket_name))
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::CreateBucketFromStore {
            bucket_name: bucket_name.to_string(),
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📦 load or create bucket from store",
        bucket_name = %bucket_name
    );

    Ok(bucket)
}

/// Overwrites any existing value for `key`. The write is flushed before returning.
///
/// # Errors
///
/// If the value can't be serialized, or the bucket can't be written to.
#[tracing::instrument(skip(bucket, value))]
pub fn insert_into_bucket<KeyT, ValueT>(
    bucket: &KVBucket<'_, KeyT, ValueT>,
    key: KeyT,
    value: ValueT,
) -> miette::Result<()>
where
    KeyT: Debug + Display + for<'k> kv::Key<'k>,
    ValueT: Debug + Serialize + DeserializeOwned,
{
    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔽 save key / value pair to bucket",
        key = %key,
        value = ?value
    );

    bucket
        .set(&key, &Json(value))
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::SaveKeyValuePairToBucket)?;

    bucket
        .flush()
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::SaveKeyValuePairToBucket)?;

    Ok(())
}

/// # Errors
///
/// If the bucket can't be read, or the stored value doesn't decode as `ValueT`.
#[tracing::instrument(skip(bucket))]
pub fn get_from_bucket<KeyT, ValueT>(
    bucket: &KVBucket<'_, KeyT, ValueT>,
    key: KeyT,
) -> miette::Result<Option<ValueT>>
where
    KeyT: Debug + Display + for<'k> kv::Key<'k>,
    ValueT: Debug + Serialize + DeserializeOwned,
{
    let maybe_value: Option<Json<ValueT>> = bucket
        .get(&key)
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::LoadKeyValuePairFromBucket)?;

    let it = maybe_value.map(|Json(payload)| payload);

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔼 load key / value pair from bucket",
        key = %key,
        value = ?it
    );

    Ok(it)
}

/// Returns the removed value, if there was one.
///
/// # Errors
///
/// If the bucket can't be written to.
#[tracing::instrument(skip(bucket))]
pub fn remove_from_bucket<KeyT, ValueT>(
    bucket: &KVBucket<'_, KeyT, ValueT>,
    key: KeyT,
) -> miette::Result<Option<ValueT>>
where
    KeyT: Debug + Display + for<'k> kv::Key<'k>,
    ValueT: Debug + Serialize + DeserializeOwned,
{
    let maybe_value: Option<Json<ValueT>> = bucket
        .remove(&key)
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::RemoveKeyValuePairFromBucket)?;

    bucket
        .flush()
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::RemoveKeyValuePairFromBucket)?;

    let it = maybe_value.map(|Json(payload)| payload);

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "❌ delete key / value pair from bucket",
        key = %key,
        value = ?it
    );

    Ok(it)
}

/// # Errors
///
/// If the bucket can't be read.
#[tracing::instrument(skip(bucket))]
pub fn is_key_contained_in_bucket<KeyT, ValueT>(
    bucket: &KVBucket<'_, KeyT, ValueT>,
    key: KeyT,
) -> miette::Result<bool>
where
    KeyT: Debug + Display + for<'k> kv::Key<'k>,
    ValueT: Debug + Serialize + DeserializeOwned,
{
    let it = bucket
        .contains(&key)
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::LoadKeyValuePairFromBucket)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔍 check if key is contained in bucket",
        key = %key,
        contained = %it
    );

    Ok(it)
}

/// Visit every entry in key order. Entries whose key or value can't be decoded are
/// skipped.
pub fn iterate_bucket<KeyT, ValueT>(
    bucket: &KVBucket<'_, KeyT, ValueT>,
    mut fn_to_apply: impl FnMut(KeyT, ValueT),
) where
    KeyT: Debug + Display + for<'k> kv::Key<'k>,
    ValueT: Debug + Serialize + DeserializeOwned,
{
    for item in /* keep only the Ok variants */ bucket.iter().flatten() {
        let Ok(key) = item.key::<KeyT>() else {
            continue;
        };
        let Ok(Json(value)) = item.value::<Json<ValueT>>() else {
            continue;
        };
        fn_to_apply(key, value);
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum KvErrorCouldNot {
    #[error("📑 Could not create db folder: '{db_folder_path}' on disk")]
    #[diagnostic(
        code(gradient_studio::kv::create_db_folder),
        help("Is another `grad` process running? Only one can open the store at a time")
    )]
    CreateDbFolder { db_folder_path: String },

    #[error("📦 Could not create bucket from store: '{bucket_name}'")]
    #[diagnostic(code(gradient_studio::kv::create_bucket))]
    CreateBucketFromStore { bucket_name: String },

    #[error("🔽 Could not save key/value pair to bucket")]
    #[diagnostic(code(gradient_studio::kv::save))]
    SaveKeyValuePairToBucket,

    #[error("🔼 Could not load key/value pair from bucket")]
    #[diagnostic(code(gradient_studio::kv::load))]
    LoadKeyValuePairFromBucket,

    #[error("❌ Could not remove key/value pair from bucket")]
    #[diagnostic(code(gradient_studio::kv::remove))]
    RemoveKeyValuePairFromBucket,
}
