// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Type-checked field reads over raw JSON objects.
//!
//! A field that is missing or has the wrong JSON type reads as `None` (or
//! the empty value); callers pick the default.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

pub(crate) fn string(obj: &Object, key: &str) -> Option<String> {
	obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

pub(crate) fn string_or_empty(obj: &Object, key: &str) -> String {
	string(obj, key).unwrap_or_default()
}

/// Non-negative integers that fit in `u32`. Floats, strings and negative
/// numbers are rejected.
pub(crate) fn uint(obj: &Object, key: &str) -> Option<u32> {
	obj.get(key)
		.and_then(Value::as_u64)
		.and_then(|n| u32::try_from(n).ok())
}

pub(crate) fn boolean(obj: &Object, key: &str) -> Option<bool> {
	obj.get(key).and_then(Value::as_bool)
}

/// String-valued entries of a nested object, in source order. Entries with
/// non-string values are dropped.
pub(crate) fn string_map(obj: &Object, key: &str) -> IndexMap<String, String> {
	obj.get(key)
		.and_then(Value::as_object)
		.map(|map| {
			map.iter()
				.filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_owned())))
				.collect()
		})
		.unwrap_or_default()
}

/// Reads a field as a sequence of `T` without per-field defaults.
///
/// Absent or `null` is `None`; a lone object is treated as a one-element
/// sequence. Elements that fail to deserialize are skipped, the rest keep
/// their order. A lone object that fails, or any other JSON type, is `None`.
pub(crate) fn records<T: DeserializeOwned>(value: Option<&Value>) -> Option<Vec<T>> {
	let value = value?;
	match value {
		Value::Array(items) => Some(
			items
				.iter()
				.filter_map(|item| T::deserialize(item).ok())
				.collect(),
		),
		Value::Object(_) => T::deserialize(value).ok().map(|record| vec![record]),
		_ => None,
	}
}
