//! Sentinel placeholder detection.
//!
//! The template ships values such as `YOUR_MAPS_API_KEY_HERE` or
//! `https://YOUR_PROJECT_ID-default-rtdb.firebaseio.com`. Any value still
//! carrying one of these markers means the file was copied but never filled in.

use crate::constants::{PLACEHOLDER_PREFIX, PLACEHOLDER_PROJECT_ID, PLACEHOLDER_SUFFIX};

/// Returns `true` if `value` is an unfilled template sentinel.
pub fn is_placeholder(value: &str) -> bool {
    (value.starts_with(PLACEHOLDER_PREFIX) && value.ends_with(PLACEHOLDER_SUFFIX))
        || value.contains(PLACEHOLDER_PROJECT_ID)
}
