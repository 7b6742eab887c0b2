// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Book name resolution.
//!
//! A canonical id passes straight through: if it names nothing, the store
//! simply returns no rows and the caller reports that. A display name goes
//! through the store's distinct-value alias lookup and has to land on exactly
//! one canonical id. No prefix matching, no edit distance, no guessing.

use tracing::{debug, warn};

use crate::error::{LookupError, Result};
use crate::store::VerseStore;
use crate::types::BookRef;

/// Resolve `book` to the canonical id the store keys rows by.
///
/// # Errors
///
/// - [`LookupError::BookNotFound`] if no row carries the display name
/// - [`LookupError::AmbiguousBook`] if the display name maps to more than one
///   canonical id
/// - [`LookupError::Store`] if the lookup itself fails
pub fn resolve_book<S: VerseStore + ?Sized>(store: &S, book: &BookRef) -> Result<String> {
    let name = match book {
        BookRef::Canonical(id) => return Ok(id.clone()),
        BookRef::DisplayName(name) => name,
    };

    let mut candidates = store.canonical_ids_for(name)?;
    candidates.sort();
    candidates.dedup();

    match candidates.len() {
        0 => Err(LookupError::BookNotFound(name.clone())),
        1 => {
            let id = candidates.remove(0);
            debug!(display_name = %name, canonical = %id, "resolved book");
            Ok(id)
        }
        _ => {
            warn!(display_name = %name, ?candidates, "display name maps to several books");
            Err(LookupError::AmbiguousBook {
                name: name.clone(),
                candidates,
            })
        }
    }
}
