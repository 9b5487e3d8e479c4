//! Cookie Jar Business Logic Helpers
//!
//! This module contains helper functions for moving cookies between jars
//! and for rendering jar contents.

use super::bag::{Bag, CookieJar, Jar};
use super::models::{Category, JarView};
use uuid::Uuid;

/// Returns the provided `jar_id` or creates a new UUID string when `None`.
pub fn get_or_create_jar_id(jar_id: Option<String>) -> String {
    jar_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Moves every item from `from` into `to`, one removal at a time.
///
/// Returns how many items were moved. `from` is empty afterwards.
/// Between two concrete `Jar`s, `to.extend(from)` does the same in one pass.
pub fn transfer_all<C, A, B>(from: &mut A, to: &mut B) -> usize
where
    C: Category,
    A: Bag<C> + ?Sized,
    B: Bag<C> + ?Sized,
{
    let mut moved = 0;
    while let Some(item) = from.remove() {
        to.insert(item);
        moved += 1;
    }
    moved
}

/// Produces a human-readable one-line summary of a jar's contents.
///
/// Flavors appear in their declared order and zero counts are skipped.
/// Example output: `"2x Chocolate Chip, 1x Fortune"`; an empty jar gives
/// `"empty"`.
pub fn format_jar_summary<C: Category>(jar: &Jar<C>) -> String {
    let tally = jar.tally();
    let parts: Vec<String> = C::ALL
        .iter()
        .filter_map(|category| {
            tally
                .get(category)
                .map(|n| format!("{}x {}", n, category.label()))
        })
        .collect();

    if parts.is_empty() {
        "empty".to_string()
    } else {
        parts.join(", ")
    }
}

/// Builds the public snapshot of a jar
pub fn jar_view(jar_id: &str, jar: &CookieJar) -> JarView {
    JarView {
        jar_id: jar_id.to_string(),
        count: jar.count(),
        is_empty: jar.is_empty(),
        emojis: jar.describe(),
        summary: format_jar_summary(jar),
    }
}
