//! Bag abstraction and its hash-backed jar implementation
//!
//! A bag is an unordered collection that allows several items of the same
//! category and can always tell how many items it holds. Reaching into a
//! jar gives you *some* cookie; which one is unspecified.

use super::models::{Category, CookieFlavor, Item};
use std::collections::HashMap;
use uuid::Uuid;

/// Capability contract shared by every bag implementation.
pub trait Bag<C: Category> {
    /// Number of items currently held.
    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Adds `item`. An item whose identity is already present is absorbed
    /// without changing the count.
    fn insert(&mut self, item: Item<C>);

    /// Takes out an arbitrary item, or `None` when the bag is empty.
    fn remove(&mut self) -> Option<Item<C>>;

    /// One glyph per item, in whatever order the backing store yields.
    fn describe(&self) -> String;
}

/// Hash-backed bag keyed by item identity.
#[derive(Debug, Clone)]
pub struct Jar<C> {
    items: HashMap<Uuid, Item<C>>,
}

/// The jar the rest of the crate deals in.
pub type CookieJar = Jar<CookieFlavor>;

impl<C> Default for Jar<C> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<C: Category> Jar<C> {
    /// Creates an empty jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates the contained items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Item<C>> {
        self.items.values()
    }

    /// Number of items per category. Categories with no items are absent.
    pub fn tally(&self) -> HashMap<C, usize> {
        let mut tally = HashMap::new();
        for item in self.items.values() {
            *tally.entry(item.category()).or_insert(0) += 1;
        }
        tally
    }
}

impl<C: Category> Bag<C> for Jar<C> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, item: Item<C>) {
        self.items.entry(item.id()).or_insert(item);
    }

    fn remove(&mut self) -> Option<Item<C>> {
        let id = *self.items.keys().next()?;
        self.items.remove(&id)
    }

    fn describe(&self) -> String {
        self.items.values().map(|item| item.category().glyph()).collect()
    }
}

impl<C> IntoIterator for Jar<C> {
    type Item = Item<C>;
    type IntoIter = std::collections::hash_map::IntoValues<Uuid, Item<C>>;

    /// Empties the jar in one pass, in unspecified order.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl<C: Category> FromIterator<Item<C>> for Jar<C> {
    fn from_iter<I: IntoIterator<Item = Item<C>>>(iter: I) -> Self {
        let mut jar = Jar::new();
        jar.extend(iter);
        jar
    }
}

impl<C: Category> Extend<Item<C>> for Jar<C> {
    fn extend<I: IntoIterator<Item = Item<C>>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jar::models::Cookie;
    use CookieFlavor::*;

    fn jar_of(flavors: &[CookieFlavor]) -> CookieJar {
        flavors.iter().copied().map(Cookie::new).collect()
    }

    #[test]
    fn test_new_jar_is_empty() {
        let mut jar = CookieJar::new();
        assert_eq!(jar.count(), 0);
        assert!(jar.is_empty());
        assert_eq!(jar.describe(), "");
        assert!(jar.remove().is_none());
    }

    #[test]
    fn test_count_tracks_inserts_minus_removes() {
        let mut jar = CookieJar::new();
        for n in 1..=5 {
            jar.insert(Cookie::new(Fortune));
            assert_eq!(jar.count(), n);
        }

        for k in 1..=3 {
            assert!(jar.remove().is_some());
            assert_eq!(jar.count(), 5 - k);
        }
        assert!(!jar.is_empty());
    }

    #[test]
    fn test_remove_on_empty_is_a_no_op() {
        let mut jar = jar_of(&[Stroopwafel]);
        assert!(jar.remove().is_some());

        assert!(jar.remove().is_none());
        assert!(jar.remove().is_none());
        assert_eq!(jar.count(), 0);
        assert!(jar.is_empty());
    }

    #[test]
    fn test_insert_then_remove_keeps_flavor() {
        let mut jar = CookieJar::new();
        jar.insert(Cookie::new(Stroopwafel));

        let cookie = jar.remove().expect("jar should hold one cookie");
        assert_eq!(cookie.category(), Stroopwafel);
        assert!(jar.is_empty());
    }

    #[test]
    fn test_duplicate_identity_is_absorbed() {
        let mut jar = CookieJar::new();
        let cookie = Cookie::new(ChocolateChip);

        jar.insert(cookie.clone());
        jar.insert(cookie);
        assert_eq!(jar.count(), 1);
    }

    #[test]
    fn test_describe_has_one_glyph_per_cookie() {
        let jar = jar_of(&[ChocolateChip, Fortune]);
        let described = jar.describe();

        assert_eq!(described.chars().count(), 2);
        assert!(described.contains('🍪'));
        assert!(described.contains('🥠'));
        assert!(described.chars().all(|c| c == '🍪' || c == '🥠'));
    }

    #[test]
    fn test_tally_counts_per_flavor() {
        let jar = jar_of(&[ChocolateChip, Stroopwafel, ChocolateChip]);
        let tally = jar.tally();

        assert_eq!(tally.get(&ChocolateChip), Some(&2));
        assert_eq!(tally.get(&Stroopwafel), Some(&1));
        assert_eq!(tally.get(&Fortune), None);
        assert_eq!(jar.iter().count(), 3);
    }

    #[test]
    fn test_into_iter_then_extend_moves_every_cookie() {
        let source: CookieJar = (0..5_000)
            .map(|n| Cookie::new(CookieFlavor::ALL[n % 3]))
            .collect();
        let expected = source.tally();
        let mut target = jar_of(&[Fortune]);

        target.extend(source);

        assert_eq!(target.count(), 5_001);
        let mut tally = target.tally();
        *tally.entry(Fortune).or_insert(0) -= 1;
        assert_eq!(tally, expected);
    }

    #[test]
    fn test_usable_through_trait_object() {
        let mut jar = CookieJar::new();
        let bag: &mut dyn Bag<CookieFlavor> = &mut jar;

        bag.insert(Cookie::new(Fortune));
        assert_eq!(bag.count(), 1);
        assert_eq!(bag.describe(), "🥠");
    }
}
