//! Cookie Jar State Management
//!
//! This module manages the in-memory registry of jars served by the
//! jar service.

use super::bag::{Bag, CookieJar};
use super::helpers::jar_view;
use super::models::{JarView, TransferResponse};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Outcome of [`AppState::transfer`] when it cannot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Source and target name the same jar.
    SameJar,
    /// The named jar does not exist.
    UnknownJar(String),
}

/// Core application state containing every jar
#[derive(Default)]
pub struct AppState {
    /// In-memory storage for jars, keyed by jar_id.
    /// An entry lock covers the whole jar for the duration of one operation.
    pub jars: DashMap<String, CookieJar>,
}

impl AppState {
    /// Creates a new AppState with no jars
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves every cookie from `from_id` into `to_id`.
    ///
    /// Never holds two jar locks at once. Both views are taken while the
    /// respective jar is locked, so they reflect the moment of the move.
    pub fn transfer(&self, from_id: &str, to_id: &str) -> Result<TransferResponse, TransferError> {
        if from_id == to_id {
            return Err(TransferError::SameJar);
        }
        if !self.jars.contains_key(to_id) {
            return Err(TransferError::UnknownJar(to_id.to_string()));
        }

        let (in_transit, from) = self.take_contents(from_id)?;
        let (moved, to) = self.deposit(from_id, to_id, in_transit)?;

        debug!("Moved {} cookie(s) from {} to {}", moved, from_id, to_id);
        Ok(TransferResponse { moved, from, to })
    }

    /// Empties `jar_id` in one step, returning its former contents and the
    /// now-empty view.
    pub fn take_contents(&self, jar_id: &str) -> Result<(CookieJar, JarView), TransferError> {
        let mut jar = self
            .jars
            .get_mut(jar_id)
            .ok_or_else(|| TransferError::UnknownJar(jar_id.to_string()))?;
        let contents = std::mem::take(&mut *jar);
        Ok((contents, jar_view(jar_id, &jar)))
    }

    /// Puts `cookies` into `to_id`, returning how many moved and the target view.
    ///
    /// When the target no longer exists the cookies go back to `from_id`,
    /// provided that jar still exists; otherwise they are dropped.
    pub fn deposit(
        &self,
        from_id: &str,
        to_id: &str,
        cookies: CookieJar,
    ) -> Result<(usize, JarView), TransferError> {
        let moved = cookies.count();

        if let Some(mut target) = self.jars.get_mut(to_id) {
            target.extend(cookies);
            return Ok((moved, jar_view(to_id, &target)));
        }

        match self.jars.get_mut(from_id) {
            Some(mut source) => {
                warn!("Jar {} vanished during transfer, returning cookies to {}", to_id, from_id);
                source.extend(cookies);
            }
            None => warn!(
                "Jars {} and {} both vanished during transfer, {} cookie(s) lost",
                from_id, to_id, moved
            ),
        }
        Err(TransferError::UnknownJar(to_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jar::models::{Cookie, CookieFlavor};

    fn state_with(jar_id: &str, flavors: &[CookieFlavor]) -> AppState {
        let state = AppState::new();
        state.jars.insert(
            jar_id.into(),
            flavors.iter().copied().map(Cookie::new).collect(),
        );
        state
    }

    #[test]
    fn test_transfer_between_jars() {
        let state = state_with("a", &[CookieFlavor::Fortune, CookieFlavor::Stroopwafel]);
        state.jars.insert("b".into(), CookieJar::new());

        let response = state.transfer("a", "b").unwrap();

        assert_eq!(response.moved, 2);
        assert_eq!(response.from.count, 0);
        assert_eq!(response.to.count, 2);
        assert_eq!(response.to.jar_id, "b");
        assert!(state.jars.get("a").unwrap().is_empty());
        assert_eq!(state.jars.get("b").unwrap().count(), 2);
    }

    #[test]
    fn test_transfer_rejects_same_or_unknown_jar() {
        let state = state_with("a", &[CookieFlavor::Fortune]);

        assert_eq!(state.transfer("a", "a").unwrap_err(), TransferError::SameJar);
        assert_eq!(
            state.transfer("a", "missing").unwrap_err(),
            TransferError::UnknownJar("missing".into())
        );
        assert_eq!(
            state.transfer("missing", "a").unwrap_err(),
            TransferError::UnknownJar("missing".into())
        );
        assert_eq!(state.jars.get("a").unwrap().count(), 1);
    }

    #[test]
    fn test_cookies_return_when_target_vanishes() {
        let state = state_with("a", &[CookieFlavor::Fortune, CookieFlavor::ChocolateChip]);
        state.jars.insert("b".into(), CookieJar::new());

        let (in_transit, from) = state.take_contents("a").unwrap();
        assert_eq!(from.count, 0);
        state.jars.remove("b");

        let err = state.deposit("a", "b", in_transit).unwrap_err();

        assert_eq!(err, TransferError::UnknownJar("b".into()));
        assert_eq!(state.jars.get("a").unwrap().count(), 2);
        assert!(!state.jars.contains_key("b"));
    }

    #[test]
    fn test_deleted_source_is_not_recreated() {
        let state = state_with("a", &[CookieFlavor::Stroopwafel]);
        state.jars.insert("b".into(), CookieJar::new());

        let (in_transit, _) = state.take_contents("a").unwrap();
        state.jars.remove("a");
        state.jars.remove("b");

        assert!(state.deposit("a", "b", in_transit).is_err());
        assert!(state.jars.is_empty());
    }
}
