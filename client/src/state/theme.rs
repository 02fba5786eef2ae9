//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! `ThemeStore` owns the current `ThemeMode`, the persisted preference, and
//! the document-root marker. One store is built by `ThemeProvider` and shared
//! through Leptos context; components reach it through `use_theme`, which
//! fails with `OutOfScopeError` when no provider encloses the caller.
//!
//! Mode changes fan out synchronously to an explicit subscriber list. The
//! context bridges that list into an `RwSignal` so views re-render.
//!
//! The mutexes only exist to satisfy the `Send + Sync` bound on context
//! values; the UI event loop never contends on them.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::*;

/// Persisted-store key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Interpret a persisted value. Only the exact string `"dark"` selects
    /// dark mode; missing or unrecognized values mean light.
    #[must_use]
    pub fn from_persisted(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value store for the theme preference (browser `localStorage`).
///
/// Reads that fail are `None`; writes that fail are dropped.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Document-level flag that styling rules key off of.
pub trait RootMarker: Send + Sync {
    fn apply(&self, mode: ThemeMode);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(ThemeMode) + Send + Sync>;

// =============================================================================
// STORE
// =============================================================================

pub struct ThemeStore {
    mode: Mutex<ThemeMode>,
    initialized: AtomicBool,
    storage: Arc<dyn PreferenceStore>,
    marker: Arc<dyn RootMarker>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

impl ThemeStore {
    /// Build a store in light mode. Nothing is read until [`Self::initialize`].
    #[must_use]
    pub fn new(storage: Arc<dyn PreferenceStore>, marker: Arc<dyn RootMarker>) -> Self {
        Self {
            mode: Mutex::new(ThemeMode::Light),
            initialized: AtomicBool::new(false),
            storage,
            marker,
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Load the persisted preference. Only the first call reads storage;
    /// later calls return the live mode untouched.
    pub fn initialize(&self) -> ThemeMode {
        if self.initialized.swap(true, Ordering::AcqRel) {
            return self.current();
        }

        let stored = self.storage.load(THEME_STORAGE_KEY);
        let persisted = ThemeMode::from_persisted(stored.as_deref());
        if !persisted.is_dark() {
            log::debug!("theme: no dark preference stored ({stored:?})");
            return self.current();
        }

        let changed = {
            let mut mode = self.lock_mode();
            let changed = *mode != persisted;
            *mode = persisted;
            changed
        };
        if changed {
            self.marker.apply(persisted);
            self.notify(persisted);
        }
        log::debug!("theme: restored {persisted} preference");
        persisted
    }

    /// Flip the mode, update the root marker, persist, and notify every
    /// subscriber before returning the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = {
            let mut mode = self.lock_mode();
            *mode = mode.toggled();
            *mode
        };
        self.marker.apply(next);
        self.storage.save(THEME_STORAGE_KEY, next.as_str());
        self.notify(next);
        log::debug!("theme: toggled to {next}");
        next
    }

    #[must_use]
    pub fn current(&self) -> ThemeMode {
        *self.lock_mode()
    }

    /// Register a callback invoked with the new mode after every change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.lock_subscribers().push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.lock_subscribers();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock_subscribers().len()
    }

    fn notify(&self, mode: ThemeMode) {
        // Snapshot so callbacks may (un)subscribe without deadlocking.
        let snapshot: Vec<Subscriber> = self
            .lock_subscribers()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in snapshot {
            callback(mode);
        }
    }

    fn lock_mode(&self) -> MutexGuard<'_, ThemeMode> {
        self.mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Subscriber)>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("theme accessed outside of a ThemeProvider")]
pub struct OutOfScopeError;

/// Handle handed to components through Leptos context.
#[derive(Clone)]
pub struct ThemeContext {
    store: Arc<ThemeStore>,
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Reactive read; re-runs the enclosing view or effect on change.
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Untracked read of the live mode.
    pub fn current(&self) -> ThemeMode {
        self.store.current()
    }

    pub fn toggle(&self) -> ThemeMode {
        self.store.toggle()
    }

    pub fn store(&self) -> &Arc<ThemeStore> {
        &self.store
    }
}

/// Share `store` with the current owner's subtree.
///
/// The subscription that keeps the signal in sync is dropped when the owner
/// is cleaned up.
pub fn provide_theme(store: Arc<ThemeStore>) -> ThemeContext {
    let mode = RwSignal::new(store.current());
    let subscription = store.subscribe(move |next| {
        let _ = mode.try_set(next);
    });
    let cleanup_store = Arc::clone(&store);
    on_cleanup(move || {
        cleanup_store.unsubscribe(subscription);
    });

    let ctx = ThemeContext { store, mode };
    provide_context(ctx.clone());
    ctx
}

/// Look up the enclosing theme context.
///
/// # Errors
///
/// Returns `OutOfScopeError` when called outside a `ThemeProvider` subtree.
pub fn use_theme() -> Result<ThemeContext, OutOfScopeError> {
    use_context::<ThemeContext>().ok_or(OutOfScopeError)
}

/// # Errors
///
/// Returns `OutOfScopeError` when called outside a `ThemeProvider` subtree.
pub fn current_theme() -> Result<ThemeMode, OutOfScopeError> {
    use_theme().map(|ctx| ctx.current())
}

/// # Errors
///
/// Returns `OutOfScopeError` when called outside a `ThemeProvider` subtree.
pub fn toggle_theme() -> Result<ThemeMode, OutOfScopeError> {
    use_theme().map(|ctx| ctx.toggle())
}
