//! The theme store
//!
//! [`ThemeStore`] owns the active [`ThemeConfig`] and the [`Theme`]
//! derived from it. Every change runs the same synchronous pipeline:
//! merge the change, regenerate the theme, apply it to the binding,
//! persist the config, then notify subscribers. Regeneration happens
//! before any state is touched, so an invalid change leaves the store
//! exactly as it was.
//!
//! Changes made from inside a subscriber callback are queued and run in
//! order once the current notification pass finishes, which keeps the
//! pipeline non-reentrant without dropping updates.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use storage::{KvStore, StorageError};
use theme_tokens::{
    generate_theme, Theme, ThemeConfig, ThemeConfigPatch, ThemeError, ThemeMode,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::binding::ThemeBinding;

/// Storage key the active configuration is persisted under
const CONFIG_KEY: &str = "theme:config";

/// Theme store error types
#[derive(Debug, Error)]
pub enum StateError {
    /// Theme generation failed, typically from an invalid seed color
    #[error("Theme generation failed: {0}")]
    Theme(#[from] ThemeError),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for theme store operations
pub type Result<T> = std::result::Result<T, StateError>;

/// Handle returned by [`ThemeStore::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Theme) + Send>;

struct ListenerSlot {
    id: u64,
    // Taken out while the callback runs so no lock is held across it
    callback: Option<Listener>,
}

struct CoreState {
    config: ThemeConfig,
    theme: Theme,
}

enum QueuedChange {
    Patch(ThemeConfigPatch),
    Replace(ThemeConfig),
    Toggle,
}

/// Owns the active theme and drives the change pipeline
pub struct ThemeStore {
    state: Mutex<CoreState>,
    binding: Mutex<Box<dyn ThemeBinding>>,
    storage: KvStore,
    listeners: Mutex<Vec<ListenerSlot>>,
    defunct: Mutex<HashSet<u64>>,
    pending: Mutex<VecDeque<QueuedChange>>,
    notifying: AtomicBool,
    next_listener_id: AtomicU64,
    write_version: AtomicU64,
}

impl ThemeStore {
    /// Create a store, restoring the persisted configuration if present
    ///
    /// A missing, unreadable, or unusable stored record falls back to the
    /// default configuration rather than failing startup; the fault is
    /// logged. The restored theme is applied to the binding immediately.
    pub fn new(storage: KvStore, mut binding: Box<dyn ThemeBinding>) -> Result<Self> {
        let (config, version) = match storage.get_versioned::<ThemeConfig>(CONFIG_KEY) {
            Ok(Some((config, version))) => (config, version),
            Ok(None) => (ThemeConfig::default(), 0),
            Err(err) => {
                warn!("Failed to read stored theme config, using defaults: {err}");
                (ThemeConfig::default(), 0)
            }
        };

        let (config, theme) = match generate_theme(&config) {
            Ok(theme) => (config, theme),
            Err(err) => {
                warn!("Stored theme config is unusable, using defaults: {err}");
                let config = ThemeConfig::default();
                let theme = generate_theme(&config)?;
                (config, theme)
            }
        };

        binding.apply(&theme.variables());

        Ok(Self {
            state: Mutex::new(CoreState { config, theme }),
            binding: Mutex::new(binding),
            storage,
            listeners: Mutex::new(Vec::new()),
            defunct: Mutex::new(HashSet::new()),
            pending: Mutex::new(VecDeque::new()),
            notifying: AtomicBool::new(false),
            next_listener_id: AtomicU64::new(1),
            write_version: AtomicU64::new(version),
        })
    }

    /// The active theme
    pub fn current_theme(&self) -> Theme {
        self.state.lock().theme.clone()
    }

    /// The active configuration
    pub fn config(&self) -> ThemeConfig {
        self.state.lock().config.clone()
    }

    /// Merge a partial change and run the change pipeline
    pub fn update_config(&self, patch: ThemeConfigPatch) -> Result<()> {
        if self.notifying.load(Ordering::SeqCst) {
            self.pending.lock().push_back(QueuedChange::Patch(patch));
            return Ok(());
        }
        let merged = {
            let mut config = self.state.lock().config.clone();
            config.apply(patch);
            config
        };
        self.commit(merged)
    }

    /// Replace the whole configuration and run the change pipeline
    pub fn replace_config(&self, config: ThemeConfig) -> Result<()> {
        if self.notifying.load(Ordering::SeqCst) {
            self.pending.lock().push_back(QueuedChange::Replace(config));
            return Ok(());
        }
        self.commit(config)
    }

    /// Set the primary brand seed
    pub fn set_primary_color(&self, color: impl Into<String>) -> Result<()> {
        self.update_config(ThemeConfigPatch::default().primary_color(color.into()))
    }

    /// Set the secondary brand seed
    pub fn set_secondary_color(&self, color: impl Into<String>) -> Result<()> {
        self.update_config(ThemeConfigPatch::default().secondary_color(color.into()))
    }

    /// Set the accent brand seed
    pub fn set_accent_color(&self, color: impl Into<String>) -> Result<()> {
        self.update_config(ThemeConfigPatch::default().accent_color(color.into()))
    }

    /// Switch to the given mode
    pub fn set_mode(&self, mode: ThemeMode) -> Result<()> {
        self.update_config(ThemeConfigPatch::default().mode(mode))
    }

    /// Flip between light and dark; applying this twice restores the
    /// original configuration
    pub fn toggle_dark_mode(&self) -> Result<()> {
        if self.notifying.load(Ordering::SeqCst) {
            self.pending.lock().push_back(QueuedChange::Toggle);
            return Ok(());
        }
        let mode = self.state.lock().config.mode.toggled();
        self.commit_patch(ThemeConfigPatch::default().mode(mode))
    }

    /// Restore the default configuration
    pub fn reset_theme(&self) -> Result<()> {
        self.replace_config(ThemeConfig::default())
    }

    /// Register a callback invoked after every applied change
    pub fn subscribe(&self, callback: impl Fn(&Theme) + Send + 'static) -> SubscriptionId {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        self.listeners
            .lock()
            .push(ListenerSlot { id, callback: Some(Box::new(callback)) });
        SubscriptionId(id)
    }

    /// Remove a subscriber
    ///
    /// Safe to call from inside the subscriber's own callback; removal
    /// then takes effect once the current notification pass finishes.
    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        if self.notifying.load(Ordering::SeqCst) {
            self.defunct.lock().insert(subscription.0);
            return;
        }
        self.listeners.lock().retain(|slot| slot.id != subscription.0);
    }

    /// Flush pending storage writes to disk
    pub fn flush(&self) -> Result<()> {
        self.storage.flush()?;
        Ok(())
    }

    fn commit_patch(&self, patch: ThemeConfigPatch) -> Result<()> {
        let merged = {
            let mut config = self.state.lock().config.clone();
            config.apply(patch);
            config
        };
        self.commit(merged)
    }

    /// Run the full pipeline for a new configuration
    ///
    /// Generation happens before any state changes, so an error here
    /// leaves the store, binding, and storage untouched.
    fn commit(&self, config: ThemeConfig) -> Result<()> {
        let theme = generate_theme(&config)?;

        {
            let mut state = self.state.lock();
            state.config = config;
            state.theme = theme.clone();
        }

        self.binding.lock().apply(&theme.variables());
        debug!(theme = %theme.name, "Applied theme");
        self.persist();
        self.notify(&theme);
        Ok(())
    }

    /// Write the configuration to storage, best effort
    ///
    /// Persistence faults never fail the change pipeline; the in-memory
    /// theme is already live at this point.
    fn persist(&self) {
        let config = self.state.lock().config.clone();
        let version = self.write_version.fetch_add(1, Ordering::SeqCst) + 1;
        match self.storage.set_versioned(CONFIG_KEY, &config, version) {
            Ok(true) => {}
            Ok(false) => warn!(version, "Theme config write superseded by a newer record"),
            Err(err) => warn!("Failed to persist theme config: {err}"),
        }
    }

    fn notify(&self, theme: &Theme) {
        self.notifying.store(true, Ordering::SeqCst);

        let mut index = 0;
        loop {
            // Check the callback out of its slot so no lock is held
            // while it runs
            let checked_out = {
                let mut slots = self.listeners.lock();
                if index >= slots.len() {
                    break;
                }
                let slot = &mut slots[index];
                slot.callback.take().map(|callback| (slot.id, callback))
            };

            if let Some((id, callback)) = checked_out {
                callback(theme);

                if !self.defunct.lock().contains(&id) {
                    let mut slots = self.listeners.lock();
                    if let Some(slot) = slots.iter_mut().find(|slot| slot.id == id) {
                        slot.callback = Some(callback);
                    }
                }
            }

            index += 1;
        }

        {
            let mut defunct = self.defunct.lock();
            if !defunct.is_empty() {
                self.listeners.lock().retain(|slot| !defunct.contains(&slot.id));
                defunct.clear();
            }
        }

        self.notifying.store(false, Ordering::SeqCst);
        self.drain_pending();
    }

    /// Apply changes queued while a notification pass was running
    fn drain_pending(&self) {
        loop {
            let Some(change) = self.pending.lock().pop_front() else {
                break;
            };

            let result = match change {
                QueuedChange::Patch(patch) => self.commit_patch(patch),
                QueuedChange::Replace(config) => self.commit(config),
                QueuedChange::Toggle => {
                    let mode = self.state.lock().config.mode.toggled();
                    self.commit_patch(ThemeConfigPatch::default().mode(mode))
                }
            };

            if let Err(err) = result {
                warn!("Discarding queued theme change: {err}");
            }
        }
    }
}
