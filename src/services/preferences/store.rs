//! Observable preference store.
//!
//! Wraps the synchronous persistence service with a conflated latest-value
//! stream and serialized off-thread writes. Observers see a new value only
//! after the underlying row is committed, so the stream is eventually
//! consistent with respect to the write that triggered it.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use tokio::sync::watch;
use tokio::task;

use crate::models::preferences::{snap_font_size, Preferences};
use crate::services::database::Database;

use super::service::PreferenceService;

pub struct PreferenceStore {
    db: Arc<Mutex<Database>>,
    publisher: watch::Sender<Preferences>,
}

impl PreferenceStore {
    /// Opens the store over an initialized database and publishes the
    /// persisted row as the stream's starting value.
    pub fn open(db: Arc<Mutex<Database>>) -> Result<Self> {
        let current = {
            let guard = lock(&db)?;
            PreferenceService::new(&guard).get()?
        };
        let (publisher, _) = watch::channel(current);

        Ok(Self { db, publisher })
    }

    /// Latest committed preference set.
    pub fn current(&self) -> Preferences {
        *self.publisher.borrow()
    }

    /// Subscribes to preference changes.
    ///
    /// The receiver is conflated: a new subscriber immediately sees the
    /// latest value, and a slow consumer skips intermediate values rather
    /// than queueing them.
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.publisher.subscribe()
    }

    /// Persists a new dark-mode flag, leaving the font size untouched.
    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.commit(move |db| PreferenceService::new(db).set_dark_mode(enabled))
            .await
    }

    /// Persists a new font size, snapped onto the values the slider offers.
    pub async fn set_font_size(&self, size: u32) -> Result<()> {
        let snapped = snap_font_size(size);
        self.commit(move |db| PreferenceService::new(db).set_font_size(snapped))
            .await
    }

    /// Runs one write off-thread, then publishes the committed row.
    ///
    /// Writes from concurrent callers are serialized by the database lock;
    /// the last write to a field wins.
    async fn commit<F>(&self, write: F) -> Result<()>
    where
        F: FnOnce(&Database) -> Result<()> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let committed = task::spawn_blocking(move || -> Result<Preferences> {
            let guard = lock(&db)?;
            write(&guard)?;
            PreferenceService::new(&guard).get()
        })
        .await
        .context("Preference write task was cancelled")?;

        let committed = match committed {
            Ok(preferences) => preferences,
            Err(err) => {
                log::warn!("Preference write failed: {:#}", err);
                return Err(err);
            }
        };

        self.publisher.send_replace(committed);
        Ok(())
    }
}

fn lock(db: &Arc<Mutex<Database>>) -> Result<MutexGuard<'_, Database>> {
    db.lock().map_err(|_| anyhow!("Preference database lock poisoned"))
}
