//! Per-date journal note storage.
//!
//! One plain-text file per calendar date, named by the ISO date key. Save
//! fully replaces prior content, read distinguishes a missing entry from an
//! empty one, and delete reports whether anything was removed. File
//! operations run off the caller's responsiveness path and report
//! completion through futures.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tokio::fs;

use crate::models::journal::JournalEntry;
use crate::utils::date::{entry_key, parse_display_date, parse_entry_key};

const ENTRY_EXTENSION: &str = "txt";

/// File-backed store for journal entries.
pub struct JournalStore {
    root: PathBuf,
}

impl JournalStore {
    /// Opens the store rooted at the given directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create journal directory {}", root.display()))?;

        Ok(Self { root })
    }

    /// Path of the entry file for a date.
    pub fn entry_path(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(format!("{}.{}", entry_key(date), ENTRY_EXTENSION))
    }

    /// Creates or fully overwrites the entry for a date. There is no append
    /// mode; concurrent saves to the same date are last-write-wins.
    pub async fn save(&self, date: NaiveDate, content: &str) -> Result<()> {
        let path = self.entry_path(date);
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write journal entry {}", path.display()))?;

        log::info!("Saved journal entry {}", path.display());
        Ok(())
    }

    /// Saves a model value.
    pub async fn save_entry(&self, entry: &JournalEntry) -> Result<()> {
        self.save(entry.date, &entry.content).await
    }

    /// Returns the entry content for a date, or `None` when no entry exists.
    pub async fn read(&self, date: NaiveDate) -> Result<Option<String>> {
        let path = self.entry_path(date);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read journal entry {}", path.display())),
        }
    }

    /// Returns the entry for a date as a model value.
    pub async fn read_entry(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        Ok(self
            .read(date)
            .await?
            .map(|content| JournalEntry::new(date, content)))
    }

    /// Removes the entry for a date, reporting whether a file existed.
    pub async fn delete(&self, date: NaiveDate) -> Result<bool> {
        let path = self.entry_path(date);
        match fs::remove_file(&path).await {
            Ok(()) => {
                log::info!("Deleted journal entry {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to delete journal entry {}", path.display())),
        }
    }

    /// Lists the dates that currently have a stored entry, oldest first.
    ///
    /// Scans the directory on every call; no index is maintained.
    pub async fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut dates = Vec::new();

        let mut entries = fs::read_dir(&self.root).await.with_context(|| {
            format!("Failed to read journal directory {}", self.root.display())
        })?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let file_type = entry
                .file_type()
                .await
                .context("Failed to read directory entry type")?;
            if !file_type.is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some(ENTRY_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(date) = parse_entry_key(stem) {
                dates.push(date);
            }
        }

        dates.sort();
        Ok(dates)
    }

    /// Renames legacy `{Mon DD, YYYY}.txt` entries onto the ISO naming
    /// scheme. Call this once during app startup.
    ///
    /// Earlier builds embedded a locale-formatted display date wrapped in
    /// braces directly in the filename. Returns the number of entries
    /// renamed; files that cannot be parsed are skipped, never deleted.
    pub fn migrate_legacy_entries(&self) -> Result<usize> {
        let entries = std::fs::read_dir(&self.root).with_context(|| {
            format!("Failed to read journal directory {}", self.root.display())
        })?;

        let mut migrated = 0;
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if !path.is_file()
                || path.extension().and_then(|s| s.to_str()) != Some(ENTRY_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(display) = stem
                .strip_prefix('{')
                .and_then(|inner| inner.strip_suffix('}'))
            else {
                continue;
            };

            let Some(date) = parse_display_date(display) else {
                log::warn!(
                    "Skipping legacy journal file with unparseable date: {}",
                    path.display()
                );
                continue;
            };

            let target = self.entry_path(date);
            if target.exists() {
                log::warn!(
                    "Skipping legacy journal file {}: {} already exists",
                    path.display(),
                    target.display()
                );
                continue;
            }

            std::fs::rename(&path, &target).with_context(|| {
                format!(
                    "Failed to rename {} to {}",
                    path.display(),
                    target.display()
                )
            })?;
            migrated += 1;
        }

        if migrated > 0 {
            log::info!("Migrated {} legacy journal file(s)", migrated);
        }
        Ok(migrated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn save_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();
        let day = date(2024, 1, 5);

        store.save(day, "hello").await.unwrap();
        assert_eq!(store.read(day).await.unwrap().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn save_overwrites_instead_of_appending() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();
        let day = date(2024, 1, 5);

        store.save(day, "draft").await.unwrap();
        store.save(day, "final").await.unwrap();

        assert_eq!(store.read(day).await.unwrap().as_deref(), Some("final"));
    }

    #[tokio::test]
    async fn read_missing_entry_returns_none() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        assert_eq!(store.read(date(2024, 1, 5)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_content_is_distinct_from_missing() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();
        let day = date(2024, 1, 5);

        store.save(day, "").await.unwrap();
        assert_eq!(store.read(day).await.unwrap().as_deref(), Some(""));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_file_existed() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();
        let day = date(2024, 1, 5);

        assert!(!store.delete(day).await.unwrap());

        store.save(day, "hello").await.unwrap();
        assert!(store.delete(day).await.unwrap());
        assert_eq!(store.read(day).await.unwrap(), None);
    }

    #[tokio::test]
    async fn entries_are_named_by_iso_date() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();
        let day = date(2024, 1, 5);

        store.save(day, "hello").await.unwrap();
        assert!(dir.path().join("2024-01-05.txt").exists());
    }

    #[tokio::test]
    async fn list_dates_scans_and_sorts() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        store.save(date(2024, 3, 1), "c").await.unwrap();
        store.save(date(2023, 12, 31), "a").await.unwrap();
        store.save(date(2024, 1, 5), "b").await.unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        std::fs::write(dir.path().join("scratch.txt"), "ignored").unwrap();

        let dates = store.list_dates().await.unwrap();
        assert_eq!(
            dates,
            vec![date(2023, 12, 31), date(2024, 1, 5), date(2024, 3, 1)]
        );
    }

    #[tokio::test]
    async fn read_entry_wraps_the_model() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();
        let day = date(2024, 1, 5);

        store
            .save_entry(&JournalEntry::new(day, "hello"))
            .await
            .unwrap();

        let entry = store.read_entry(day).await.unwrap().unwrap();
        assert_eq!(entry, JournalEntry::new(day, "hello"));
    }

    #[tokio::test]
    async fn legacy_brace_files_are_renamed_onto_iso_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("{Jan 05, 2024}.txt"), "old note").unwrap();
        std::fs::write(dir.path().join("{not a date}.txt"), "kept").unwrap();

        let store = JournalStore::open(dir.path()).unwrap();
        assert_eq!(store.migrate_legacy_entries().unwrap(), 1);

        assert_eq!(
            store.read(date(2024, 1, 5)).await.unwrap().as_deref(),
            Some("old note")
        );
        assert!(!dir.path().join("{Jan 05, 2024}.txt").exists());
        assert!(dir.path().join("{not a date}.txt").exists());

        // Second run has nothing left to rename.
        assert_eq!(store.migrate_legacy_entries().unwrap(), 0);
    }

    #[tokio::test]
    async fn legacy_migration_never_overwrites_an_existing_entry() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();
        let day = date(2024, 1, 5);

        store.save(day, "new note").await.unwrap();
        std::fs::write(dir.path().join("{Jan 05, 2024}.txt"), "old note").unwrap();

        assert_eq!(store.migrate_legacy_entries().unwrap(), 0);
        assert_eq!(store.read(day).await.unwrap().as_deref(), Some("new note"));
        assert!(dir.path().join("{Jan 05, 2024}.txt").exists());
    }
}
