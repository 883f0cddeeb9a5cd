//! A catalog shared between threads.
//!
//! [`SharedCatalog`] holds a [`Catalog`] behind a `RwLock`. Queries run in a
//! read scope and may proceed concurrently; adds and loads run in a write
//! scope. File parsing for loads happens before the write lock is taken, so
//! readers are only blocked while the parsed records are appended.

use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use atelier_ingest::{CsvSource, TabularSource};
use atelier_types::{Artist, Photograph};
use tracing::info;

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};

/// A [`Catalog`] guarded by a reader-writer lock.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    inner: RwLock<Catalog>,
}

impl SharedCatalog {
    /// Create an empty shared catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(catalog),
        }
    }

    /// Run `f` with shared access to the catalog.
    pub fn read<T>(&self, f: impl FnOnce(&Catalog) -> T) -> CatalogResult<T> {
        let guard = self.read_guard()?;
        Ok(f(&*guard))
    }

    /// Run `f` with exclusive access to the catalog.
    pub fn write<T>(&self, f: impl FnOnce(&mut Catalog) -> T) -> CatalogResult<T> {
        let mut guard = self.write_guard()?;
        Ok(f(&mut *guard))
    }

    pub fn add_photo(&self, photo: Photograph) -> CatalogResult<()> {
        self.write(|catalog| catalog.add_photo(photo))
    }

    pub fn add_artist(&self, artist: Artist) -> CatalogResult<()> {
        self.write(|catalog| catalog.add_artist(artist))
    }

    /// Load photographs from a comma-separated file.
    pub fn load_photos(&self, path: impl AsRef<Path>) -> CatalogResult<usize> {
        self.load_photos_with(&CsvSource::new(), path)
    }

    /// Load artists from a comma-separated file.
    pub fn load_artists(&self, path: impl AsRef<Path>) -> CatalogResult<usize> {
        self.load_artists_with(&CsvSource::new(), path)
    }

    pub fn load_photos_with<S: TabularSource>(
        &self,
        source: &S,
        path: impl AsRef<Path>,
    ) -> CatalogResult<usize> {
        let path = path.as_ref();
        let photos: Vec<Photograph> = source.read_records(path)?;
        let added = self.write(|catalog| catalog.extend_photos(photos))?;
        info!(path = %path.display(), added, "loaded photographs into shared catalog");
        Ok(added)
    }

    pub fn load_artists_with<S: TabularSource>(
        &self,
        source: &S,
        path: impl AsRef<Path>,
    ) -> CatalogResult<usize> {
        let path = path.as_ref();
        let artists: Vec<Artist> = source.read_records(path)?;
        let added = self.write(|catalog| catalog.extend_artists(artists))?;
        info!(path = %path.display(), added, "loaded artists into shared catalog");
        Ok(added)
    }

    /// Take a copy of the current catalog contents.
    pub fn snapshot(&self) -> CatalogResult<Catalog> {
        self.read(Catalog::clone)
    }

    /// Unwrap the catalog, consuming the lock.
    pub fn into_inner(self) -> CatalogResult<Catalog> {
        self.inner
            .into_inner()
            .map_err(|e| CatalogError::LockPoisoned(e.to_string()))
    }

    fn read_guard(&self) -> CatalogResult<RwLockReadGuard<'_, Catalog>> {
        self.inner
            .read()
            .map_err(|e| CatalogError::LockPoisoned(e.to_string()))
    }

    fn write_guard(&self) -> CatalogResult<RwLockWriteGuard<'_, Catalog>> {
        self.inner
            .write()
            .map_err(|e| CatalogError::LockPoisoned(e.to_string()))
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::from_catalog(catalog)
    }
}
