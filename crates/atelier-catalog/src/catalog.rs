//! The catalog aggregate and its queries.
//!
//! Every query is a linear scan over one or both collections. Joins between
//! artists and photographs compare `Photograph::artist_id` with `Artist::id`
//! by exact string equality.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::ops::RangeInclusive;
use std::path::Path;

use atelier_ingest::{CsvSource, TabularSource};
use atelier_types::{Artist, Photograph};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CatalogResult;
use crate::summary::CatalogSummary;

/// In-memory store of photographs and artists.
///
/// Both collections keep insertion order, and every query returns matches
/// in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    photos: Vec<Photograph>,
    artists: Vec<Artist>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// All photographs in insertion order.
    pub fn photos(&self) -> &[Photograph] {
        &self.photos
    }

    /// All artists in insertion order.
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// Returns `true` if the catalog holds no records of either kind.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.artists.is_empty()
    }

    // ---------------------------------------------------------------
    // Adding records
    // ---------------------------------------------------------------

    /// Append a photograph. No deduplication is performed.
    pub fn add_photo(&mut self, photo: Photograph) {
        self.photos.push(photo);
    }

    /// Append an artist. No deduplication is performed.
    pub fn add_artist(&mut self, artist: Artist) {
        self.artists.push(artist);
    }

    /// Append photographs in iteration order and return how many were added.
    pub fn extend_photos<I: IntoIterator<Item = Photograph>>(&mut self, photos: I) -> usize {
        let before = self.photos.len();
        self.photos.extend(photos);
        self.photos.len() - before
    }

    /// Append artists in iteration order and return how many were added.
    pub fn extend_artists<I: IntoIterator<Item = Artist>>(&mut self, artists: I) -> usize {
        let before = self.artists.len();
        self.artists.extend(artists);
        self.artists.len() - before
    }

    // ---------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------

    /// Load photographs from a comma-separated file with a header row.
    ///
    /// Returns the number of photographs appended. On error nothing is
    /// appended.
    pub fn load_photos(&mut self, path: impl AsRef<Path>) -> CatalogResult<usize> {
        self.load_photos_with(&CsvSource::new(), path)
    }

    /// Load artists from a comma-separated file with a header row.
    ///
    /// Returns the number of artists appended. On error nothing is appended.
    pub fn load_artists(&mut self, path: impl AsRef<Path>) -> CatalogResult<usize> {
        self.load_artists_with(&CsvSource::new(), path)
    }

    /// Load photographs through any tabular source.
    pub fn load_photos_with<S: TabularSource>(
        &mut self,
        source: &S,
        path: impl AsRef<Path>,
    ) -> CatalogResult<usize> {
        let path = path.as_ref();
        let photos: Vec<Photograph> = source.read_records(path)?;
        let added = self.extend_photos(photos);
        info!(path = %path.display(), added, total = self.photos.len(), "loaded photographs");
        Ok(added)
    }

    /// Load artists through any tabular source.
    pub fn load_artists_with<S: TabularSource>(
        &mut self,
        source: &S,
        path: impl AsRef<Path>,
    ) -> CatalogResult<usize> {
        let path = path.as_ref();
        let artists: Vec<Artist> = source.read_records(path)?;
        let added = self.extend_artists(artists);
        info!(path = %path.display(), added, total = self.artists.len(), "loaded artists");
        Ok(added)
    }

    // ---------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------

    /// The first artist with exactly this id, if any.
    pub fn find_artist_by_id(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id() == id)
    }

    /// The first photograph with exactly this id, if any.
    pub fn find_photo_by_id(&self, id: &str) -> Option<&Photograph> {
        self.photos.iter().find(|photo| photo.id() == id)
    }

    /// Photographs whose `artist_id` equals the artist's id.
    pub fn find_photos_by_artist(&self, artist: &Artist) -> Vec<&Photograph> {
        self.photos
            .iter()
            .filter(|photo| photo.artist_id() == artist.id())
            .collect()
    }

    /// Artists whose country equals `country` (case-sensitive).
    pub fn find_artists_by_country(&self, country: &str) -> Vec<&Artist> {
        self.artists
            .iter()
            .filter(|artist| artist.country() == country)
            .collect()
    }

    /// Ids of the artists from `country`, in artist order.
    pub fn find_artist_ids_by_country(&self, country: &str) -> Vec<&str> {
        self.find_artists_by_country(country)
            .into_iter()
            .map(Artist::id)
            .collect()
    }

    // ---------------------------------------------------------------
    // Derived queries
    // ---------------------------------------------------------------

    /// Artists credited with more than one photograph.
    pub fn artists_with_multiple_photos(&self) -> Vec<&Artist> {
        self.artists
            .iter()
            .filter(|artist| self.photos_by_artist_id(artist.id()).nth(1).is_some())
            .collect()
    }

    /// Photographs taken by any artist from `country`.
    pub fn photos_taken_by_artists_from(&self, country: &str) -> Vec<&Photograph> {
        let artist_ids: HashSet<&str> = self
            .find_artist_ids_by_country(country)
            .into_iter()
            .collect();
        if artist_ids.is_empty() {
            return Vec::new();
        }
        self.photos
            .iter()
            .filter(|photo| artist_ids.contains(photo.artist_id()))
            .collect()
    }

    /// Photographs whose year falls within `years`, both ends inclusive.
    ///
    /// A year that does not parse counts as `0`.
    pub fn photos_taken_between(&self, years: RangeInclusive<i64>) -> Vec<&Photograph> {
        self.photos
            .iter()
            .filter(|photo| years.contains(&photo.year_value()))
            .collect()
    }

    /// The artist's age when each of their photographs was taken, mapped to
    /// the photograph's name.
    ///
    /// Age is `photo.year - artist.born`. When two photographs give the same
    /// age only the one added last is kept; use
    /// [`Catalog::artists_photographs_grouped_by_age`] to keep them all.
    pub fn artists_photographs_by_age(&self, artist: &Artist) -> BTreeMap<i64, String> {
        let mut ages = BTreeMap::new();
        for photo in self.photos_by_artist_id(artist.id()) {
            let age = artist.age_in(photo.year_value());
            if let Some(previous) = ages.insert(age, photo.name().to_string()) {
                debug!(
                    artist = artist.id(),
                    age,
                    replaced = %previous,
                    by = photo.name(),
                    "age collision; later photograph wins"
                );
            }
        }
        ages
    }

    /// Like [`Catalog::artists_photographs_by_age`], but keeps every
    /// photograph name for an age, in insertion order.
    pub fn artists_photographs_grouped_by_age(
        &self,
        artist: &Artist,
    ) -> BTreeMap<i64, Vec<String>> {
        let mut ages: BTreeMap<i64, Vec<String>> = BTreeMap::new();
        for photo in self.photos_by_artist_id(artist.id()) {
            ages.entry(artist.age_in(photo.year_value()))
                .or_default()
                .push(photo.name().to_string());
        }
        ages
    }

    /// Photographs whose `artist_id` matches no artist in the catalog.
    pub fn orphan_photos(&self) -> Vec<&Photograph> {
        let known: HashSet<&str> = self.artists.iter().map(Artist::id).collect();
        self.photos
            .iter()
            .filter(|photo| !known.contains(photo.artist_id()))
            .collect()
    }

    /// Summarize the catalog's contents.
    pub fn summary(&self) -> CatalogSummary {
        let countries: BTreeSet<&str> = self
            .artists
            .iter()
            .map(Artist::country)
            .filter(|country| !country.is_empty())
            .collect();
        let years = self
            .photos
            .iter()
            .map(Photograph::year_value)
            .filter(|year| *year != 0);

        CatalogSummary {
            photos: self.photos.len(),
            artists: self.artists.len(),
            countries: countries.len(),
            orphans: self.orphan_photos().len(),
            earliest_year: years.clone().min(),
            latest_year: years.max(),
        }
    }

    fn photos_by_artist_id<'a>(
        &'a self,
        artist_id: &'a str,
    ) -> impl Iterator<Item = &'a Photograph> + 'a {
        self.photos
            .iter()
            .filter(move |photo| photo.artist_id() == artist_id)
    }
}
