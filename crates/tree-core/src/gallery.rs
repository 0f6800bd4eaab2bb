//! Photo collection and the one-shot preset auto-loader.
//!
//! The "presets already loaded" flag lives in an injected [`KeyValueStore`]
//! and is only ever read or written by [`PresetLoader`], so asking it to load
//! twice is harmless.

use crate::constants::{MAX_PHOTOS, PRESET_AUTOLOAD_COUNT, PRESET_LOADED_KEY};
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid key {0:?}")]
    InvalidKey(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    map: FnvHashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.map.remove(key);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetPhoto {
    pub name: &'static str,
    pub url: &'static str,
}

impl PresetPhoto {
    pub const fn new(name: &'static str, url: &'static str) -> Self {
        Self { name, url }
    }
}

pub const PRESET_PHOTOS: [PresetPhoto; 8] = [
    PresetPhoto::new("Family portrait", "/preset-photos/family.jpg"),
    PresetPhoto::new("Cute pet", "/preset-photos/pet.jpg"),
    PresetPhoto::new("Friends gathering", "/preset-photos/friends.jpg"),
    PresetPhoto::new("Winter snow", "/preset-photos/winter.jpg"),
    PresetPhoto::new("Gifts", "/preset-photos/gift.jpg"),
    PresetPhoto::new("Decorations", "/preset-photos/decorations.jpg"),
    PresetPhoto::new("Santa", "/preset-photos/santa.jpg"),
    PresetPhoto::new("Candlelight", "/preset-photos/candle.jpg"),
];

#[derive(Clone, Debug)]
pub struct PhotoGallery {
    photos: Vec<String>,
    capacity: usize,
}

impl Default for PhotoGallery {
    fn default() -> Self {
        Self::with_capacity(MAX_PHOTOS)
    }
}

impl PhotoGallery {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            photos: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.photos.len())
    }

    /// Append as many photos as there are free slots; returns how many fit.
    pub fn add_many<I>(&mut self, photos: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.photos.len();
        let room = self.remaining();
        self.photos.extend(photos.into_iter().take(room));
        self.photos.len() - before
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.photos.len()).then(|| self.photos.remove(index))
    }

    pub fn clear(&mut self) {
        self.photos.clear();
    }
}

#[derive(Clone, Debug, Default)]
pub struct PresetLoader {
    loaded: bool,
}

impl PresetLoader {
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load the first few presets into an empty gallery, once per store.
    ///
    /// Returns the number of photos added (zero when nothing was done).
    pub fn load_if_needed<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        gallery: &mut PhotoGallery,
    ) -> Result<usize, StoreError> {
        if self.loaded {
            return Ok(0);
        }
        if store.get(PRESET_LOADED_KEY)?.is_some() {
            self.loaded = true;
            return Ok(0);
        }
        if !gallery.is_empty() {
            return Ok(0);
        }
        let added = gallery.add_many(
            PRESET_PHOTOS
                .iter()
                .take(PRESET_AUTOLOAD_COUNT)
                .map(|p| p.url.to_string()),
        );
        self.mark_loaded(store)?;
        log::info!("[photos] loaded {} preset photos", added);
        Ok(added)
    }

    /// Fill every free slot with presets.
    pub fn add_all_presets<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        gallery: &mut PhotoGallery,
    ) -> Result<usize, StoreError> {
        let added = gallery.add_many(PRESET_PHOTOS.iter().map(|p| p.url.to_string()));
        self.mark_loaded(store)?;
        Ok(added)
    }

    /// User uploads count as "presets handled" so they are never mixed in later.
    pub fn on_user_photos<S, I>(
        &mut self,
        store: &mut S,
        gallery: &mut PhotoGallery,
        photos: I,
    ) -> Result<usize, StoreError>
    where
        S: KeyValueStore + ?Sized,
        I: IntoIterator<Item = String>,
    {
        let added = gallery.add_many(photos);
        if added > 0 && !self.loaded {
            self.mark_loaded(store)?;
        }
        Ok(added)
    }

    /// Empty the gallery and forget the flag so presets load again next time.
    pub fn clear<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        gallery: &mut PhotoGallery,
    ) -> Result<(), StoreError> {
        gallery.clear();
        store.remove(PRESET_LOADED_KEY)?;
        self.loaded = false;
        Ok(())
    }

    fn mark_loaded<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<(), StoreError> {
        store.set(PRESET_LOADED_KEY, "true")?;
        self.loaded = true;
        Ok(())
    }
}
