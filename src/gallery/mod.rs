use crate::config::StorageKeys;
use crate::models::{GalleryName, Photo, PhotoId};
use crate::storage::{load_json, save_json, KvStore, StorageResult};
use leptos::logging::warn;
use serde::Deserialize;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// One persisted gallery element. Older saves are bare data-URI strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPhoto {
    Keyed(Photo),
    Legacy(String),
}

impl From<StoredPhoto> for Photo {
    fn from(p: StoredPhoto) -> Self {
        match p {
            StoredPhoto::Keyed(p) => p,
            StoredPhoto::Legacy(src) => Photo::new(src),
        }
    }
}

/// Photos for every gallery, loaded lazily and written through on change.
///
/// Each gallery is read from the store the first time it is asked for and then
/// served from memory for the rest of the session. Every mutation rewrites the
/// whole list for that gallery.
#[derive(Clone, Debug)]
pub(crate) struct GalleryStore<S> {
    store: S,
    keys: StorageKeys,
    loaded: HashMap<GalleryName, Vec<Photo>>,
}

impl<S: KvStore> GalleryStore<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self {
            store,
            keys,
            loaded: HashMap::new(),
        }
    }

    /// Elements are decoded one by one; an unreadable element is dropped
    /// without taking its neighbours with it.
    fn read(&self, name: GalleryName) -> Vec<Photo> {
        let key = self.keys.gallery(name);
        let Some(items) = load_json::<Vec<serde_json::Value>>(&self.store, &key) else {
            return Vec::new();
        };

        items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match serde_json::from_value::<StoredPhoto>(item) {
                Ok(p) => Some(Photo::from(p)),
                Err(e) => {
                    warn!("skipping photo #{i} under `{key}`: {e}");
                    None
                }
            })
            .collect()
    }

    fn persist(&self, name: GalleryName) -> StorageResult<()> {
        let photos = self.loaded.get(&name).map(Vec::as_slice).unwrap_or(&[]);
        save_json(&self.store, &self.keys.gallery(name), photos)
    }

    /// The session list for `name`, loading it on first use.
    pub fn photos(&mut self, name: GalleryName) -> &[Photo] {
        self.list_mut(name)
    }

    fn list_mut(&mut self, name: GalleryName) -> &mut Vec<Photo> {
        if !self.loaded.contains_key(&name) {
            let photos = self.read(name);
            self.loaded.insert(name, photos);
        }
        self.loaded.entry(name).or_default()
    }

    /// Already-loaded photos only; render paths use this so reads stay `&self`.
    pub fn cached(&self, name: GalleryName) -> &[Photo] {
        self.loaded.get(&name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn load_all(&mut self) {
        for name in GalleryName::iter() {
            self.list_mut(name);
        }
    }

    #[allow(dead_code)]
    pub fn len(&mut self, name: GalleryName) -> usize {
        self.photos(name).len()
    }

    pub fn position(&mut self, name: GalleryName, id: PhotoId) -> Option<usize> {
        self.photos(name).iter().position(|p| p.id == id)
    }

    /// Appends and persists. The photo stays in memory even if the write fails.
    pub fn add_photo(&mut self, name: GalleryName, src: impl Into<String>) -> StorageResult<Photo> {
        let photo = Photo::new(src);
        self.list_mut(name).push(photo.clone());
        self.persist(name)?;
        Ok(photo)
    }

    pub fn remove_photo(&mut self, name: GalleryName, id: PhotoId) -> StorageResult<Option<Photo>> {
        let list = self.list_mut(name);
        let Some(idx) = list.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let removed = list.remove(idx);
        self.persist(name)?;
        Ok(Some(removed))
    }

    /// Removes the first photo whose data URI equals `src`.
    #[allow(dead_code)]
    pub fn remove_first_by_src(
        &mut self,
        name: GalleryName,
        src: &str,
    ) -> StorageResult<Option<Photo>> {
        let list = self.list_mut(name);
        let Some(idx) = list.iter().position(|p| p.src == src) else {
            return Ok(None);
        };
        let removed = list.remove(idx);
        self.persist(name)?;
        Ok(Some(removed))
    }
}
