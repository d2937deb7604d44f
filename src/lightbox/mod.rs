use crate::gallery::GalleryStore;
use crate::models::{GalleryName, Photo, PhotoId};
use crate::storage::KvStore;

/// Full-screen viewer position.
///
/// Only the gallery and index are kept; the photo itself is always read from
/// the gallery's current list, so deletions made while open show up on the
/// next step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Lightbox {
    #[default]
    Closed,
    Open { gallery: GalleryName, index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LightboxCommand {
    Prev,
    Next,
    Close,
}

impl LightboxCommand {
    /// `KeyboardEvent.key` bindings while the viewer is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            "Escape" | "Esc" => Some(Self::Close),
            _ => None,
        }
    }
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn gallery(&self) -> Option<GalleryName> {
        match *self {
            Self::Open { gallery, .. } => Some(gallery),
            Self::Closed => None,
        }
    }

    pub fn open(&mut self, gallery: GalleryName, index: usize) {
        *self = Self::Open { gallery, index };
    }

    /// Opens on the photo with `id`. Returns false (and stays put) if it is gone.
    pub fn open_photo<S: KvStore>(
        &mut self,
        gallery: GalleryName,
        id: PhotoId,
        photos: &mut GalleryStore<S>,
    ) -> bool {
        match photos.position(gallery, id) {
            Some(index) => {
                self.open(gallery, index);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn next(&mut self, len: usize) {
        if let Self::Open { index, .. } = self {
            if len == 0 {
                return;
            }
            *index = ((*index).min(len - 1) + 1) % len;
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Self::Open { index, .. } = self {
            if len == 0 {
                return;
            }
            // An index left past the end by a deletion steps back from the end.
            *index = ((*index).min(len) + len - 1) % len;
        }
    }

    pub fn apply(&mut self, cmd: LightboxCommand, len: usize) {
        match cmd {
            LightboxCommand::Prev => self.prev(len),
            LightboxCommand::Next => self.next(len),
            LightboxCommand::Close => self.close(),
        }
    }

    /// Re-establishes `index < len` after the gallery shrank; closes when empty.
    pub fn reconcile(&mut self, len: usize) {
        match self {
            Self::Open { .. } if len == 0 => *self = Self::Closed,
            Self::Open { index, .. } if *index >= len => *index = len - 1,
            _ => {}
        }
    }

    pub fn current<'a>(&self, photos: &'a [Photo]) -> Option<&'a Photo> {
        match *self {
            Self::Open { index, .. } => photos.get(index).or_else(|| photos.last()),
            Self::Closed => None,
        }
    }
}
