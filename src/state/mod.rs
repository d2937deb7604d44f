use crate::config::AlbumConfig;
use crate::gallery::GalleryStore;
use crate::lightbox::{Lightbox, LightboxCommand};
use crate::models::{GalleryName, Photo, PhotoId, ProfileField, StoryId};
use crate::profile::Profile;
use crate::stories::StoryLog;
use crate::storage::{BrowserStorage, KvStore, StorageError};
use leptos::logging::warn;
use leptos::prelude::*;

/// Everything the page mutates, built once in `App` and shared via context.
///
/// Views read the stores through the signals; all writes go through the
/// methods below so persistence failures surface in `storage_error`.
pub(crate) struct AppState<S: 'static = BrowserStorage> {
    pub config: StoredValue<AlbumConfig>,
    pub galleries: RwSignal<GalleryStore<S>>,
    pub lightbox: RwSignal<Lightbox>,
    pub stories: RwSignal<StoryLog<S>>,
    pub profile: RwSignal<Profile<S>>,

    /// File decodes still in flight.
    pub pending_uploads: RwSignal<usize>,

    /// Last failed write, shown until dismissed.
    pub storage_error: RwSignal<Option<String>>,
}

impl<S: 'static> Clone for AppState<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for AppState<S> {}

impl AppState<BrowserStorage> {
    pub fn new() -> Self {
        Self::with_store(BrowserStorage, AlbumConfig::from_window())
    }
}

impl Default for AppState<BrowserStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> AppState<S>
where
    S: KvStore + Clone + Send + Sync + 'static,
{
    pub fn with_store(store: S, config: AlbumConfig) -> Self {
        let keys = config.keys();

        let mut galleries = GalleryStore::new(store.clone(), keys.clone());
        galleries.load_all();
        let stories = StoryLog::load(store.clone(), &keys, config.date_locale);
        let profile = Profile::load(store, &keys);

        Self {
            config: StoredValue::new(config),
            galleries: RwSignal::new(galleries),
            lightbox: RwSignal::new(Lightbox::Closed),
            stories: RwSignal::new(stories),
            profile: RwSignal::new(profile),
            pending_uploads: RwSignal::new(0),
            storage_error: RwSignal::new(None),
        }
    }

    fn report<T>(&self, result: Option<Result<T, StorageError>>) -> Option<T> {
        match result? {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("{e}");
                self.storage_error.set(Some(e.to_string()));
                None
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.storage_error.set(None);
    }

    pub fn photos(&self, gallery: GalleryName) -> Vec<Photo> {
        self.galleries.with(|g| g.cached(gallery).to_vec())
    }

    pub fn add_photo(&self, gallery: GalleryName, src: String) {
        let result = self.galleries.try_update(|g| g.add_photo(gallery, src));
        self.report(result);
    }

    pub fn delete_photo(&self, gallery: GalleryName, id: PhotoId) {
        let result = self.galleries.try_update(|g| g.remove_photo(gallery, id));
        self.report(result);

        if self.lightbox.with_untracked(|lb| lb.gallery()) == Some(gallery) {
            let len = self.galleries.with_untracked(|g| g.cached(gallery).len());
            self.lightbox.update(|lb| lb.reconcile(len));
        }
    }

    pub fn open_photo(&self, gallery: GalleryName, id: PhotoId) {
        let mut lb = self.lightbox.get_untracked();
        let opened = self
            .galleries
            .try_update_untracked(|g| lb.open_photo(gallery, id, g))
            .unwrap_or(false);
        if opened {
            self.lightbox.set(lb);
        }
    }

    pub fn lightbox_command(&self, cmd: LightboxCommand) {
        let len = self.lightbox.with_untracked(|lb| lb.gallery()).map(|gallery| {
            self.galleries
                .with_untracked(|g| g.cached(gallery).len())
        });
        self.lightbox.update(|lb| lb.apply(cmd, len.unwrap_or(0)));
    }

    /// The photo the viewer shows, if it is open.
    pub fn lightbox_photo(&self) -> Option<Photo> {
        let lb = self.lightbox.get();
        let gallery = lb.gallery()?;
        self.galleries
            .with(|g| lb.current(g.cached(gallery)).cloned())
    }

    /// Returns true when a story was added, so the composer can clear itself.
    pub fn add_story(&self, title: &str, body: &str) -> bool {
        let result = self
            .stories
            .try_update(|log| log.add_story(title, body).map(|s| s.is_some()));
        self.report(result).unwrap_or(false)
    }

    pub fn delete_story(&self, id: StoryId) {
        let result = self.stories.try_update(|log| log.delete_by_id(id));
        self.report(result);
    }

    pub fn set_profile_photo(&self, src: String) {
        let result = self.profile.try_update(|p| p.set_photo(src));
        self.report(result);
    }

    pub fn set_profile_field(&self, field: ProfileField, text: &str) {
        let unchanged = self.profile.with_untracked(|p| p.field(field) == text.trim());
        if unchanged {
            return;
        }
        let result = self.profile.try_update(|p| p.set_field(field, text));
        self.report(result);
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn app(mem: &MemoryStore) -> AppState<MemoryStore> {
        AppState::with_store(mem.clone(), AlbumConfig::default())
    }

    fn srcs(photos: &[Photo]) -> Vec<String> {
        photos.iter().map(|p| p.src.clone()).collect()
    }

    #[test]
    fn test_startup_hydrates_every_store() {
        let mem = MemoryStore::new();
        mem.set("taco-grownup-photos", r#"["data:g"]"#).unwrap();
        mem.set("taco-profile", "data:me").unwrap();
        mem.set(
            "taco-stories",
            r#"[{"title":"t","body":"b","date":"d"}]"#,
        )
        .unwrap();

        let app = app(&mem);
        assert_eq!(srcs(&app.photos(GalleryName::Grownup)), ["data:g"]);
        assert_eq!(
            app.profile.with_untracked(|p| p.photo().map(str::to_string)),
            Some("data:me".to_string())
        );
        assert_eq!(app.stories.with_untracked(|s| s.stories().len()), 1);
    }

    #[test]
    fn test_upload_open_and_wrap() {
        let mem = MemoryStore::new();
        let app = app(&mem);
        for s in ["data:1", "data:2", "data:3"] {
            app.add_photo(GalleryName::Puppy, s.to_string());
        }
        let photos = app.photos(GalleryName::Puppy);
        assert_eq!(photos.len(), 3);

        app.open_photo(GalleryName::Puppy, photos[1].id);
        assert_eq!(app.lightbox_photo().map(|p| p.src), Some("data:2".to_string()));

        app.lightbox_command(LightboxCommand::Next);
        assert_eq!(app.lightbox_photo().map(|p| p.src), Some("data:3".to_string()));
        app.lightbox_command(LightboxCommand::Next);
        assert_eq!(app.lightbox_photo().map(|p| p.src), Some("data:1".to_string()));

        app.lightbox_command(LightboxCommand::Close);
        assert_eq!(app.lightbox_photo(), None);
    }

    #[test]
    fn test_deleting_last_photo_closes_viewer() {
        let app = app(&MemoryStore::new());
        app.add_photo(GalleryName::Home, "data:only".to_string());
        let id = app.photos(GalleryName::Home)[0].id;

        app.open_photo(GalleryName::Home, id);
        assert!(app.lightbox.get_untracked().is_open());

        app.delete_photo(GalleryName::Home, id);
        assert!(!app.lightbox.get_untracked().is_open());

        // Keys while closed do nothing.
        app.lightbox_command(LightboxCommand::Next);
        assert_eq!(app.lightbox.get_untracked(), Lightbox::Closed);
    }

    #[test]
    fn test_profile_photo_survives_reload() {
        let mem = MemoryStore::new();
        app(&mem).set_profile_photo("data:avatar".to_string());
        assert_eq!(
            app(&mem)
                .profile
                .with_untracked(|p| p.photo().map(str::to_string)),
            Some("data:avatar".to_string())
        );
    }

    #[test]
    fn test_stories_newest_first_through_app() {
        let mem = MemoryStore::new();
        let app = app(&mem);
        assert!(!app.add_story("", ""));
        assert!(app.add_story("A", ""));
        assert!(app.add_story("B", ""));

        let titles = app.stories.with_untracked(|s| {
            s.stories()
                .iter()
                .map(|s| s.title.clone())
                .collect::<Vec<_>>()
        });
        assert_eq!(titles, ["B", "A"]);

        let id = app.stories.with_untracked(|s| s.stories()[0].id);
        app.delete_story(id);
        assert_eq!(app.stories.with_untracked(|s| s.stories().len()), 1);
    }

    #[test]
    fn test_write_failure_is_reported_and_kept_in_memory() {
        let mem = MemoryStore::new();
        let app = AppState::with_store(mem.read_only(), AlbumConfig::default());

        app.add_photo(GalleryName::Home, "data:huge".to_string());
        assert_eq!(app.photos(GalleryName::Home).len(), 1);
        let msg = app.storage_error.get_untracked().expect("error should be surfaced");
        assert!(msg.contains("taco-photos"));

        app.dismiss_error();
        assert!(app.storage_error.get_untracked().is_none());
    }

    #[test]
    fn test_unchanged_profile_field_skips_write() {
        let mem = MemoryStore::new();
        let app = app(&mem);
        app.set_profile_field(ProfileField::Name, ProfileField::Name.placeholder());
        assert!(mem.raw("taco-profile-info").is_none());

        app.set_profile_field(ProfileField::Name, "Taco Jr.");
        assert!(mem.raw("taco-profile-info").is_some());
    }
}
