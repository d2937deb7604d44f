mod app;
mod components;
mod config;
mod gallery;
mod lightbox;
mod models;
mod pages;
mod profile;
mod state;
mod storage;
mod stories;
mod upload;
mod util;

pub use app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::config::{AlbumConfig, StorageKeys};
    use crate::gallery::GalleryStore;
    use crate::models::GalleryName;
    use crate::profile::Profile;
    use crate::storage::{BrowserStorage, KvStore};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear(keys: &StorageKeys) {
        let s = BrowserStorage;
        for g in [GalleryName::Home, GalleryName::Puppy, GalleryName::Grownup] {
            s.remove(&keys.gallery(g)).unwrap();
        }
        s.remove(&keys.profile_photo()).unwrap();
        s.remove(&keys.profile_fields()).unwrap();
        s.remove(&keys.stories()).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_gallery_roundtrip_through_local_storage() {
        let keys = StorageKeys::with_prefix("wasm-test");
        clear(&keys);

        let mut g = GalleryStore::new(BrowserStorage, keys.clone());
        g.add_photo(GalleryName::Puppy, "data:image/png;base64,AAAA")
            .expect("localStorage write");

        let mut reloaded = GalleryStore::new(BrowserStorage, keys.clone());
        assert_eq!(reloaded.photos(GalleryName::Puppy), g.photos(GalleryName::Puppy));

        clear(&keys);
    }

    #[wasm_bindgen_test]
    fn test_profile_photo_roundtrip_through_local_storage() {
        let keys = StorageKeys::with_prefix("wasm-test");
        clear(&keys);

        let mut p = Profile::load(BrowserStorage, &keys);
        p.set_photo("data:image/gif;base64,R0lG").unwrap();
        assert_eq!(
            Profile::load(BrowserStorage, &keys).photo(),
            Some("data:image/gif;base64,R0lG")
        );

        clear(&keys);
    }

    #[wasm_bindgen_test]
    fn test_config_defaults_without_window_env() {
        let cfg = AlbumConfig::from_window();
        assert_eq!(cfg.keys(), StorageKeys::default());
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
