use crate::models::GalleryName;
use crate::state::AppState;
use crate::util::js_message;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum UploadError {
    #[error("`{name}` is not an image ({mime})")]
    NotAnImage { name: String, mime: String },

    #[error("failed to read `{name}`: {message}")]
    Read { name: String, message: String },

    #[error("`{name}` did not decode to a data URL")]
    NotText { name: String },
}

pub(crate) fn is_image_mime(mime: &str) -> bool {
    mime.get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Keeps image-typed entries, in input order, and counts the rest.
pub(crate) fn partition_images<T>(files: Vec<T>, mime: impl Fn(&T) -> String) -> (Vec<T>, usize) {
    let total = files.len();
    let images: Vec<T> = files.into_iter().filter(|f| is_image_mime(&mime(f))).collect();
    let skipped = total - images.len();
    (images, skipped)
}

pub(crate) fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Decodes a file into a `data:` URL with `FileReader`.
pub(crate) async fn read_as_data_url(file: &web_sys::File) -> Result<String, UploadError> {
    let name = file.name();
    if !is_image_mime(&file.type_()) {
        return Err(UploadError::NotAnImage {
            name,
            mime: file.type_(),
        });
    }

    let read_err = |e: JsValue| UploadError::Read {
        name: file.name(),
        message: js_message(&e),
    };

    let reader = web_sys::FileReader::new().map_err(read_err)?;

    // `loadend` fires exactly once, after either success or failure.
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let on_end = wasm_bindgen::closure::Closure::once_into_js(move || {
            let _ = match done.error() {
                Some(err) => reject.call1(&JsValue::NULL, &err),
                None => resolve.call1(&JsValue::NULL, &done.result().unwrap_or(JsValue::NULL)),
            };
        });
        reader.set_onloadend(Some(on_end.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(read_err)?;
    let value = JsFuture::from(promise).await.map_err(read_err)?;

    value.as_string().ok_or(UploadError::NotText { name })
}

/// Decodes every image in `files` and appends it to `gallery`.
///
/// Each file is its own task, so photos land in completion order, which for a
/// multi-file batch need not match the order they were picked in.
pub(crate) fn upload_files(app: AppState, gallery: GalleryName, files: Vec<web_sys::File>) {
    let (images, skipped) = partition_images(files, |f| f.type_());
    if skipped > 0 {
        log!("skipped {skipped} non-image file(s) for the {gallery} gallery");
    }

    for file in images {
        app.pending_uploads.update(|n| *n += 1);
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(src) => app.add_photo(gallery, src),
                Err(e) => warn!("{e}"),
            }
            app.pending_uploads.update(|n| *n = n.saturating_sub(1));
        });
    }
}

/// Replaces the profile picture with the first image in `files`.
pub(crate) fn upload_profile_photo(app: AppState, files: Vec<web_sys::File>) {
    let (mut images, _) = partition_images(files, |f| f.type_());
    if images.is_empty() {
        return;
    }
    let file = images.swap_remove(0);

    spawn_local(async move {
        match read_as_data_url(&file).await {
            Ok(src) => app.set_profile_photo(src),
            Err(e) => warn!("{e}"),
        }
    });
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::config::AlbumConfig;
    use crate::storage::{BrowserStorage, KvStore};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn file(name: &str, mime: &str, body: &str) -> web_sys::File {
        let blob_opts = web_sys::BlobPropertyBag::new();
        blob_opts.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(
            &js_sys::Array::of1(&JsValue::from_str(body)),
            &blob_opts,
        )
        .unwrap();

        let file_opts = web_sys::FilePropertyBag::new();
        file_opts.set_type(mime);
        web_sys::File::new_with_blob_sequence_and_options(
            &js_sys::Array::of1(&blob),
            name,
            &file_opts,
        )
        .unwrap()
    }

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_read_as_data_url_decodes_images_only() {
        let png = file("a.png", "image/png", "fake");
        let jpg = file("b.jpg", "image/jpeg", "also fake");
        let txt = file("notes.txt", "text/plain", "hello");

        let a = read_as_data_url(&png).await.unwrap();
        assert!(a.starts_with("data:image/png"), "{a}");
        let b = read_as_data_url(&jpg).await.unwrap();
        assert!(b.starts_with("data:image/jpeg"), "{b}");

        let err = read_as_data_url(&txt).await.unwrap_err();
        assert!(matches!(err, UploadError::NotAnImage { ref name, .. } if name == "notes.txt"));
    }

    #[wasm_bindgen_test]
    fn test_files_from_list_keeps_order() {
        let dt = web_sys::DataTransfer::new().unwrap();
        dt.items().add_with_file(&file("a.png", "image/png", "1")).unwrap();
        dt.items().add_with_file(&file("b.txt", "text/plain", "2")).unwrap();

        let names: Vec<String> = files_from_list(dt.files()).iter().map(|f| f.name()).collect();
        assert_eq!(names, ["a.png", "b.txt"]);
        assert!(files_from_list(None).is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_upload_files_lands_every_image_in_gallery() {
        // Mounting starts leptos' wasm executor, which `spawn_local` needs.
        let host = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        let _handle = leptos::mount::mount_to(host, || ());

        let config = AlbumConfig {
            storage_prefix: "wasm-upload-test".to_string(),
            ..AlbumConfig::default()
        };
        let key = config.keys().gallery(GalleryName::Puppy);
        BrowserStorage.remove(&key).unwrap();

        let app = AppState::with_store(BrowserStorage, config);
        let files = vec![
            file("1.png", "image/png", "one"),
            file("readme.txt", "text/plain", "skip me"),
            file("2.png", "image/png", "two"),
            file("3.gif", "image/gif", "three"),
        ];
        upload_files(app, GalleryName::Puppy, files);
        assert_eq!(app.pending_uploads.get_untracked(), 3);

        for _ in 0..100 {
            if app.pending_uploads.get_untracked() == 0 {
                break;
            }
            sleep(10).await;
        }
        assert_eq!(app.pending_uploads.get_untracked(), 0);

        let photos = app.photos(GalleryName::Puppy);
        assert_eq!(photos.len(), 3);
        assert!(photos.iter().all(|p| p.src.starts_with("data:image/")));

        BrowserStorage.remove(&key).unwrap();
    }
}
