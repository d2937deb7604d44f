use crate::components::ui::Spinner;
use crate::models::GalleryName;
use crate::state::AppContext;
use crate::upload::{files_from_list, upload_files};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Click-to-browse and drag-and-drop target for one gallery.
#[component]
pub(crate) fn UploadZone(gallery: GalleryName) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let dragover: RwSignal<bool> = RwSignal::new(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        upload_files(app, gallery, files_from_list(input.files()));
        // Picking the same file twice in a row should still fire `change`.
        input.set_value("");
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        dragover.set(false);
        let files = files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
        upload_files(app, gallery, files);
    };

    view! {
        <div
            data-gallery=gallery.key()
            class=move || {
                if dragover.get() {
                    "flex cursor-pointer flex-col items-center justify-center gap-2 rounded-xl border-2 border-dashed border-primary bg-primary/5 px-6 py-8 text-center transition-colors"
                } else {
                    "flex cursor-pointer flex-col items-center justify-center gap-2 rounded-xl border-2 border-dashed border-border px-6 py-8 text-center transition-colors hover:border-primary/60"
                }
            }
            on:click=move |_| {
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                dragover.set(true);
            }
            on:dragleave=move |_| dragover.set(false)
            on:drop=on_drop
        >
            <input
                type="file"
                accept="image/*"
                multiple=true
                class="hidden"
                node_ref=input_ref
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
            <div class="text-sm font-medium">"Drop photos here or click to choose"</div>
            <div class="text-xs text-muted-foreground">"Images only; other files are skipped."</div>
            <Show when=move || { app.pending_uploads.get() > 0 } fallback=|| ().into_view()>
                <div class="inline-flex items-center gap-2 text-xs text-muted-foreground">
                    <Spinner />
                    {move || format!("Adding {} photo(s)...", app.pending_uploads.get())}
                </div>
            </Show>
        </div>
    }
}
