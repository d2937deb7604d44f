use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::models::GalleryName;
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;

#[component]
pub(crate) fn PhotoGrid(gallery: GalleryName) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let photos = move || app.photos(gallery);

    view! {
        <Show
            when=move || !photos().is_empty()
            fallback=|| view! {
                <p class="py-6 text-center text-xs text-muted-foreground">"No photos yet."</p>
            }
        >
            <div class="grid grid-cols-2 gap-3 sm:grid-cols-3 lg:grid-cols-4">
                <For
                    each=photos
                    key=|photo| photo.id
                    children=move |photo| {
                        let id = photo.id;
                        view! {
                            <div
                                class="group relative aspect-square cursor-zoom-in overflow-hidden rounded-lg bg-muted"
                                on:click=move |_| app.open_photo(gallery, id)
                            >
                                <img
                                    src=photo.src
                                    alt="Photo"
                                    loading="lazy"
                                    class="size-full object-cover transition-transform duration-300 group-hover:scale-105"
                                />
                                <Button
                                    variant=ButtonVariant::Destructive
                                    size=ButtonSize::IconSm
                                    class="absolute right-2 top-2 opacity-0 group-hover:opacity-100"
                                    attr:title="Delete photo"
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.stop_propagation();
                                        app.delete_photo(gallery, id);
                                    }
                                >
                                    <X />
                                </Button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
