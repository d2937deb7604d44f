use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::lightbox::LightboxCommand;
use crate::state::AppContext;
use icons::{ChevronLeft, ChevronRight, X};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Full-screen viewer. Mounted once; hidden while the lightbox is closed.
#[component]
pub(crate) fn LightboxOverlay() -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    // Arrow keys and Escape only act while the viewer is open.
    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if !app.lightbox.get_untracked().is_open() {
            return;
        }
        if let Some(cmd) = LightboxCommand::from_key(&ev.key()) {
            ev.prevent_default();
            app.lightbox_command(cmd);
        }
    });

    let step = move |cmd: LightboxCommand| {
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            app.lightbox_command(cmd);
        }
    };

    view! {
        <Show when=move || app.lightbox.get().is_open() fallback=|| ().into_view()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/90 p-4"
                role="dialog"
                aria-modal="true"
                // Clicks that reach the backdrop (not the photo or controls) close it.
                on:click=move |_| app.lightbox_command(LightboxCommand::Close)
            >
                <img
                    class="max-h-[90vh] max-w-[90vw] rounded-md object-contain shadow-2xl"
                    alt="Photo"
                    src=move || app.lightbox_photo().map(|p| p.src).unwrap_or_default()
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                />

                <Button
                    variant=ButtonVariant::Overlay
                    size=ButtonSize::Icon
                    class="absolute right-4 top-4"
                    attr:title="Close (Esc)"
                    on:click=step(LightboxCommand::Close)
                >
                    <X />
                </Button>
                <Button
                    variant=ButtonVariant::Overlay
                    size=ButtonSize::IconLg
                    class="absolute left-4 top-1/2 -translate-y-1/2"
                    attr:title="Previous"
                    on:click=step(LightboxCommand::Prev)
                >
                    <ChevronLeft />
                </Button>
                <Button
                    variant=ButtonVariant::Overlay
                    size=ButtonSize::IconLg
                    class="absolute right-4 top-1/2 -translate-y-1/2"
                    attr:title="Next"
                    on:click=step(LightboxCommand::Next)
                >
                    <ChevronRight />
                </Button>
            </div>
        </Show>
    }
}
