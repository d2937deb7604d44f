use crate::components::ui::{Card, CardContent, Label};
use crate::models::ProfileField;
use crate::state::AppContext;
use crate::upload::{files_from_list, upload_profile_photo};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub(crate) fn ProfileCard() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let picker_ref: NodeRef<html::Input> = NodeRef::new();

    let on_pick = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        upload_profile_photo(app, files_from_list(input.files()));
        input.set_value("");
    };

    let photo = move || app.profile.with(|p| p.photo().map(str::to_string));

    view! {
        <Card>
            <CardContent class="flex flex-col items-center gap-6 sm:flex-row sm:items-start">
                <button
                    type="button"
                    class="relative size-32 shrink-0 overflow-hidden rounded-full border-4 border-primary/20 bg-muted hover:cursor-pointer"
                    title="Change photo"
                    on:click=move |_| {
                        if let Some(input) = picker_ref.get() {
                            input.click();
                        }
                    }
                >
                    {move || match photo() {
                        Some(src) => view! { <img src=src alt="Profile" class="size-full object-cover" /> }.into_any(),
                        None => view! {
                            <span class="flex size-full items-center justify-center text-xs text-muted-foreground">
                                "Add a photo"
                            </span>
                        }.into_any(),
                    }}
                </button>
                <input
                    type="file"
                    accept="image/*"
                    class="hidden"
                    node_ref=picker_ref
                    on:change=on_pick
                />

                <dl class="grid w-full gap-3">
                    {ProfileField::ALL
                        .into_iter()
                        .map(|field| view! { <ProfileFieldRow field=field /> })
                        .collect_view()}
                </dl>
            </CardContent>
        </Card>
    }
}

/// One inline-editable value; saved when it loses focus.
#[component]
fn ProfileFieldRow(field: ProfileField) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let id = format!("profile-{}", field.key());

    // Read once: re-rendering the text while the user edits would move the caret.
    let initial = app.profile.with_untracked(|p| p.field(field).to_string());

    let on_blur = move |ev: web_sys::FocusEvent| {
        let text = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .and_then(|n| n.text_content())
            .unwrap_or_default();
        app.set_profile_field(field, &text);
    };

    view! {
        <div class="flex flex-col gap-1">
            <Label html_for=id.clone()>{field.label()}</Label>
            <dd
                id=id
                class="editable rounded px-1 text-sm outline-none focus:bg-accent/50 focus:ring-1 focus:ring-ring"
                contenteditable="true"
                spellcheck="false"
                on:blur=on_blur
            >
                {initial}
            </dd>
        </div>
    }
}
