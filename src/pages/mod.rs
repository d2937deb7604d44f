use crate::app::Tab;
use crate::components::album::{
    LightboxOverlay, PhotoGrid, ProfileCard, StoryComposer, StoryList, UploadZone,
};
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle,
};
use crate::models::GalleryName;
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Header, tab bar and the lightbox; the routed page renders in between.
#[component]
pub fn AlbumShell(children: Children) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let title = app.config.with_value(|c| c.album_title.clone());
    let location = use_location();
    let active = move || Tab::from_path(&location.pathname.get());

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-[1080px] px-4 py-8">
                <header class="mb-6 space-y-1">
                    <h1 class="text-2xl font-semibold">{title}</h1>
                    <p class="text-xs text-muted-foreground">"Photos and stories, kept in this browser."</p>
                </header>

                <nav class="mb-6 flex gap-1 border-b" role="tablist">
                    {Tab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <A href=tab.path()>
                                    <span
                                        role="tab"
                                        aria-selected=move || (active() == tab).to_string()
                                        class=move || {
                                            if active() == tab {
                                                "inline-block border-b-2 border-primary px-4 py-2 text-sm font-medium text-foreground"
                                            } else {
                                                "inline-block border-b-2 border-transparent px-4 py-2 text-sm text-muted-foreground hover:text-foreground"
                                            }
                                        }
                                    >
                                        {tab.label()}
                                    </span>
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <Show when=move || app.storage_error.get().is_some() fallback=|| ().into_view()>
                    {move || {
                        app.storage_error.get().map(|e| view! {
                            <Alert class="mb-4 border-destructive/30">
                                <AlertDescription class="text-destructive">
                                    {format!("Could not save: {e}")}
                                </AlertDescription>
                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::IconSm
                                    attr:title="Dismiss"
                                    on:click=move |_| app.dismiss_error()
                                >
                                    <X />
                                </Button>
                            </Alert>
                        })
                    }}
                </Show>

                <main>{children()}</main>
            </div>
            <LightboxOverlay />
        </div>
    }
}

#[component]
fn GallerySection(gallery: GalleryName) -> impl IntoView {
    let app = expect_context::<AppContext>().0;

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{gallery.heading()}</CardTitle>
                <CardDescription>
                    {move || format!("{} photos", app.galleries.with(|g| g.cached(gallery).len()))}
                </CardDescription>
            </CardHeader>
            <CardContent class="flex flex-col gap-4">
                <UploadZone gallery=gallery />
                <PhotoGrid gallery=gallery />
            </CardContent>
        </Card>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6">
            <ProfileCard />
            <GallerySection gallery=GalleryName::Home />
        </div>
    }
}

#[component]
pub fn PuppyPage() -> impl IntoView {
    view! { <GallerySection gallery=GalleryName::Puppy /> }
}

#[component]
pub fn GrownupPage() -> impl IntoView {
    view! { <GallerySection gallery=GalleryName::Grownup /> }
}

#[component]
pub fn StoriesPage() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6">
            <StoryComposer />
            <StoryList />
        </div>
    }
}
