use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardItem, CardList,
    CardTitle, Input, Label, Textarea,
};
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;

#[component]
pub(crate) fn StoryComposer() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let title: RwSignal<String> = RwSignal::new(String::new());
    let body: RwSignal<String> = RwSignal::new(String::new());

    let on_add = move |_| {
        if app.add_story(&title.get_untracked(), &body.get_untracked()) {
            title.set(String::new());
            body.set(String::new());
        }
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Write a story"</CardTitle>
            </CardHeader>
            <CardContent class="flex flex-col gap-3">
                <div class="flex flex-col gap-2">
                    <Label html_for="story-title">"Title"</Label>
                    <Input id="story-title" placeholder="The first walk" bind_value=title />
                </div>
                <div class="flex flex-col gap-2">
                    <Label html_for="story-body">"Story"</Label>
                    <Textarea id="story-body" placeholder="What happened?" bind_value=body />
                </div>
                <Button class="self-end" on:click=on_add>"Add story"</Button>
            </CardContent>
        </Card>
    }
}

/// Rebuilt in full whenever the log changes.
#[component]
pub(crate) fn StoryList() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let stories = move || app.stories.with(|log| log.stories().to_vec());

    view! {
        <Show
            when=move || !stories().is_empty()
            fallback=|| view! {
                <p class="py-6 text-center text-xs text-muted-foreground">"No stories yet."</p>
            }
        >
            <CardList>
                {move || {
                    stories()
                        .into_iter()
                        .map(|story| {
                            let id = story.id;
                            view! {
                                <CardItem>
                                    <h3 class="pr-8 text-base font-semibold">{story.title}</h3>
                                    <div class="text-xs text-muted-foreground">{story.date}</div>
                                    <p class="whitespace-pre-wrap text-sm">{story.body}</p>
                                    <Button
                                        variant=ButtonVariant::Ghost
                                        size=ButtonSize::IconSm
                                        class="absolute right-2 top-2 text-muted-foreground opacity-0 group-hover:opacity-100"
                                        attr:title="Delete story"
                                        on:click=move |_| app.delete_story(id)
                                    >
                                        <X />
                                    </Button>
                                </CardItem>
                            }
                        })
                        .collect_view()
                }}
            </CardList>
        </Show>
    }
}
