use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}
    clx! {CardDescription, p, "text-muted-foreground text-sm"}

    // Story entries.
    clx! {CardList, ul, "flex flex-col gap-4"}
    clx! {CardItem, li, "group relative flex flex-col gap-1 rounded-lg border bg-card px-4 py-3 shadow-xs"}
}

#[allow(unused_imports)]
pub use components::*;
