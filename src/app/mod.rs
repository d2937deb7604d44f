use crate::pages::{AlbumShell, GrownupPage, HomePage, PuppyPage, StoriesPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Top-level tabs; each one is a client route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
    Home,
    Puppy,
    Grownup,
    Stories,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Self::Home, Self::Puppy, Self::Grownup, Self::Stories];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Puppy => "/puppy",
            Self::Grownup => "/grownup",
            Self::Stories => "/stories",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Puppy => "Puppy",
            Self::Grownup => "Grown Up",
            Self::Stories => "Stories",
        }
    }

    /// Unknown paths highlight `Home`, matching the router's fallback.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|t| t.path().trim_end_matches('/') == path)
            .unwrap_or(Self::Home)
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <AlbumShell>
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("puppy") view=PuppyPage />
                    <Route path=path!("grownup") view=GrownupPage />
                    <Route path=path!("stories") view=StoriesPage />
                </Routes>
            </AlbumShell>
        </Router>
    }
}
