mod admin;
mod blog;
mod contact;
mod footer;
mod homepage;
mod link_preview;
mod navbar;
mod projects;
mod skills;
mod storage;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{preview::PreviewConfig, site::PROFILE};
use admin::AdminPage;
use homepage::HomePage;
pub use link_preview::{SiteDelay, SiteResolver};
use storage::{provide_site_storage, ThemeState};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_site_storage();
    provide_context(SiteResolver::new(SiteDelay, PreviewConfig::default()));

    let theme = expect_context::<ThemeState>();

    view! {
        <Html {..} class=move || theme.theme().class() />
        <Title formatter=|title| format!("{} | {title}", PROFILE.name) />

        <Router>
            <div class="min-h-screen bg-white dark:bg-slate-900 text-slate-900 dark:text-white">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/admin") view=AdminPage />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <h1 class="text-3xl font-bold">"Page not found."</h1>
            <A href="/" attr:class="text-indigo-600 dark:text-indigo-400 hover:underline">
                "Back home"
            </A>
        </div>
    }
}
