//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::ClientConfig;
use crate::net::pocketbase::PocketBase;
use crate::pages::home::HomePage;
use crate::state::articles::FeedRevision;
use crate::state::session::SessionState;
use crate::util::theme::{self, Theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the config, backend client, session, feed revision and theme as
/// context, then mounts the header above the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let client = PocketBase::new(config.api_base.clone());
    let session = RwSignal::new(SessionState::default());
    let revision = RwSignal::new(FeedRevision::default());
    let theme = RwSignal::new(Theme::with_accent(config.accent.clone()));

    provide_context(config);
    provide_context(client);
    provide_context(session);
    provide_context(revision);
    provide_context(theme);

    // Stored preference is only readable in the browser.
    Effect::new(move || {
        let scheme = theme::read_preference();
        theme::apply(scheme);
        theme.update(|t| t.scheme = scheme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/photoblog.css"/>
        <Title text="Photography Blog"/>

        <div class="app" data-color-scheme=move || theme.get().scheme.as_str() style=move || theme.get().css_vars()>
            <Router>
                <Header/>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("blogs") view=HomePage/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
