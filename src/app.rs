mod contact;
mod experience;
mod homepage;
mod interactions;
mod navbar;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::{PortfolioConfig, CONFIG_ELEMENT_ID};
use homepage::HomePage;
use navbar::Navbar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // only rendered on the server, the hydrate build reads it back from the page
    let config = use_context::<PortfolioConfig>().unwrap_or_default();
    let config_json = config.to_json().replace('<', "\\u003c");
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Shikhar Raj - DevOps engineer building cloud infrastructure, CI/CD pipelines and backend services."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/devops-portfolio.css" />
                <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=config_json></script>
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Shikhar Raj - {title}") />
        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <footer class="footer">
                <p>"© Shikhar Raj. Built with Rust, Leptos and a lot of YAML."</p>
            </footer>
        </Router>
    }
}
