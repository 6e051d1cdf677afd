mod avatar;
mod contact;
mod header;
mod homepage;
mod reveal;
mod tagline;
mod whatsapp;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile::{footer_line, OWNER};
use header::Header;
use homepage::HomePage;
use whatsapp::WhatsAppButton;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <meta name="description" content="Portfolio of Sadgyan Singh, Full Stack Developer and AI/ML enthusiast." />
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

    view! {
        // sets the document title
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <div class="min-h-screen gradient-bg text-slate-900 dark:text-slate-100">
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <footer class="py-8 text-center text-xs text-slate-500 dark:text-slate-400">
                    {footer_line()}
                </footer>
                <WhatsAppButton />
            </div>
        </Router>
    }
}
