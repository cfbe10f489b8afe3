use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    components::nav::Nav,
    darkmode,
    routes::{blog_projects::BlogProjects, content::ContentDetail, home::Home},
};

pub(crate) struct DarkMode(pub bool);

#[allow(non_snake_case)]
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let (dark_mode, set_dark_mode) = signal(DarkMode(false));
    provide_context((dark_mode, set_dark_mode));
    Effect::new(move || {
        set_dark_mode.set(DarkMode(darkmode::initial()));
    });
    // Track system preference changes until the user picks explicitly.
    Effect::new(move || {
        let Some(media) = darkmode::media_query() else {
            return;
        };
        let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |ev: web_sys::MediaQueryListEvent| {
                if !darkmode::has_override() {
                    set_dark_mode.set(DarkMode(ev.matches()));
                }
            },
        );
        if media
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            let cleanup = send_wrapper::SendWrapper::new((media, callback));
            on_cleanup(move || {
                let (media, callback) = cleanup.take();
                let _ = media
                    .remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
            });
        }
    });
    let formatter = |text: String| {
        format!(
            "Folio{}{}",
            if text.is_empty() { "" } else { " - " },
            if text.is_empty() { "" } else { &text },
        )
    };
    view! {
        <Title formatter />
        <Stylesheet id="folio" href="/assets/style.css" />
        <Html class:dark=move || dark_mode.read().0 />
        <Router>
            <div
                id="root"
                class="min-h-screen bg-white text-night dark:bg-night dark:text-white"
                class:dark=move || dark_mode.read().0
            >
                <Nav />
                <main>
                    <Routes fallback=|| "Not Found.">
                        <Route path=path!("") view=Home />
                        <Route path=path!("blog-projects") view=BlogProjects />
                        <Route path=path!("content/:id") view=ContentDetail />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
