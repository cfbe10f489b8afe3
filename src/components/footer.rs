use leptos::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn GithubIcon(#[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0 1 12 6.844a9.59 9.59 0 0 1 2.504.337c1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.202 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0 0 22 12.017C22 6.484 17.522 2 12 2Z"
            ></path>
        </svg>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ExternalLinkIcon(#[prop(default = "w-4 h-4")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="m7 7 10 10M7 17l10-10"></path>
        </svg>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="max-w-6xl mx-auto px-4 py-10 flex flex-col md:flex-row items-center justify-between gap-4 text-dim-gray text-sm">
            <p>"Built with Rust and Leptos."</p>
            <div class="flex items-center gap-4">
                <a
                    href="https://github.com/folio-site"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hover:text-coral transition-colors"
                    aria-label="GitHub"
                >
                    <GithubIcon />
                </a>
            </div>
        </footer>
    }
}
