use leptos::{prelude::*, tachys::dom::event_target_checked};

use crate::darkmode;
use crate::routes::app::DarkMode;

#[allow(non_snake_case)]
#[component]
pub fn Nav() -> impl IntoView {
    let dark_mode = expect_context::<(ReadSignal<DarkMode>, WriteSignal<DarkMode>)>();
    view! {
        <nav class="border-gray-200 bg-white dark:bg-night dark:border-dim-gray/40 dark:text-white">
            <div class="flex flex-wrap items-center justify-between max-w-6xl mx-auto p-4">
                <a href="/" class="flex items-center space-x-2">
                    <span class="self-center text-2xl font-semibold whitespace-nowrap">"Folio"</span>
                </a>
                <div class="flex items-center gap-6">
                    <a href="/" class="text-sm font-medium hover:text-coral transition-colors">
                        "Home"
                    </a>
                    <a
                        href="/blog-projects"
                        class="text-sm font-medium hover:text-coral transition-colors"
                    >
                        "Blog & Projects"
                    </a>
                    <label class="relative flex items-center group text-sm cursor-pointer">
                        <span class="sr-only">"Dark mode"</span>
                        <input
                            type="checkbox"
                            class="absolute left-1/2 -translate-x-1/2 w-full h-full peer appearance-none rounded-md"
                            prop:checked=move || dark_mode.0.read().0
                            on:change=move |ev| {
                                let dark = event_target_checked(&ev);
                                dark_mode.1.set(DarkMode(dark));
                                if let Err(error) = darkmode::persist(dark) {
                                    tracing::warn!(%error, "failed to persist dark mode");
                                }
                            }
                        />
                        <span class="w-10 h-6 flex items-center flex-shrink-0 p-1 bg-gray-300 dark:bg-jet rounded-full duration-300 ease-in-out peer-checked:bg-coral after:w-4 after:h-4 after:bg-white after:rounded-full after:shadow-md after:duration-300 peer-checked:after:translate-x-4"></span>
                    </label>
                </div>
            </div>
        </nav>
    }
}
