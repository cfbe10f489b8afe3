use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{card::ContentCard, footer::Footer, reveal::Reveal};
use crate::content::{self, ContentItem};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Filter {
    All,
    Projects,
    Blog,
}

impl Filter {
    fn apply(self) -> Vec<&'static ContentItem> {
        match self {
            Filter::All => content::all_content().iter().collect(),
            Filter::Projects => content::projects(),
            Filter::Blog => content::blogs(),
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn BlogProjects() -> impl IntoView {
    let (filter, set_filter) = signal(Filter::All);
    let button_class = move |this: Filter| {
        move || {
            if filter.get() == this {
                "px-6 py-2 rounded-full text-sm font-medium transition-all bg-coral text-white"
            } else {
                "px-6 py-2 rounded-full text-sm font-medium transition-all text-dim-gray hover:text-white"
            }
        }
    };
    view! {
        <Title text="Blog & Projects" />
        <div class="relative px-4 md:px-8 pb-4 md:pb-8">
            <div class="bg-night rounded-[2rem] md:rounded-[3rem] text-white overflow-hidden">
                <div class="px-8 py-20">
                    <div class="max-w-6xl mx-auto">
                        <Reveal>
                            <div class="text-center mb-16">
                                <h1 class="text-4xl md:text-5xl font-bold text-white mb-6">
                                    "Blog & Projects"
                                </h1>
                                <p class="text-dim-gray text-lg max-w-2xl mx-auto">
                                    "A complete collection of my work, research, and thoughts
                                    on technology and software development."
                                </p>
                            </div>
                        </Reveal>

                        <Reveal>
                            <div class="flex justify-center mb-12">
                                <div class="flex space-x-4 bg-jet rounded-full p-2">
                                    <button
                                        on:click=move |_| set_filter.set(Filter::All)
                                        class=button_class(Filter::All)
                                    >
                                        {format!("All ({})", content::all_content().len())}
                                    </button>
                                    <button
                                        on:click=move |_| set_filter.set(Filter::Projects)
                                        class=button_class(Filter::Projects)
                                    >
                                        {format!("Projects ({})", content::projects().len())}
                                    </button>
                                    <button
                                        on:click=move |_| set_filter.set(Filter::Blog)
                                        class=button_class(Filter::Blog)
                                    >
                                        {format!("Blog ({})", content::blogs().len())}
                                    </button>
                                </div>
                            </div>
                        </Reveal>

                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {move || {
                                filter
                                    .get()
                                    .apply()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        view! { <ContentCard item=item index=index /> }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
        <Footer />
    }
}
