use leptos::prelude::*;

use crate::components::{card::ContentCard, footer::Footer, reveal::Reveal, timeline::Timeline};
use crate::content;

#[allow(non_snake_case)]
#[component]
pub fn Home() -> impl IntoView {
    let featured = content::front_page_content();
    view! {
        <div class="relative px-4 md:px-8 pb-4 md:pb-8">
            <div class="bg-night rounded-[2rem] md:rounded-[3rem] text-white overflow-hidden">
                <div class="px-8 py-20">
                    <div class="max-w-6xl mx-auto">
                        // Hero
                        <Reveal>
                            <div class="text-center mb-16">
                                <h1 class="text-4xl md:text-6xl font-bold text-white mb-6">
                                    "Engineer, researcher, and tinkerer."
                                </h1>
                                <p class="text-dim-gray text-lg max-w-2xl mx-auto mb-8">
                                    "I build systems software, web applications, and the
                                    occasional research prototype. This site collects the
                                    projects and writing I am most proud of."
                                </p>
                                <a
                                    href="/blog-projects"
                                    class="inline-block bg-coral hover:bg-coral/90 text-white px-6 py-3 rounded-full font-medium transition-colors"
                                >
                                    "Browse all work →"
                                </a>
                            </div>
                        </Reveal>

                        // Featured content
                        <Reveal>
                            <h2 class="text-2xl md:text-3xl font-bold text-white mb-8 text-center">
                                "Featured"
                            </h2>
                        </Reveal>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-16">
                            {featured
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| view! { <ContentCard item=item index=index /> })
                                .collect_view()}
                        </div>

                        // Career timeline
                        <Reveal>
                            <Timeline />
                        </Reveal>
                    </div>
                </div>
            </div>
        </div>
        <Footer />
    }
}
