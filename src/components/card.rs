use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::footer::ExternalLinkIcon;
use crate::components::reveal::Reveal;
use crate::content::ContentItem;

/// Card for a project or blog post. Clicking anywhere on it follows the
/// item's navigation target: internal detail route in the same tab,
/// repositories and external links in a new one.
#[allow(non_snake_case)]
#[component]
pub fn ContentCard(item: &'static ContentItem, #[prop(default = 0)] index: usize) -> impl IntoView {
    let navigate = use_navigate();
    let on_click = move |_| {
        let target = item.navigation();
        if target.opens_new_tab() {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&target.href(), "_blank");
            }
        } else {
            navigate(&target.href(), Default::default());
        }
    };

    view! {
        <Reveal delay_ms=(index as u32) * 150>
            <div
                class="bg-jet rounded-2xl overflow-hidden hover:bg-jet/80 transition-all cursor-pointer group h-full flex flex-col"
                on:click=on_click
            >
                <div class="relative h-48 w-full">
                    {match &item.image {
                        Some(image) => {
                            view! {
                                <img
                                    src=image.clone()
                                    alt=item.title.clone()
                                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                                />
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="w-full h-full bg-dim-gray flex items-center justify-center">
                                    <span class="text-white text-sm">"Image Coming Soon"</span>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                    <div class="absolute inset-0 bg-gradient-to-t from-black/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                </div>

                <div class="p-6 flex-1 flex flex-col">
                    <div class="flex items-center justify-between mb-3">
                        <span class="text-coral text-sm font-medium">{item.category.clone()}</span>
                        {item
                            .badge
                            .as_ref()
                            .map(|badge| {
                                view! {
                                    <span class="bg-coral/20 text-coral text-xs px-2 py-1 rounded-full">
                                        {badge.clone()}
                                    </span>
                                }
                            })}
                    </div>

                    <h3 class="text-lg font-semibold text-white mb-3 group-hover:text-coral transition-colors leading-tight">
                        {item.title.clone()}
                    </h3>

                    <p class="text-dim-gray text-sm mb-4 leading-relaxed flex-1">
                        {item.description.clone()}
                    </p>

                    <div class="flex items-center justify-between mt-auto">
                        <span class="text-xs text-dim-gray">{item.date.clone()}</span>
                        <div class="flex items-center gap-2">
                            <span class="text-xs text-dim-gray capitalize">{item.kind.label()}</span>
                            {(item.link.is_some() || item.blog_path.is_some())
                                .then(|| {
                                    view! {
                                        <ExternalLinkIcon class="w-3 h-3 text-dim-gray group-hover:text-coral transition-colors" />
                                    }
                                })}
                        </div>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
