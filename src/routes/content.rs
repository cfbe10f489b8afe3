use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{hooks::use_params, params::Params};

use crate::components::{footer::Footer, markdown::Markdown};
use crate::content::{self, ContentItem};
use crate::fetch;

#[derive(PartialEq, Params)]
struct ContentParams {
    id: Option<String>,
}

#[allow(non_snake_case)]
#[component]
pub fn ContentDetail() -> impl IntoView {
    let params = use_params::<ContentParams>();
    let item = Memo::new(move |_| {
        params.with(|p| {
            p.as_ref()
                .ok()
                .and_then(|p| p.id.as_deref())
                .and_then(content::content_by_id)
        })
    });
    let body = LocalResource::new(move || {
        let item = item.get();
        async move {
            match item {
                Some(item) => Some(fetch::load_body(item).await),
                None => None,
            }
        }
    });

    view! {
        <Title text=move || {
            item.get().map(|item| item.title.clone()).unwrap_or_else(|| "Not Found".to_string())
        } />
        <div class="relative px-4 md:px-8 pb-4 md:pb-8">
            <div class="bg-night rounded-[2rem] md:rounded-[3rem] text-white overflow-hidden">
                <div class="px-8 py-20">
                    <div class="max-w-4xl mx-auto">
                        {move || match item.get() {
                            None => view! { <NotFound /> }.into_any(),
                            Some(item) => {
                                view! {
                                    <Header item=item />
                                    {move || {
                                        body.with(|body| match body {
                                            Some(Some(source)) => {
                                                view! { <Markdown source=source.clone() /> }
                                                    .into_any()
                                            }
                                            _ => view! { <Spinner /> }.into_any(),
                                        })
                                    }}
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>
        <Footer />
    }
}

#[allow(non_snake_case)]
#[component]
fn Header(item: &'static ContentItem) -> impl IntoView {
    view! {
        <div class="mb-12">
            <a href="/blog-projects" class="text-dim-gray hover:text-coral transition-colors text-sm">
                "← Back to Blog & Projects"
            </a>
            <div class="flex items-center space-x-3 mt-6 mb-4">
                <span class="text-coral text-sm font-medium uppercase tracking-wide">
                    {item.kind.label()}
                </span>
                <span class="text-dim-gray text-sm">{format!("{} • {}", item.category, item.date)}</span>
                {item
                    .badge
                    .as_ref()
                    .map(|badge| {
                        view! {
                            <span class="bg-coral text-white text-xs px-2 py-1 rounded-full">
                                {badge.clone()}
                            </span>
                        }
                    })}
            </div>
            <h1 class="text-3xl md:text-5xl font-bold text-white mb-4">{item.title.clone()}</h1>
            <p class="text-dim-gray text-lg mb-6">{item.description.clone()}</p>
            <div class="flex flex-wrap gap-4">
                {item
                    .link
                    .as_ref()
                    .map(|link| {
                        view! {
                            <a
                                href=link.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-block bg-coral hover:bg-coral/90 text-white px-5 py-2 rounded-full text-sm font-medium transition-colors"
                            >
                                "Visit project →"
                            </a>
                        }
                    })}
                {item
                    .github_repo
                    .as_ref()
                    .map(|repo| {
                        view! {
                            <a
                                href=format!("https://github.com/{repo}")
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-block bg-jet hover:bg-jet/80 text-white px-5 py-2 rounded-full text-sm font-medium transition-colors"
                            >
                                "View Source"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

#[allow(non_snake_case)]
#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-16">
            <div class="animate-spin rounded-full h-10 w-10 border-2 border-dim-gray border-t-coral"></div>
        </div>
    }
}

#[allow(non_snake_case)]
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <h1 class="text-4xl font-bold text-white mb-4">"Content Not Found"</h1>
            <p class="text-dim-gray mb-8">"The page you are looking for does not exist."</p>
            <a
                href="/"
                class="inline-block bg-coral hover:bg-coral/90 text-white px-6 py-3 rounded-full font-medium transition-colors"
            >
                "Back to Home"
            </a>
        </div>
    }
}
