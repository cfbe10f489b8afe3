use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Renders CommonMark (plus tables and strikethrough) to an HTML string.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[allow(non_snake_case)]
#[component]
pub fn Markdown(#[prop(into)] source: String) -> impl IntoView {
    let rendered = render_markdown(&source);
    view! { <div class="prose prose-lg prose-invert max-w-none" inner_html=rendered></div> }
}
