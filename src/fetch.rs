//! Plain-text retrieval of Markdown bodies, with local fallbacks.
//!
//! Nothing here is fatal: every failure path degrades to a generated
//! document built from the content item's own metadata.

use anyhow::{anyhow, bail, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::content::ContentItem;

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

/// Fetches a URL and returns its body as text. Non-2xx statuses are errors.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch returned a non-Response value"))?;
    if !response.ok() {
        bail!("GET {url} returned status {}", response.status());
    }
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| anyhow!("response body was not text"))
}

/// Generated body for items with no fetchable source.
pub fn fallback_body(item: &ContentItem) -> String {
    format!(
        "# {}\n\n{}\n\n*No additional details available.*",
        item.title, item.description
    )
}

fn blog_fallback() -> String {
    "# Blog Post\n\nUnable to load blog post content.".to_string()
}

fn readme_fallback(item: &ContentItem) -> String {
    format!(
        "# {}\n\n{}\n\n*Unable to load the project README from GitHub.*",
        item.title, item.description
    )
}

async fn fetch_readme(repo: &str) -> Result<String> {
    let main = format!("https://raw.githubusercontent.com/{repo}/main/README.md");
    match fetch_text(&main).await {
        Ok(text) => Ok(text),
        // Older repositories still use master as the default branch.
        Err(_) => {
            let master = format!("https://raw.githubusercontent.com/{repo}/master/README.md");
            fetch_text(&master).await
        }
    }
}

/// Loads the Markdown body for a content item. Never fails; failures are
/// logged and replaced with a locally generated document.
pub async fn load_body(item: &ContentItem) -> String {
    if let Some(path) = &item.blog_path {
        return match fetch_text(path).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(id = %item.id, %error, "failed to load blog post");
                blog_fallback()
            }
        };
    }
    if let Some(repo) = &item.github_repo {
        return match fetch_readme(repo).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(id = %item.id, %error, "failed to load project README");
                readme_fallback(item)
            }
        };
    }
    fallback_body(item)
}
