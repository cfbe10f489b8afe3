//! Dark-mode preference: an explicit choice in local storage wins, otherwise
//! the system `prefers-color-scheme` media query decides.

use anyhow::anyhow;

const STORAGE_KEY: &str = "folio_dark_mode";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

fn system_prefers_dark() -> bool {
    media_query().map(|media| media.matches()).unwrap_or(false)
}

/// Stored preference if any, system preference otherwise.
pub fn initial() -> bool {
    storage()
        .and_then(|s| s.get(STORAGE_KEY).ok().flatten())
        .and_then(|s| s.parse::<bool>().ok())
        .unwrap_or_else(system_prefers_dark)
}

/// Whether the user has made an explicit choice, which takes precedence
/// over system preference changes.
pub fn has_override() -> bool {
    storage()
        .and_then(|s| s.get(STORAGE_KEY).ok().flatten())
        .is_some()
}

pub fn persist(dark: bool) -> anyhow::Result<()> {
    let storage = storage().ok_or_else(|| anyhow!("no local storage"))?;
    storage
        .set(STORAGE_KEY, &dark.to_string())
        .map_err(|e| anyhow!("{e:#?}"))
}
