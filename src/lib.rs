#[allow(clippy::empty_docs)]
pub mod components;
pub mod content;
pub mod darkmode;
pub mod fetch;
#[allow(clippy::empty_docs)]
pub mod routes;
