pub mod card;
pub mod footer;
pub mod markdown;
pub mod nav;
pub mod reveal;
pub mod timeline;
