pub mod interaction;
pub mod lanes;
pub mod position;
pub mod view;

pub use view::Timeline;
