pub mod app;
pub mod blog_projects;
pub mod content;
pub mod home;
