mod image_view;
pub mod main;
mod toolbar;
