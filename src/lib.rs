pub mod errors;
pub mod image_loader;
pub mod logging;
pub mod settings;
pub mod viewer;

#[cfg(test)]
mod tests;
