use egui::Color32;
use image_comparator::settings::Settings;

pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    let mut visuals = if settings.dark_mode {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = Color32::from_rgb(24, 24, 27);
        visuals.extreme_bg_color = Color32::from_rgb(16, 16, 18);
        visuals
    } else {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = Color32::from_rgb(245, 245, 248);
        visuals.extreme_bg_color = Color32::from_rgb(228, 228, 232);
        visuals
    };

    visuals.selection.bg_fill = Color32::from_rgb(70, 130, 255);
    ctx.set_visuals(visuals);
}

/// Fill behind the images, slightly off the panel color so the image
/// edges stay visible when panned.
pub fn viewport_background(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(16, 16, 18)
    } else {
        Color32::from_rgb(218, 218, 222)
    }
}

pub fn muted_text(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::GRAY
    } else {
        Color32::from_rgb(100, 100, 108)
    }
}
