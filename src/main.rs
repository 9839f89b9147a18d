mod app;
mod ui;

use app::ComparatorApp;
use eframe::egui;
use image_comparator::logging;
use image_comparator::settings::Settings;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    let settings = Settings::load();
    logging::init_tracing(settings.debug_logging);

    // image-comparator [IMAGE_A IMAGE_B]
    let initial: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(load_icon())
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Image Comparator",
        native_options,
        Box::new(move |cc| Ok(Box::new(ComparatorApp::new(cc, settings, initial)))),
    )
}

fn load_icon() -> egui::IconData {
    // Two overlapping frames, the right one half transparent
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let in_left = (6..38).contains(&x) && (10..42).contains(&y);
            let in_right = (26..58).contains(&x) && (22..54).contains(&y);

            match (in_left, in_right) {
                (true, true) => {
                    rgba[idx] = 120;
                    rgba[idx + 1] = 110;
                    rgba[idx + 2] = 230;
                    rgba[idx + 3] = 255;
                }
                (true, false) => {
                    rgba[idx] = 70;
                    rgba[idx + 1] = 130;
                    rgba[idx + 2] = 255;
                    rgba[idx + 3] = 255;
                }
                (false, true) => {
                    rgba[idx] = 170;
                    rgba[idx + 1] = 90;
                    rgba[idx + 2] = 200;
                    rgba[idx + 3] = 190;
                }
                (false, false) => {}
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
