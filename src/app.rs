mod image_loading;
mod view;

pub use view::ViewCommand;

use eframe::egui::{self, TextureHandle};
use image::DynamicImage;
use image_comparator::errors::ComparatorError;
use image_comparator::settings::Settings;
use image_comparator::viewer::{ComparisonSession, Slot};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

// Results of background decoding, tagged with the pair generation they belong to
pub enum LoaderMessage {
    ImageLoaded {
        generation: u64,
        slot: Slot,
        image: DynamicImage,
    },
    LoadError {
        generation: u64,
        slot: Slot,
        error: ComparatorError,
    },
}

pub struct ComparatorApp {
    // Settings
    pub settings: Settings,

    // Engine state, mutated only from the UI thread
    pub session: ComparisonSession,

    // GPU textures for the two slots; dropped when a new pair is accepted
    pub textures: [Option<TextureHandle>; 2],
    pub pending_loads: usize,

    // Async loading
    pub loader_tx: Sender<LoaderMessage>,
    pub loader_rx: Receiver<LoaderMessage>,

    pub status_message: Option<(String, Instant)>,

    // Context for repaint requests
    pub ctx: Option<egui::Context>,
}

impl ComparatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, initial: Vec<PathBuf>) -> Self {
        crate::ui::main::theme::apply_theme(&cc.egui_ctx, &settings);

        let (tx, rx) = channel();

        let mut app = Self {
            settings,
            session: ComparisonSession::new(),
            textures: [None, None],
            pending_loads: 0,
            loader_tx: tx,
            loader_rx: rx,
            status_message: None,
            ctx: Some(cc.egui_ctx.clone()),
        };

        // Two paths on the command line open straight into a comparison
        if !initial.is_empty() {
            app.open_paths(initial);
        }

        app
    }

    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    pub fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
        if let Some(ctx) = &self.ctx {
            crate::ui::main::theme::apply_theme(ctx, &self.settings);
        }
        self.settings.save();
    }

    pub fn toggle_statusbar(&mut self) {
        self.settings.show_statusbar = !self.settings.show_statusbar;
        self.settings.save();
    }
}
