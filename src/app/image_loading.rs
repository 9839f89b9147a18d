use super::{ComparatorApp, LoaderMessage};
use egui::{ColorImage, TextureOptions};
use image::DynamicImage;
use image_comparator::errors::ComparatorError;
use image_comparator::image_loader::{self, display_name, SUPPORTED_EXTENSIONS};
use image_comparator::viewer::Slot;
use std::path::PathBuf;

impl ComparatorApp {
    pub fn open_files_dialog(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .set_title("Select two images to compare")
            .add_filter("Images", SUPPORTED_EXTENSIONS)
            .pick_files()
        {
            self.open_paths(paths);
        }
    }

    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let paths: Vec<PathBuf> = dropped.into_iter().filter_map(|file| file.path).collect();
        self.open_paths(paths);
    }

    /// Takes the first two supported images out of `paths` and starts
    /// decoding them. Anything else leaves the current pair untouched.
    pub fn open_paths(&mut self, paths: Vec<PathBuf>) {
        let pair = match image_loader::select_pair(paths) {
            Ok(pair) => pair,
            Err(e) => {
                e.log();
                self.set_status_message(e.user_message());
                return;
            }
        };

        let names = [display_name(&pair[0]), display_name(&pair[1])];
        tracing::info!("Comparing {} with {}", names[0], names[1]);

        let generation = self.session.accept_pair(names);
        // Old textures are released here, before the new decodes land
        self.textures = [None, None];
        self.pending_loads = 2;

        for (slot, path) in Slot::BOTH.into_iter().zip(pair) {
            self.spawn_decode(generation, slot, path);
        }
    }

    fn spawn_decode(&self, generation: u64, slot: Slot, path: PathBuf) {
        let tx = self.loader_tx.clone();
        let ctx = self.ctx.clone();
        let max_megapixels = self.settings.max_image_megapixels;

        rayon::spawn(move || {
            let msg = match image_loader::load_image(&path, max_megapixels) {
                Ok(image) => LoaderMessage::ImageLoaded {
                    generation,
                    slot,
                    image,
                },
                Err(error) => LoaderMessage::LoadError {
                    generation,
                    slot,
                    error,
                },
            };
            let _ = tx.send(msg);
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }

    pub fn process_loader_messages(&mut self, ctx: &egui::Context) {
        // Limit the number of messages processed per frame to keep the UI responsive
        let max_messages_per_frame = 4;
        let mut messages_processed = 0;

        while messages_processed < max_messages_per_frame {
            match self.loader_rx.try_recv() {
                Ok(msg) => {
                    self.handle_loader_message(msg, ctx);
                    messages_processed += 1;
                }
                Err(_) => break,
            }
        }
    }

    fn handle_loader_message(&mut self, msg: LoaderMessage, ctx: &egui::Context) {
        match msg {
            LoaderMessage::ImageLoaded {
                generation,
                slot,
                image,
            } => self.handle_image_loaded(generation, slot, image, ctx),
            LoaderMessage::LoadError {
                generation,
                slot,
                error,
            } => self.handle_load_error(generation, slot, error),
        }
    }

    fn handle_image_loaded(&mut self, generation: u64, slot: Slot, image: DynamicImage, ctx: &egui::Context) {
        if generation != self.session.generation() {
            tracing::debug!("Dropping decoded {} from superseded pair {}", slot.label(), generation);
            return;
        }

        let rgba = image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice());

        let name = self
            .session
            .names()
            .map(|names| names[slot.index()].clone())
            .unwrap_or_else(|| slot.label().to_string());
        let texture = ctx.load_texture(name, color_image, TextureOptions::LINEAR);

        self.textures[slot.index()] = Some(texture);
        self.pending_loads = self.pending_loads.saturating_sub(1);
        self.session.image_ready(generation, slot, rgba.width(), rgba.height());
    }

    fn handle_load_error(&mut self, generation: u64, slot: Slot, error: ComparatorError) {
        if generation != self.session.generation() {
            return;
        }

        error.log();
        // Half a pair cannot be compared; drop back to the empty viewport
        self.session.clear();
        self.textures = [None, None];
        self.pending_loads = 0;
        self.set_status_message(format!("{}: {}", slot.label(), error.user_message()));
    }
}
