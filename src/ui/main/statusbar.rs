use super::theme::muted_text;
use crate::app::ComparatorApp;
use egui::{self, Color32, Margin, RichText};

/// Transient status messages fade after this long.
const STATUS_MESSAGE_SECS: u64 = 3;

impl ComparatorApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        let dark_mode = self.settings.dark_mode;
        let (fill, text) = if dark_mode {
            (Color32::from_rgb(25, 25, 28), Color32::WHITE)
        } else {
            (Color32::from_rgb(232, 232, 236), Color32::from_rgb(30, 30, 34))
        };
        let muted = muted_text(dark_mode);

        egui::TopBottomPanel::bottom("statusbar")
            .frame(egui::Frame::NONE.fill(fill).inner_margin(Margin::symmetric(12, 4)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(status) = self.session.status() {
                        ui.label(RichText::new(&status.active_name).color(text).size(12.0));

                        if let Some(t) = self.session.current_transform().filter(|t| t.loaded) {
                            ui.label(
                                RichText::new(format!("{}×{}", t.width, t.height))
                                    .color(muted)
                                    .size(11.0),
                            );
                        }

                        ui.separator();
                        ui.label(RichText::new(status.zoom_text()).color(text).size(11.0));
                        ui.separator();
                        ui.label(RichText::new(status.mode_text()).color(text).size(11.0));
                    } else {
                        ui.label(RichText::new("No images").color(muted).size(11.0));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some((msg, time)) = &self.status_message {
                            if time.elapsed().as_secs() < STATUS_MESSAGE_SECS {
                                ui.label(RichText::new(msg).color(Color32::from_rgb(100, 200, 100)).size(11.0));
                            }
                        }

                        if self.is_loading() {
                            ui.spinner();
                            ui.label(RichText::new("Loading…").color(muted).size(11.0));
                        }
                    });
                });
            });
    }

    /// Drops the status message once it has been shown long enough.
    pub(crate) fn expire_status_message(&mut self) -> bool {
        match &self.status_message {
            Some((_, time)) if time.elapsed().as_secs() >= STATUS_MESSAGE_SECS => {
                self.status_message = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}
