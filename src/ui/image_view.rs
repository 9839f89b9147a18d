mod compare_view;
mod input_handling;

use crate::app::ComparatorApp;
use crate::ui::main::theme;
use egui::{self, Color32, RichText};

impl ComparatorApp {
    pub(crate) fn render_main_view(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::viewport_background(self.settings.dark_mode)))
            .show(ctx, |ui| {
                if self.session.has_pair() {
                    self.render_compare_view(ui);
                } else {
                    self.render_drop_hint(ui);
                }
            });
    }

    fn render_drop_hint(&mut self, ui: &mut egui::Ui) {
        let muted = theme::muted_text(self.settings.dark_mode);
        let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            let text = if hovering_files {
                RichText::new("Release to compare").size(22.0).color(Color32::from_rgb(70, 130, 255))
            } else {
                RichText::new("Drop two images here").size(22.0).color(muted)
            };
            ui.label(text);
            ui.add_space(8.0);
            ui.label(RichText::new("or press Ctrl+O to pick them").size(13.0).color(muted));
        });
    }
}
