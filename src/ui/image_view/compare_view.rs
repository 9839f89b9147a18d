use crate::app::ComparatorApp;
use crate::ui::main::theme;
use egui::{self, Color32, Rect, Vec2};

impl ComparatorApp {
    /// Paints the visible slots in the order the session hands them out,
    /// so the active image always ends up on top.
    pub(crate) fn render_compare_view(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(available, egui::Sense::click_and_drag());

        self.session.set_container(rect.width(), rect.height());
        self.handle_viewport_input(&response, ui);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, theme::viewport_background(self.settings.dark_mode));

        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        for view in self.session.slot_views() {
            if !view.should_draw() {
                continue;
            }
            let Some(texture) = &self.textures[view.slot.index()] else {
                continue;
            };

            let min = rect.min + Vec2::new(view.x, view.y);
            let size = Vec2::new(view.width as f32, view.height as f32) * view.scale;
            painter.image(
                texture.id(),
                Rect::from_min_size(min, size),
                uv,
                Color32::WHITE.gamma_multiply(view.opacity),
            );
        }

        if !self.session.is_ready() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Loading images…",
                egui::FontId::proportional(16.0),
                theme::muted_text(self.settings.dark_mode),
            );
        }
    }
}
