use crate::app::ComparatorApp;
use std::time::Duration;

impl eframe::App for ComparatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ctx = Some(ctx.clone());

        // Decoded images first so this frame already draws them
        self.process_loader_messages(ctx);

        self.handle_keyboard(ctx);
        self.handle_dropped_files(ctx);

        self.render_toolbar(ctx);
        if self.settings.show_statusbar {
            self.render_statusbar(ctx);
        }
        self.render_main_view(ctx);

        // Keep polling while decodes are outstanding or a message is showing
        if self.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else if self.expire_status_message() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
