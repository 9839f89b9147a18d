use crate::app::{ComparatorApp, ViewCommand};
use egui::{self, Color32, CornerRadius, Margin, RichText, Vec2};
use image_comparator::viewer::Slot;

impl ComparatorApp {
    pub fn render_toolbar(&mut self, ctx: &egui::Context) {
        // Collect state needed for decisions
        let has_pair = self.session.has_pair();
        let can_toggle = self.session.can_toggle();
        let state = *self.session.state();
        let dark_mode = self.settings.dark_mode;
        let colors = ToolbarColors::new(dark_mode);

        // Collect actions to perform after UI
        let mut commands = Vec::new();

        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::NONE.fill(colors.background).inner_margin(Margin::symmetric(8, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(4.0, 0.0);

                    if text_button(ui, "Open…", "Open two images (Ctrl+O)", &colors).clicked() {
                        commands.push(ViewCommand::OpenFiles);
                    }

                    toolbar_separator(ui, &colors);

                    ui.add_enabled_ui(has_pair, |ui| {
                        for (slot, key) in [(Slot::First, "1"), (Slot::Second, "2")] {
                            let label = format!("Show {}", slot.label());
                            let active = state.active_slot == slot;
                            if toggle_button(ui, &label, &format!("Make {} active ({key})", slot.label()), active, &colors)
                                .clicked()
                            {
                                commands.push(ViewCommand::ShowSlot(slot));
                            }
                        }
                    });

                    ui.add_enabled_ui(can_toggle, |ui| {
                        if text_button(ui, "Toggle", "Swap the active image (T / Tab)", &colors).clicked() {
                            commands.push(ViewCommand::ToggleActive);
                        }
                    });

                    toolbar_separator(ui, &colors);

                    if toggle_button(ui, "Overlay", "Show both images half transparent (O)", state.is_overlay_mode, &colors)
                        .clicked()
                    {
                        commands.push(ViewCommand::ToggleOverlay);
                    }
                    if toggle_button(ui, "Lock", "Zoom and pan the active image only (L)", state.is_locked, &colors)
                        .clicked()
                    {
                        commands.push(ViewCommand::ToggleLock);
                    }

                    toolbar_separator(ui, &colors);

                    ui.add_enabled_ui(has_pair, |ui| {
                        if text_button(ui, "−", "Zoom out (-)", &colors).clicked() {
                            commands.push(ViewCommand::ZoomOut);
                        }
                        if text_button(ui, "+", "Zoom in (+)", &colors).clicked() {
                            commands.push(ViewCommand::ZoomIn);
                        }
                        if text_button(ui, "Reset View", "Back to 100% and centered (0)", &colors).clicked() {
                            commands.push(ViewCommand::ResetView);
                        }
                        if text_button(ui, "Center", "Center the active image (C)", &colors).clicked() {
                            commands.push(ViewCommand::CenterActive);
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (icon, tip) = if dark_mode {
                            ("☀", "Switch to light theme")
                        } else {
                            ("☾", "Switch to dark theme")
                        };
                        if text_button(ui, icon, tip, &colors).clicked() {
                            commands.push(ViewCommand::ToggleDarkMode);
                        }
                    });
                });
            });

        self.apply_commands(commands);
    }
}

struct ToolbarColors {
    background: Color32,
    text: Color32,
    active: Color32,
    separator: Color32,
}

impl ToolbarColors {
    fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color32::from_rgb(28, 28, 32),
                text: Color32::from_rgb(220, 220, 225),
                active: Color32::from_rgb(70, 130, 255),
                separator: Color32::from_rgb(60, 60, 65),
            }
        } else {
            Self {
                background: Color32::from_rgb(236, 236, 240),
                text: Color32::from_rgb(40, 40, 45),
                active: Color32::from_rgb(110, 160, 255),
                separator: Color32::from_rgb(190, 190, 198),
            }
        }
    }
}

fn text_button(ui: &mut egui::Ui, label: &str, tooltip: &str, colors: &ToolbarColors) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(colors.text).size(13.0))
            .fill(Color32::TRANSPARENT)
            .corner_radius(CornerRadius::same(4))
            .min_size(Vec2::new(28.0, 28.0)),
    )
    .on_hover_text(tooltip)
}

fn toggle_button(ui: &mut egui::Ui, label: &str, tooltip: &str, active: bool, colors: &ToolbarColors) -> egui::Response {
    let (bg, fg) = if active {
        (colors.active, Color32::WHITE)
    } else {
        (Color32::TRANSPARENT, colors.text)
    };

    ui.add(
        egui::Button::new(RichText::new(label).color(fg).size(13.0))
            .fill(bg)
            .corner_radius(CornerRadius::same(4))
            .min_size(Vec2::new(28.0, 28.0)),
    )
    .on_hover_text(tooltip)
}

fn toolbar_separator(ui: &mut egui::Ui, colors: &ToolbarColors) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(1.0, 20.0), egui::Sense::hover());
    ui.painter().line_segment(
        [rect.left_top(), rect.left_bottom()],
        egui::Stroke::new(1.0, colors.separator),
    );
}
