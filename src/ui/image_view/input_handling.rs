use crate::app::{ComparatorApp, ViewCommand};
use egui::{self, Pos2, Rect};
use image_comparator::viewer::{PointerButton, WheelDirection};

fn viewer_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Secondary,
    }
}

/// Viewport-local coordinates, origin at the top-left of the compare area.
fn local(rect: Rect, pos: Pos2) -> (f32, f32) {
    let v = pos - rect.min;
    (v.x, v.y)
}

impl ComparatorApp {
    pub(crate) fn handle_viewport_input(&mut self, response: &egui::Response, ui: &mut egui::Ui) {
        let rect = response.rect;

        // Drag start: report where the press happened, not where the drag threshold was crossed
        for button in [egui::PointerButton::Primary, egui::PointerButton::Secondary, egui::PointerButton::Middle] {
            if response.drag_started_by(button) {
                let press = ui
                    .input(|i| i.pointer.press_origin())
                    .or_else(|| response.interact_pointer_pos());
                if let Some(pos) = press {
                    let (x, y) = local(rect, pos);
                    self.session.pointer_down(viewer_button(button), x, y);
                }
            }
        }

        if self.session.state().is_dragging() {
            match ui.input(|i| i.pointer.latest_pos()) {
                Some(pos) if rect.contains(pos) => {
                    if response.dragged() {
                        let (x, y) = local(rect, pos);
                        self.session.pointer_move(x, y);
                    }
                }
                // Leaving the viewport cancels the gesture
                _ => self.session.pointer_leave(),
            }
        }

        if response.drag_stopped() || ui.input(|i| i.pointer.primary_released()) {
            self.session.pointer_up();
        }

        if response.hovered() {
            // egui reports wheel-up as positive, the opposite of the DOM convention
            let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
            if let Some(direction) = WheelDirection::from_delta_y(-scroll_delta) {
                self.session.wheel(direction);
            }
        }

        if response.double_clicked() {
            self.apply_command(ViewCommand::ResetView);
        }

        let has_pair = self.session.has_pair();
        let can_toggle = self.session.can_toggle();
        let mut commands = Vec::new();
        response.context_menu(|ui| {
            ui.add_enabled_ui(has_pair, |ui| {
                if ui.button("Reset View").clicked() {
                    commands.push(ViewCommand::ResetView);
                    ui.close_menu();
                }
                if ui.button("Center Active Image").clicked() {
                    commands.push(ViewCommand::CenterActive);
                    ui.close_menu();
                }
            });
            if ui.add_enabled(can_toggle, egui::Button::new("Toggle Image")).clicked() {
                commands.push(ViewCommand::ToggleActive);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Open Images…").clicked() {
                commands.push(ViewCommand::OpenFiles);
                ui.close_menu();
            }
        });
        self.apply_commands(commands);
    }
}
