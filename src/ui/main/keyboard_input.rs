use crate::app::{ComparatorApp, ViewCommand};
use egui::Key;
use image_comparator::viewer::Slot;

impl ComparatorApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Leave keys alone while a text field has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        let commands = ctx.input(|i| {
            let mut commands = Vec::new();
            let ctrl = i.modifiers.command;

            if ctrl {
                if i.key_pressed(Key::O) {
                    commands.push(ViewCommand::OpenFiles);
                }
                return commands;
            }

            if i.key_pressed(Key::Plus) || i.key_pressed(Key::Equals) {
                commands.push(ViewCommand::ZoomIn);
            }
            if i.key_pressed(Key::Minus) {
                commands.push(ViewCommand::ZoomOut);
            }
            if i.key_pressed(Key::Num0) {
                commands.push(ViewCommand::ResetView);
            }
            if i.key_pressed(Key::C) {
                commands.push(ViewCommand::CenterActive);
            }
            if i.key_pressed(Key::T) || i.key_pressed(Key::Tab) {
                commands.push(ViewCommand::ToggleActive);
            }
            if i.key_pressed(Key::O) {
                commands.push(ViewCommand::ToggleOverlay);
            }
            if i.key_pressed(Key::L) {
                commands.push(ViewCommand::ToggleLock);
            }
            if i.key_pressed(Key::Num1) {
                commands.push(ViewCommand::ShowSlot(Slot::First));
            }
            if i.key_pressed(Key::Num2) {
                commands.push(ViewCommand::ShowSlot(Slot::Second));
            }
            if i.key_pressed(Key::B) {
                commands.push(ViewCommand::ToggleStatusbar);
            }

            commands
        });

        self.apply_commands(commands);
    }
}
