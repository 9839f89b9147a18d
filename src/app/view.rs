use super::ComparatorApp;
use image_comparator::viewer::Slot;

/// Requests collected while drawing the toolbar or reading the keyboard,
/// applied once the UI pass has released its borrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    OpenFiles,
    ShowSlot(Slot),
    ToggleActive,
    ToggleOverlay,
    ToggleLock,
    ZoomIn,
    ZoomOut,
    ResetView,
    CenterActive,
    ToggleDarkMode,
    ToggleStatusbar,
}

impl ComparatorApp {
    pub fn apply_commands(&mut self, commands: Vec<ViewCommand>) {
        for command in commands {
            self.apply_command(command);
        }
    }

    pub fn apply_command(&mut self, command: ViewCommand) {
        tracing::trace!("view command {:?}", command);
        match command {
            ViewCommand::OpenFiles => self.open_files_dialog(),
            ViewCommand::ShowSlot(slot) => self.show_slot(slot),
            ViewCommand::ToggleActive => self.toggle_active_image(),
            ViewCommand::ToggleOverlay => {
                self.session.toggle_overlay();
                let msg = format!("Mode: {}", self.session.state().mode());
                self.set_status_message(msg);
            }
            ViewCommand::ToggleLock => {
                self.session.toggle_lock();
                let msg = if self.session.state().is_locked {
                    "Locked: zoom and pan move the active image only"
                } else {
                    "Unlocked: zoom and pan move both images"
                };
                self.set_status_message(msg.to_string());
            }
            ViewCommand::ZoomIn => {
                self.session.zoom_in();
            }
            ViewCommand::ZoomOut => {
                self.session.zoom_out();
            }
            ViewCommand::ResetView => self.session.reset_view(),
            ViewCommand::CenterActive => {
                if !self.session.center_active() && self.session.has_pair() {
                    self.set_status_message("Nothing to center yet".to_string());
                }
            }
            ViewCommand::ToggleDarkMode => self.toggle_dark_mode(),
            ViewCommand::ToggleStatusbar => self.toggle_statusbar(),
        }
    }

    fn show_slot(&mut self, slot: Slot) {
        if !self.session.has_pair() {
            return;
        }
        self.session.select_slot(slot);
    }

    fn toggle_active_image(&mut self) {
        if !self.session.toggle_active() {
            return;
        }
        if let Some(status) = self.session.status() {
            self.set_status_message(format!("Showing {}", status.active_name));
        }
    }
}
