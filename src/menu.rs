//! Tray menu model.
//!
//! Platform hosts render [`MenuController::entries`] and feed clicks back as
//! [`AppEvent`](crate::events::AppEvent)s. The controller owns the toggle
//! label and the mirror check marks and keeps them in step with
//! [`SharedState`].

use std::sync::Arc;

use crate::model::constants::*;
use crate::model::{Mirror, SharedState};

/// One row of the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Pause/Resume toggle
    Toggle { label: &'static str },
    /// Exclusive mirror choice
    Mirrors {
        title: &'static str,
        options: Vec<MirrorOption>,
    },
    Separator,
    CheckForUpdates { label: &'static str },
    Quit { label: &'static str },
}

/// One item of the mirror submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorOption {
    pub mirror: Mirror,
    pub checked: bool,
}

impl MirrorOption {
    pub fn label(&self) -> &'static str {
        self.mirror.domain()
    }
}

/// Menu state: toggle label and one check mark per mirror.
#[derive(Debug)]
pub struct MenuController {
    state: Arc<SharedState>,
    toggle_label: &'static str,
    checked: [bool; Mirror::COUNT],
}

impl MenuController {
    /// Build the menu from the current shared state.
    pub fn new(state: Arc<SharedState>) -> Self {
        let mut controller = Self {
            toggle_label: toggle_label_for(state.is_monitoring()),
            checked: [false; Mirror::COUNT],
            state,
        };
        let selected = controller.state.mirror();
        controller.check_only(selected);
        controller
    }

    /// Flip monitoring and relabel the toggle. Returns the new flag.
    pub fn toggle_monitoring(&mut self) -> bool {
        let enabled = !self.state.is_monitoring();
        self.state.set_monitoring(enabled);
        self.toggle_label = toggle_label_for(enabled);
        enabled
    }

    /// Make `mirror` the selected mirror and move the check mark to it.
    pub fn select_mirror(&mut self, mirror: Mirror) {
        self.state.set_mirror(mirror);
        self.check_only(mirror);
    }

    fn check_only(&mut self, mirror: Mirror) {
        for (i, checked) in self.checked.iter_mut().enumerate() {
            *checked = i == mirror.index();
        }
    }

    pub fn is_monitoring(&self) -> bool {
        self.state.is_monitoring()
    }

    pub fn toggle_label(&self) -> &'static str {
        self.toggle_label
    }

    pub fn is_checked(&self, mirror: Mirror) -> bool {
        self.checked[mirror.index()]
    }

    /// Mirrors currently carrying a check mark.
    pub fn checked_mirrors(&self) -> Vec<Mirror> {
        Mirror::ALL
            .into_iter()
            .filter(|m| self.is_checked(*m))
            .collect()
    }

    /// Tooltip matching the monitoring flag.
    pub fn tooltip(&self) -> &'static str {
        if self.is_monitoring() {
            TOOLTIP_ACTIVE
        } else {
            TOOLTIP_PAUSED
        }
    }

    /// Snapshot of the menu, top to bottom.
    pub fn entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::Toggle {
                label: self.toggle_label,
            },
            MenuEntry::Mirrors {
                title: LABEL_MIRROR_MENU,
                options: Mirror::ALL
                    .into_iter()
                    .map(|mirror| MirrorOption {
                        mirror,
                        checked: self.is_checked(mirror),
                    })
                    .collect(),
            },
            MenuEntry::Separator,
            MenuEntry::CheckForUpdates {
                label: LABEL_CHECK_UPDATES,
            },
            MenuEntry::Quit { label: LABEL_QUIT },
        ]
    }
}

fn toggle_label_for(monitoring: bool) -> &'static str {
    if monitoring {
        LABEL_PAUSE
    } else {
        LABEL_RESUME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_labels() {
        let menu = MenuController::new(Arc::new(SharedState::new()));
        assert_eq!(menu.toggle_label(), LABEL_PAUSE);
        assert_eq!(menu.tooltip(), TOOLTIP_ACTIVE);
        assert_eq!(menu.checked_mirrors(), vec![Mirror::VxTwitter]);
    }

    #[test]
    fn test_new_follows_existing_state() {
        let state = Arc::new(SharedState::new());
        state.set_monitoring(false);
        state.set_mirror(Mirror::FixupX);
        let menu = MenuController::new(state);
        assert_eq!(menu.toggle_label(), LABEL_RESUME);
        assert_eq!(menu.checked_mirrors(), vec![Mirror::FixupX]);
    }

    #[test]
    fn test_entries_layout() {
        let menu = MenuController::new(Arc::new(SharedState::new()));
        let entries = menu.entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0], MenuEntry::Toggle { label: LABEL_PAUSE });
        match &entries[1] {
            MenuEntry::Mirrors { options, .. } => {
                assert_eq!(options.len(), Mirror::ALL.len());
                assert_eq!(options.iter().filter(|o| o.checked).count(), 1);
            }
            other => panic!("unexpected entry {:?}", other),
        }
        assert_eq!(entries[4], MenuEntry::Quit { label: LABEL_QUIT });
    }
}
