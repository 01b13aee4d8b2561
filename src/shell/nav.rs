// Navigation table - every sidebar row and quick-launch button mapped to an action

use super::submenu::{SubMenu, SubMenuController};
use crate::views::ViewKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ToggleSubMenu(SubMenu),
    Open(ViewKind),
    /// Picks a destination that has no page yet, so the sub-menus just fold away.
    Collapse,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    /// `None` for top-level rows.
    pub parent: Option<SubMenu>,
    pub action: NavAction,
}

const fn top(label: &'static str, action: NavAction) -> NavEntry {
    NavEntry {
        label,
        parent: None,
        action,
    }
}

const fn child(parent: SubMenu, label: &'static str, action: NavAction) -> NavEntry {
    NavEntry {
        label,
        parent: Some(parent),
        action,
    }
}

pub static SIDEBAR: [NavEntry; 15] = [
    top("Media", NavAction::ToggleSubMenu(SubMenu::Media)),
    child(SubMenu::Media, "Play Music", NavAction::Open(ViewKind::PlayMusic)),
    child(SubMenu::Media, "Radio", NavAction::Collapse),
    child(SubMenu::Media, "Podcasts", NavAction::Collapse),
    child(SubMenu::Media, "Videos", NavAction::Collapse),
    top("Playlist", NavAction::ToggleSubMenu(SubMenu::Playlist)),
    child(SubMenu::Playlist, "New Playlist", NavAction::Collapse),
    child(SubMenu::Playlist, "Favorites", NavAction::Collapse),
    child(SubMenu::Playlist, "Recently Played", NavAction::Collapse),
    child(SubMenu::Playlist, "Most Played", NavAction::Collapse),
    top("Equalizer", NavAction::Collapse),
    top("Settings", NavAction::Collapse),
    top("Help", NavAction::Collapse),
    top("About", NavAction::Collapse),
    top("Exit", NavAction::Quit),
];

pub static QUICK_LAUNCH: [NavEntry; 3] = [
    top("Play Music", NavAction::Open(ViewKind::PlayMusic)),
    top("Album", NavAction::Open(ViewKind::Album)),
    top("Artist", NavAction::Open(ViewKind::Artist)),
];

/// Rows drawn right now: top-level rows always, children only under their open sub-menu.
pub fn visible_entries(submenus: &SubMenuController) -> Vec<&'static NavEntry> {
    SIDEBAR
        .iter()
        .filter(|entry| entry.parent.map_or(true, |menu| submenus.is_visible(menu)))
        .collect()
}
