// Main window - ties the sub-menus, navigation table and content host together
// Every user action funnels through `dispatch`

use super::host::ViewHost;
use super::nav::{self, NavAction, NavEntry};
use super::submenu::{SubMenu, SubMenuController};
use crate::views::{ChildView, ViewFactory, ViewKind};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// The shell window: sidebar with two sub-menus plus one hosted content view.
pub struct MainWindow {
    submenus: SubMenuController,
    host: ViewHost,
    factory: Box<dyn ViewFactory>,
    cursor: usize,
    focus: Focus,
    status: String,
    should_quit: bool,
}

impl MainWindow {
    pub fn new(factory: Box<dyn ViewFactory>) -> Self {
        Self {
            submenus: SubMenuController::new(),
            host: ViewHost::new(),
            factory,
            cursor: 0,
            focus: Focus::Sidebar,
            status: String::from("Ready"),
            should_quit: false,
        }
    }

    pub fn submenus(&self) -> &SubMenuController {
        &self.submenus
    }

    pub fn host(&self) -> &ViewHost {
        &self.host
    }

    pub fn active_view_mut(&mut self) -> Option<&mut (dyn ChildView + 'static)> {
        self.host.active_mut()
    }

    pub fn visible_entries(&self) -> Vec<&'static NavEntry> {
        nav::visible_entries(&self.submenus)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_entry(&self) -> Option<&'static NavEntry> {
        self.visible_entries().get(self.cursor).copied()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Applies one navigation action. Anything that opens a destination folds the sub-menus first.
    pub fn dispatch(&mut self, action: NavAction) {
        let previous = self.selected_entry();

        match action {
            NavAction::ToggleSubMenu(menu) => {
                self.submenus.toggle(menu);
                self.status = if self.submenus.is_visible(menu) {
                    format!("{} menu", menu.label())
                } else {
                    String::from("Ready")
                };
            }
            NavAction::Collapse => {
                self.submenus.hide_all();
            }
            NavAction::Open(kind) => {
                self.submenus.hide_all();
                self.open_view(kind);
            }
            NavAction::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }

        self.retarget_cursor(previous);
    }

    /// Activates a row of the navigation table (sidebar or quick-launch bar).
    pub fn activate(&mut self, entry: &NavEntry) {
        debug!("activated nav entry '{}'", entry.label);
        self.dispatch(entry.action);
        if entry.action == NavAction::Collapse {
            self.status = format!("{}: nothing to show yet", entry.label);
        }
    }

    pub fn activate_selected(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.activate(entry);
        }
    }

    pub fn toggle_submenu(&mut self, menu: SubMenu) {
        self.dispatch(NavAction::ToggleSubMenu(menu));
    }

    pub fn open(&mut self, kind: ViewKind) {
        self.dispatch(NavAction::Open(kind));
    }

    pub fn collapse(&mut self) {
        self.dispatch(NavAction::Collapse);
    }

    pub fn quit(&mut self) {
        self.dispatch(NavAction::Quit);
    }

    pub fn select_next(&mut self) {
        let len = self.visible_entries().len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor to a visible row; out-of-range rows are ignored.
    pub fn select_row(&mut self, row: usize) -> bool {
        if row < self.visible_entries().len() {
            self.cursor = row;
            self.focus = Focus::Sidebar;
            true
        } else {
            false
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar if !self.host.is_empty() => Focus::Content,
            _ => Focus::Sidebar,
        };
    }

    pub fn focus_sidebar(&mut self) {
        self.focus = Focus::Sidebar;
    }

    /// Closes the hosted view; call once on the way out.
    pub fn shutdown(&mut self) {
        self.host.close_active();
    }

    fn open_view(&mut self, kind: ViewKind) {
        let view = self.factory.build(kind);
        self.host.open(view);
        self.focus = Focus::Content;
        self.status = format!("Opened {}", kind.title());
    }

    /// Keeps the cursor on the same row after the visible set changed, falling
    /// back to the row's sub-menu toggle when the row itself was folded away.
    fn retarget_cursor(&mut self, previous: Option<&'static NavEntry>) {
        let rows = self.visible_entries();
        if rows.is_empty() {
            self.cursor = 0;
            return;
        }

        let same_row =
            previous.and_then(|prev| rows.iter().position(|row| std::ptr::eq(*row, prev)));
        let parent_row = previous.and_then(|prev| prev.parent).and_then(|menu| {
            rows.iter()
                .position(|row| row.action == NavAction::ToggleSubMenu(menu))
        });

        self.cursor = same_row
            .or(parent_row)
            .unwrap_or(self.cursor)
            .min(rows.len() - 1);
    }
}

impl Drop for MainWindow {
    fn drop(&mut self) {
        self.shutdown();
    }
}
