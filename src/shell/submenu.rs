// Sub-menu visibility - the two collapsible panels in the sidebar
// At most one can be open; storing a single Option makes that impossible to break

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubMenu {
    Media,
    Playlist,
}

impl SubMenu {
    pub const ALL: [SubMenu; 2] = [SubMenu::Media, SubMenu::Playlist];

    pub fn label(&self) -> &'static str {
        match self {
            SubMenu::Media => "Media",
            SubMenu::Playlist => "Playlist",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubMenuController {
    open: Option<SubMenu>,
}

impl SubMenuController {
    /// Both panels start hidden.
    pub fn new() -> Self {
        Self { open: None }
    }

    /// Shows `menu` (collapsing the other one) when it is hidden, hides it when it is shown.
    pub fn toggle(&mut self, menu: SubMenu) {
        if self.is_visible(menu) {
            self.open = None;
            debug!("collapsed sub-menu {:?}", menu);
        } else {
            self.hide_all();
            self.open = Some(menu);
            debug!("expanded sub-menu {:?}", menu);
        }
    }

    pub fn hide_all(&mut self) {
        if let Some(menu) = self.open.take() {
            debug!("hid sub-menu {:?}", menu);
        }
    }

    pub fn is_visible(&self, menu: SubMenu) -> bool {
        self.open == Some(menu)
    }

    /// The panel currently shown, if any.
    pub fn visible(&self) -> Option<SubMenu> {
        self.open
    }

    pub fn any_visible(&self) -> bool {
        self.open.is_some()
    }
}
