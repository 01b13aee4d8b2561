// The window itself - sub-menus, navigation table and the content host
// Toolkit-free state; the terminal frontend in `ui` only reads it and feeds it actions

pub mod host;     // single-slot child view host
pub mod nav;      // button-to-action table
pub mod submenu;  // mutually exclusive sub-menu panels
pub mod window;   // ties the pieces together

pub use host::ViewHost;
pub use nav::{NavAction, NavEntry, QUICK_LAUNCH, SIDEBAR};
pub use submenu::{SubMenu, SubMenuController};
pub use window::{Focus, MainWindow};
