// tuneshell library - the media-player shell and its terminal frontend
// The window logic in `shell` knows nothing about terminals, which keeps it easy to test

pub mod config;  // settings and preferences
pub mod error;   // error types for the ambient layers
pub mod logging; // file-based tracing setup
pub mod shell;   // sub-menus, navigation table, content host
pub mod theme;   // color palettes
pub mod ui;      // terminal interface
pub mod views;   // the child views hosted in the content area

// Export the stuff other modules actually use
pub use config::Config;
pub use error::ShellError;
pub use shell::{MainWindow, SubMenu, ViewHost};
pub use views::{ChildView, ViewKind};
