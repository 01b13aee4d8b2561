// Event loop - draw, wait for input, apply it to the window
// Everything here runs on one task; view hooks are called synchronously

use super::events::{AppEvent, EventHandler, KeyContext};
use super::render::{self, Hit, ShellLayout};
use super::TerminalManager;
use crate::config::Config;
use crate::error::Result;
use crate::shell::{Focus, MainWindow, NavAction, QUICK_LAUNCH};
use crate::theme::Palette;
use crate::views::{LibraryViews, ViewKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tracing::{debug, info};

pub struct App {
    config: Config,
    terminal: TerminalManager,
    events: EventHandler,
    window: MainWindow,
    palette: Palette,
    layout: ShellLayout,
}

impl App {
    pub fn new(config: Config, start_view: Option<ViewKind>) -> Result<Self> {
        let factory = LibraryViews::new(config.library.music_directories.clone());
        let mut window = MainWindow::new(Box::new(factory));
        if let Some(kind) = start_view.or(config.ui.start_view) {
            window.open(kind);
        }

        let terminal = TerminalManager::new(config.ui.mouse)?;
        let events = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms.max(16)));
        let palette = config.ui.theme.palette();

        Ok(Self {
            config,
            terminal,
            events,
            window,
            palette,
            layout: ShellLayout::default(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("entering event loop");

        while !self.window.should_quit() {
            let window = &mut self.window;
            let palette = &self.palette;
            let sidebar_width = self.config.ui.sidebar_width;
            let mut layout = self.layout;
            self.terminal.draw(|f| {
                layout = render::draw(f, window, palette, sidebar_width);
            })?;
            self.layout = layout;

            let ctx = key_context(&self.window);
            let event = self.events.next_event(ctx).await?;
            apply_event(&mut self.window, event, &self.layout);
        }

        self.window.shutdown();
        info!("event loop finished");
        Ok(())
    }
}

fn key_context(window: &MainWindow) -> KeyContext {
    KeyContext {
        focus: window.focus(),
        capturing: window
            .host()
            .active()
            .map_or(false, |view| view.captures_input()),
    }
}

/// Feeds one input event into the window.
pub fn apply_event(window: &mut MainWindow, event: AppEvent, layout: &ShellLayout) {
    match event {
        AppEvent::Tick | AppEvent::Render => {}
        AppEvent::Quit => window.quit(),
        AppEvent::Up => window.select_prev(),
        AppEvent::Down => window.select_next(),
        AppEvent::Enter => window.activate_selected(),
        AppEvent::Back => match window.focus() {
            Focus::Content => window.focus_sidebar(),
            Focus::Sidebar => window.collapse(),
        },
        AppEvent::ToggleFocus => window.toggle_focus(),
        AppEvent::ToggleSubMenu(menu) => {
            window.focus_sidebar();
            window.toggle_submenu(menu);
        }
        AppEvent::QuickLaunch(kind) => {
            if let Some(entry) = QUICK_LAUNCH
                .iter()
                .find(|entry| entry.action == NavAction::Open(kind))
            {
                window.activate(entry);
            }
        }
        AppEvent::ViewKey(key) => forward_key(window, key),
        AppEvent::Click { column, row } => match layout.hit(column, row) {
            Some(Hit::QuickLaunch(idx)) => {
                if let Some(entry) = QUICK_LAUNCH.get(idx) {
                    window.activate(entry);
                }
            }
            Some(Hit::SidebarRow(idx)) => {
                if window.select_row(idx) {
                    window.activate_selected();
                }
            }
            Some(Hit::Content) => {
                if window.focus() == Focus::Sidebar {
                    window.toggle_focus();
                }
            }
            None => {}
        },
        AppEvent::Scroll { up, column, row } => match layout.hit(column, row) {
            Some(Hit::SidebarRow(_)) => {
                if up {
                    window.select_prev();
                } else {
                    window.select_next();
                }
            }
            Some(Hit::Content) => {
                let code = if up { KeyCode::Up } else { KeyCode::Down };
                forward_key(window, KeyEvent::new(code, KeyModifiers::NONE));
            }
            _ => {}
        },
    }
}

fn forward_key(window: &mut MainWindow, key: KeyEvent) {
    if let Some(view) = window.active_view_mut() {
        if !view.handle_key(key) {
            debug!("view {:?} ignored key {:?}", view.kind(), key.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::SubMenu;
    use crate::views::testing::{ProbeFactory, ProbeLog};
    use ratatui::layout::Rect;

    fn window() -> (MainWindow, ProbeLog) {
        let log = ProbeLog::default();
        let window = MainWindow::new(Box::new(ProbeFactory { log: log.clone() }));
        (window, log)
    }

    fn layout() -> ShellLayout {
        ShellLayout::compute(Rect::new(0, 0, 100, 30), 24)
    }

    #[test]
    fn quick_launch_event_opens_and_folds_menus() {
        let (mut window, _) = window();
        let layout = layout();
        apply_event(&mut window, AppEvent::ToggleSubMenu(SubMenu::Media), &layout);
        apply_event(&mut window, AppEvent::QuickLaunch(ViewKind::Album), &layout);

        assert_eq!(window.host().active_kind(), Some(ViewKind::Album));
        assert!(!window.submenus().any_visible());
    }

    #[test]
    fn clicking_a_sidebar_toggle_expands_it() {
        let (mut window, _) = window();
        let layout = layout();
        // Row 0 is the Media toggle
        apply_event(
            &mut window,
            AppEvent::Click {
                column: layout.sidebar_rows.x,
                row: layout.sidebar_rows.y,
            },
            &layout,
        );
        assert!(window.submenus().is_visible(SubMenu::Media));
    }

    #[test]
    fn clicking_a_quick_launch_button_swaps_views() {
        let (mut window, log) = window();
        let layout = layout();
        let artist = layout.quick_buttons[2];
        apply_event(&mut window, AppEvent::QuickLaunch(ViewKind::PlayMusic), &layout);
        apply_event(
            &mut window,
            AppEvent::Click {
                column: artist.x,
                row: artist.y,
            },
            &layout,
        );

        assert_eq!(window.host().active_kind(), Some(ViewKind::Artist));
        assert_eq!(log.closed(), vec![ViewKind::PlayMusic]);
    }

    #[test]
    fn escape_returns_focus_then_collapses() {
        let (mut window, _) = window();
        let layout = layout();
        apply_event(&mut window, AppEvent::QuickLaunch(ViewKind::Artist), &layout);
        assert_eq!(window.focus(), Focus::Content);

        apply_event(&mut window, AppEvent::Back, &layout);
        assert_eq!(window.focus(), Focus::Sidebar);

        apply_event(&mut window, AppEvent::ToggleSubMenu(SubMenu::Playlist), &layout);
        apply_event(&mut window, AppEvent::Back, &layout);
        assert!(!window.submenus().any_visible());
    }

    #[test]
    fn quit_event_stops_the_loop() {
        let (mut window, _) = window();
        apply_event(&mut window, AppEvent::Quit, &layout());
        assert!(window.should_quit());
    }
}
