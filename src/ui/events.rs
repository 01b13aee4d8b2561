// Input mapping - crossterm key and mouse events turned into shell actions
// Keyboard meaning depends on which side has focus and whether the view is typing

use crate::error::Result;
use crate::shell::{Focus, SubMenu};
use crate::views::ViewKind;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // UI Events
    Quit,
    Tick,
    Render,

    // Sidebar navigation
    Up,
    Down,
    Enter,
    Back,
    ToggleFocus,
    ToggleSubMenu(SubMenu),
    QuickLaunch(ViewKind),

    // Forwarded to the hosted view
    ViewKey(KeyEvent),

    // Mouse
    Click { column: u16, row: u16 },
    Scroll { up: bool, column: u16, row: u16 },
}

/// What the key mapping needs to know about the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub focus: Focus,
    /// The hosted view is taking text input (e.g. a filter prompt).
    pub capturing: bool,
}

pub fn key_to_app_event(key: KeyEvent, ctx: KeyContext) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppEvent::Quit);
    }

    if ctx.focus == Focus::Content && ctx.capturing {
        return Some(AppEvent::ViewKey(key));
    }

    // Shortcuts that work from either side
    match key.code {
        KeyCode::Char('q') => return Some(AppEvent::Quit),
        KeyCode::Tab | KeyCode::BackTab => return Some(AppEvent::ToggleFocus),
        KeyCode::Esc => return Some(AppEvent::Back),
        KeyCode::Char('1') => return Some(AppEvent::QuickLaunch(ViewKind::PlayMusic)),
        KeyCode::Char('2') => return Some(AppEvent::QuickLaunch(ViewKind::Album)),
        KeyCode::Char('3') => return Some(AppEvent::QuickLaunch(ViewKind::Artist)),
        KeyCode::Char('m') => return Some(AppEvent::ToggleSubMenu(SubMenu::Media)),
        KeyCode::Char('p') => return Some(AppEvent::ToggleSubMenu(SubMenu::Playlist)),
        _ => {}
    }

    match ctx.focus {
        Focus::Content => Some(AppEvent::ViewKey(key)),
        Focus::Sidebar => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::Down),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => Some(AppEvent::Enter),
            _ => None,
        },
    }
}

pub fn mouse_to_app_event(mouse: MouseEvent) -> Option<AppEvent> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click { column, row }),
        MouseEventKind::ScrollUp => Some(AppEvent::Scroll {
            up: true,
            column,
            row,
        }),
        MouseEventKind::ScrollDown => Some(AppEvent::Scroll {
            up: false,
            column,
            row,
        }),
        _ => None,
    }
}

pub fn translate(event: Event, ctx: KeyContext) -> Option<AppEvent> {
    match event {
        Event::Key(key) => key_to_app_event(key, ctx),
        Event::Mouse(mouse) => mouse_to_app_event(mouse),
        Event::Resize(_, _) => Some(AppEvent::Render),
        _ => None,
    }
}

/// Merges the terminal event stream with a redraw tick on the current task.
pub struct EventHandler {
    stream: EventStream,
    tick: Interval,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let mut tick = interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            stream: EventStream::new(),
            tick,
        }
    }

    pub async fn next_event(&mut self, ctx: KeyContext) -> Result<AppEvent> {
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Ok(AppEvent::Tick),
                maybe_event = self.stream.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(app_event) = translate(event, ctx) {
                            return Ok(app_event);
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed, nothing left to react to
                    None => return Ok(AppEvent::Quit),
                },
            }
        }
    }
}
