// Child views - the pages swapped into the content area
// The shell only relies on the lifecycle half of ChildView; rendering and keys are the view's business

pub mod album;
pub mod artist;
pub mod folders;
pub mod play_music;

pub use album::AlbumView;
pub use artist::ArtistView;
pub use play_music::PlayMusicView;

use crate::theme::Palette;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    PlayMusic,
    Album,
    Artist,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::PlayMusic, ViewKind::Album, ViewKind::Artist];

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::PlayMusic => "Play Music",
            ViewKind::Album => "Album",
            ViewKind::Artist => "Artist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Created,
    Shown,
    Closed,
}

/// Placement of a view inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Embedding {
    /// Stretch over the whole host region.
    pub fill: bool,
    /// Draw the view's own border and title.
    pub chrome: bool,
}

impl Embedding {
    /// Fills the host region, no chrome of its own.
    pub fn docked() -> Self {
        Self {
            fill: true,
            chrome: false,
        }
    }

    /// A free-standing view with its own frame.
    #[cfg(test)]
    pub fn floating() -> Self {
        Self {
            fill: false,
            chrome: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    pub state: ViewState,
    pub embedding: Option<Embedding>,
}

pub trait ChildView {
    fn kind(&self) -> ViewKind;

    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    fn title(&self) -> String {
        self.kind().title().to_string()
    }

    fn state(&self) -> ViewState {
        self.lifecycle().state
    }

    fn embed(&mut self, embedding: Embedding) {
        self.lifecycle_mut().embedding = Some(embedding);
    }

    fn show(&mut self) {
        self.lifecycle_mut().state = ViewState::Shown;
    }

    /// Releases whatever the view holds. Closing twice is a no-op.
    fn close(&mut self) {
        if self.state() == ViewState::Closed {
            return;
        }
        self.release();
        self.lifecycle_mut().state = ViewState::Closed;
    }

    fn release(&mut self) {}

    /// Returns true when the key was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    /// While true every key goes to the view, shell shortcuts included.
    fn captures_input(&self) -> bool {
        false
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette);

    /// One-line key help shown in the status bar while the view has focus.
    fn hint(&self) -> &'static str {
        ""
    }
}

/// Outer block for a view: bordered and titled only when it carries its own chrome.
pub fn view_block<'a>(lifecycle: &Lifecycle, title: String, palette: &Palette) -> Block<'a> {
    let chrome = lifecycle
        .embedding
        .map(|embedding| embedding.chrome)
        .unwrap_or(true);

    if chrome {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
    } else {
        Block::default()
    }
}

pub trait ViewFactory {
    fn build(&self, kind: ViewKind) -> Box<dyn ChildView>;
}

/// Builds the stock views over the configured music directories.
#[derive(Debug, Clone)]
pub struct LibraryViews {
    music_directories: Vec<PathBuf>,
}

impl LibraryViews {
    pub fn new(music_directories: Vec<PathBuf>) -> Self {
        Self { music_directories }
    }
}

impl ViewFactory for LibraryViews {
    fn build(&self, kind: ViewKind) -> Box<dyn ChildView> {
        match kind {
            ViewKind::PlayMusic => Box::new(PlayMusicView::new()),
            ViewKind::Album => Box::new(AlbumView::new(&self.music_directories)),
            ViewKind::Artist => Box::new(ArtistView::new(&self.music_directories)),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ProbeEvent {
        Shown(ViewKind),
        Closed(ViewKind),
    }

    #[derive(Debug, Clone, Default)]
    pub struct ProbeLog(Rc<RefCell<Vec<ProbeEvent>>>);

    impl ProbeLog {
        pub fn events(&self) -> Vec<ProbeEvent> {
            self.0.borrow().clone()
        }

        pub fn closed(&self) -> Vec<ViewKind> {
            self.events()
                .into_iter()
                .filter_map(|event| match event {
                    ProbeEvent::Closed(kind) => Some(kind),
                    _ => None,
                })
                .collect()
        }

        pub fn shown(&self) -> Vec<ViewKind> {
            self.events()
                .into_iter()
                .filter_map(|event| match event {
                    ProbeEvent::Shown(kind) => Some(kind),
                    _ => None,
                })
                .collect()
        }

        fn push(&self, event: ProbeEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    /// Records lifecycle calls so tests can see what the host did.
    pub struct ProbeView {
        kind: ViewKind,
        lifecycle: Lifecycle,
        log: ProbeLog,
    }

    impl ProbeView {
        pub fn boxed(kind: ViewKind, log: &ProbeLog) -> Box<dyn ChildView> {
            Box::new(Self {
                kind,
                lifecycle: Lifecycle::default(),
                log: log.clone(),
            })
        }
    }

    impl ChildView for ProbeView {
        fn kind(&self) -> ViewKind {
            self.kind
        }

        fn lifecycle(&self) -> &Lifecycle {
            &self.lifecycle
        }

        fn lifecycle_mut(&mut self) -> &mut Lifecycle {
            &mut self.lifecycle
        }

        fn show(&mut self) {
            self.lifecycle.state = ViewState::Shown;
            self.log.push(ProbeEvent::Shown(self.kind));
        }

        fn release(&mut self) {
            self.log.push(ProbeEvent::Closed(self.kind));
        }

        fn handle_key(&mut self, _key: KeyEvent) -> bool {
            false
        }

        fn render(&mut self, _frame: &mut Frame, _area: Rect, _palette: &Palette) {}
    }

    pub struct ProbeFactory {
        pub log: ProbeLog,
    }

    impl ViewFactory for ProbeFactory {
        fn build(&self, kind: ViewKind) -> Box<dyn ChildView> {
            ProbeView::boxed(kind, &self.log)
        }
    }
}
