use super::folders::{list_folders, FolderList};
use super::{view_block, ChildView, Lifecycle, ViewKind};
use crate::theme::Palette;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

/// Second-level folders (`Artist / Album`) of every music directory.
pub struct AlbumView {
    lifecycle: Lifecycle,
    albums: FolderList,
}

impl AlbumView {
    pub fn new(music_directories: &[PathBuf]) -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            albums: FolderList::new(list_folders(music_directories, 2)),
        }
    }

    pub fn albums(&self) -> &FolderList {
        &self.albums
    }
}

impl ChildView for AlbumView {
    fn kind(&self) -> ViewKind {
        ViewKind::Album
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn title(&self) -> String {
        format!("Album ({})", self.albums.len())
    }

    fn release(&mut self) {
        self.albums.clear();
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.albums.handle_key(key)
    }

    fn captures_input(&self) -> bool {
        self.albums.is_filtering()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = view_block(&self.lifecycle, self.title(), palette);
        self.albums.render(
            frame,
            area,
            block,
            "No album folders found (expected <music dir>/<artist>/<album>)",
            palette,
        );
    }

    fn hint(&self) -> &'static str {
        "↑/↓ move · / filter · Esc back"
    }
}
