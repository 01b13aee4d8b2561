use super::folders::{list_folders, FolderList};
use super::{view_block, ChildView, Lifecycle, ViewKind};
use crate::theme::Palette;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use tracing::debug;

/// First-level folders of every music directory, one per artist.
pub struct ArtistView {
    lifecycle: Lifecycle,
    artists: FolderList,
}

impl ArtistView {
    pub fn new(music_directories: &[PathBuf]) -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            artists: FolderList::new(list_folders(music_directories, 1)),
        }
    }

    pub fn artists(&self) -> &FolderList {
        &self.artists
    }
}

impl ChildView for ArtistView {
    fn kind(&self) -> ViewKind {
        ViewKind::Artist
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn title(&self) -> String {
        format!("Artist ({})", self.artists.len())
    }

    fn release(&mut self) {
        debug!("artist view released {} entries", self.artists.len());
        self.artists.clear();
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.artists.handle_key(key)
    }

    fn captures_input(&self) -> bool {
        self.artists.is_filtering()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = view_block(&self.lifecycle, self.title(), palette);
        self.artists.render(
            frame,
            area,
            block,
            "No artist folders found in the configured music directories",
            palette,
        );
    }

    fn hint(&self) -> &'static str {
        "↑/↓ move · / filter · Esc back"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewState;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn close_releases_the_listing() {
        let dir = tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("Burial")).unwrap();

        let mut view = ArtistView::new(&[dir.path().to_path_buf()]);
        assert_eq!(view.artists().len(), 1);
        assert_eq!(view.title(), "Artist (1)");

        view.close();
        assert_eq!(view.state(), ViewState::Closed);
        assert!(view.artists().is_empty());
    }
}
