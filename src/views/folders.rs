// Folder browsing shared by the Album and Artist views
// Reads directory names straight off disk each time a view is built; nothing is cached

use crate::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use fuzzy_matcher::{clangd::ClangdMatcher, FuzzyMatcher};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub label: String,
    pub path: PathBuf,
}

/// Lists directories exactly `depth` levels below each root.
///
/// Depth 1 yields `Artist` folders, depth 2 yields `Artist / Album` labels.
/// Hidden folders are skipped and missing roots only produce a warning.
pub fn list_folders(roots: &[PathBuf], depth: usize) -> Vec<FolderEntry> {
    let mut entries = Vec::new();

    for root in roots {
        if !root.is_dir() {
            warn!("music directory {} is not readable", root.display());
            continue;
        }

        // No min_depth: hidden parents have to pass through filter_entry to get pruned
        let walker = WalkDir::new(root)
            .max_depth(depth)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if entry.depth() != depth || !entry.file_type().is_dir() {
                continue;
            }

            let label = entry
                .path()
                .strip_prefix(root)
                .map(folder_label)
                .unwrap_or_else(|_| folder_label(entry.path()));
            entries.push(FolderEntry {
                label,
                path: entry.into_path(),
            });
        }
    }

    entries.sort_by_cached_key(|entry| entry.label.to_lowercase());
    debug!("listed {} folders at depth {}", entries.len(), depth);
    entries
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.starts_with('.'))
}

fn folder_label(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Selectable, filterable list of folders.
pub struct FolderList {
    entries: Vec<FolderEntry>,
    visible: Vec<usize>,
    state: ListState,
    query: String,
    filtering: bool,
    matcher: ClangdMatcher,
}

impl FolderList {
    pub fn new(entries: Vec<FolderEntry>) -> Self {
        let mut list = Self {
            entries,
            visible: Vec::new(),
            state: ListState::default(),
            query: String::new(),
            filtering: false,
            matcher: ClangdMatcher::default(),
        };
        list.apply_filter();
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible_labels(&self) -> Vec<&str> {
        self.visible
            .iter()
            .map(|&idx| self.entries[idx].label.as_str())
            .collect()
    }

    pub fn selected(&self) -> Option<&FolderEntry> {
        self.state
            .selected()
            .and_then(|pos| self.visible.get(pos))
            .map(|&idx| &self.entries[idx])
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.visible.clear();
        self.query.clear();
        self.filtering = false;
        self.state.select(None);
    }

    pub fn move_selection(&mut self, delta: i32) {
        if self.visible.is_empty() {
            return;
        }

        let current = self.state.selected().unwrap_or(0);
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(self.visible.len() - 1)
        };
        self.state.select(Some(next));
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        if self.query.is_empty() {
            self.visible = (0..self.entries.len()).collect();
        } else {
            let mut scored: Vec<(i64, usize)> = self
                .entries
                .iter()
                .enumerate()
                .filter_map(|(idx, entry)| {
                    self.matcher
                        .fuzzy_match(&entry.label, &self.query)
                        .map(|score| (score, idx))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
            self.visible = scored.into_iter().map(|(_, idx)| idx).collect();
        }

        self.state
            .select(if self.visible.is_empty() { None } else { Some(0) });
    }

    /// Handles cursor keys and the `/` filter prompt. Returns true when consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.filtering {
            match key.code {
                KeyCode::Esc => {
                    self.filtering = false;
                    self.set_query("");
                }
                KeyCode::Enter => self.filtering = false,
                KeyCode::Backspace => {
                    let mut query = self.query.clone();
                    query.pop();
                    self.set_query(&query);
                }
                KeyCode::Char(ch) => {
                    let mut query = self.query.clone();
                    query.push(ch);
                    self.set_query(&query);
                }
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                _ => return false,
            }
            return true;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-10),
            KeyCode::PageDown => self.move_selection(10),
            KeyCode::Char('/') => self.filtering = true,
            _ => return false,
        }
        true
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        block: Block<'_>,
        empty_hint: &str,
        palette: &Palette,
    ) {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        if self.visible.is_empty() {
            let message = if self.entries.is_empty() {
                empty_hint.to_string()
            } else {
                format!("Nothing matches \"{}\"", self.query)
            };
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(palette.muted)),
                chunks[0],
            );
        } else {
            let items: Vec<ListItem> = self
                .visible
                .iter()
                .map(|&idx| ListItem::new(self.entries[idx].label.clone()))
                .collect();
            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(palette.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("► ");
            frame.render_stateful_widget(list, chunks[0], &mut self.state);
        }

        let footer = if self.filtering {
            Line::from(vec![
                Span::styled("/", Style::default().fg(palette.accent)),
                Span::raw(self.query.clone()),
            ])
        } else {
            Line::from(Span::styled(
                format!("{} of {}", self.visible.len(), self.entries.len()),
                Style::default().fg(palette.muted),
            ))
        };
        frame.render_widget(Paragraph::new(footer), chunks[1]);
    }
}
