// Window drawing - quick-launch bar, sidebar, hosted view and status line
// Also remembers where everything landed so mouse clicks can be mapped back

use crate::shell::{Focus, MainWindow, NavAction, QUICK_LAUNCH};
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Where each part of the window landed on the last draw; used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellLayout {
    pub quick_bar: Rect,
    pub quick_buttons: [Rect; 3],
    pub sidebar: Rect,
    pub sidebar_rows: Rect,
    /// First navigation row drawn at the top of `sidebar_rows`.
    pub sidebar_offset: usize,
    pub content: Rect,
    pub status: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    QuickLaunch(usize),
    SidebarRow(usize),
    Content,
}

impl ShellLayout {
    pub fn compute(area: Rect, sidebar_width: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Quick-launch bar
                Constraint::Min(0),    // Sidebar + content
                Constraint::Length(1), // Status line
            ])
            .split(area);

        let quick_inner = Block::default().borders(Borders::ALL).inner(rows[0]);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16),
                Constraint::Length(16),
                Constraint::Length(16),
                Constraint::Min(0),
            ])
            .split(quick_inner);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(rows[1]);

        Self {
            quick_bar: rows[0],
            quick_buttons: [buttons[0], buttons[1], buttons[2]],
            sidebar: body[0],
            sidebar_rows: Block::default().borders(Borders::ALL).inner(body[0]),
            sidebar_offset: 0,
            content: body[1],
            status: rows[2],
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if let Some(idx) = self
            .quick_buttons
            .iter()
            .position(|rect| contains(*rect, column, row))
        {
            return Some(Hit::QuickLaunch(idx));
        }
        if contains(self.sidebar_rows, column, row) {
            let visible_row = (row - self.sidebar_rows.y) as usize;
            return Some(Hit::SidebarRow(self.sidebar_offset + visible_row));
        }
        if contains(self.content, column, row) {
            return Some(Hit::Content);
        }
        None
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

pub fn draw(
    f: &mut Frame,
    window: &mut MainWindow,
    palette: &Palette,
    sidebar_width: u16,
) -> ShellLayout {
    let mut layout = ShellLayout::compute(f.area(), sidebar_width);
    layout.sidebar_offset = scroll_offset(window.cursor(), layout.sidebar_rows.height as usize);

    render_quick_launch(f, &layout, window, palette);
    render_sidebar(f, &layout, window, palette);
    render_content(f, &layout, window, palette);
    render_status(f, &layout, window, palette);

    layout
}

/// Smallest offset that keeps the cursor row inside a viewport of `height` rows.
fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    (cursor + 1).saturating_sub(height)
}

fn render_quick_launch(f: &mut Frame, layout: &ShellLayout, window: &MainWindow, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" tuneshell ")
        .title_alignment(Alignment::Right)
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
    f.render_widget(block, layout.quick_bar);

    let active = window.host().active_kind();
    for (idx, (entry, rect)) in QUICK_LAUNCH.iter().zip(layout.quick_buttons).enumerate() {
        let is_active = matches!(entry.action, NavAction::Open(kind) if Some(kind) == active);
        let style = if is_active {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let button = Paragraph::new(format!("[{}] {}", idx + 1, entry.label)).style(style);
        f.render_widget(button, rect);
    }
}

fn render_sidebar(f: &mut Frame, layout: &ShellLayout, window: &MainWindow, palette: &Palette) {
    let focused = window.focus() == Focus::Sidebar;
    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default()
    };

    let lines: Vec<Line> = window
        .visible_entries()
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let text = match (entry.parent, entry.action) {
                (Some(_), _) => format!("   {}", entry.label),
                (None, NavAction::ToggleSubMenu(menu)) => {
                    let marker = if window.submenus().is_visible(menu) { "▾" } else { "▸" };
                    format!("{} {}", marker, entry.label)
                }
                (None, _) => format!("  {}", entry.label),
            };

            let mut style = if entry.parent.is_some() {
                Style::default().fg(palette.submenu)
            } else {
                Style::default()
            };
            if idx == window.cursor() {
                style = style.add_modifier(Modifier::BOLD);
                if focused {
                    style = style.bg(palette.highlight_bg).add_modifier(Modifier::REVERSED);
                }
            }
            Line::from(Span::styled(text, style))
        })
        .collect();

    let offset = u16::try_from(layout.sidebar_offset).unwrap_or(u16::MAX);
    let sidebar = Paragraph::new(lines)
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Menu")
                .border_style(border_style),
        );
    f.render_widget(sidebar, layout.sidebar);
}

fn render_content(f: &mut Frame, layout: &ShellLayout, window: &mut MainWindow, palette: &Palette) {
    let focused = window.focus() == Focus::Content;
    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default()
    };

    match window.active_view_mut() {
        Some(view) => {
            // The host frame carries the title; the docked view draws inside it
            let block = Block::default()
                .borders(Borders::ALL)
                .title(view.title())
                .border_style(border_style);
            let inner = block.inner(layout.content);
            f.render_widget(block, layout.content);
            view.render(f, inner, palette);
        }
        None => {
            let splash = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Pick something from the menu",
                    Style::default().fg(palette.muted),
                )),
                Line::from(Span::styled(
                    "1 Play Music · 2 Album · 3 Artist",
                    Style::default().fg(palette.muted),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
            f.render_widget(splash, layout.content);
        }
    }
}

fn render_status(f: &mut Frame, layout: &ShellLayout, window: &MainWindow, palette: &Palette) {
    let hint = match window.focus() {
        Focus::Content => window.host().active().map(|view| view.hint()).unwrap_or(""),
        Focus::Sidebar => "↑/↓ move · Enter select · m/p menus · Tab content · q quit",
    };

    let line = Line::from(vec![
        Span::styled(
            window.status().to_string(),
            Style::default().fg(palette.ok).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(hint, Style::default().fg(palette.muted)),
    ]);
    f.render_widget(Paragraph::new(line), layout.status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::SubMenu;
    use crate::theme::Theme;
    use crate::views::testing::{ProbeFactory, ProbeLog};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn hit_testing_finds_rows_and_buttons() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 100, 30), 24);

        // Sidebar border is on row 3, first entry right below it
        assert_eq!(layout.hit(2, 4), Some(Hit::SidebarRow(0)));
        assert_eq!(layout.hit(2, 6), Some(Hit::SidebarRow(2)));
        assert_eq!(layout.hit(1, 1), Some(Hit::QuickLaunch(0)));
        assert_eq!(layout.hit(20, 1), Some(Hit::QuickLaunch(1)));
        assert_eq!(layout.hit(60, 10), Some(Hit::Content));
        assert_eq!(layout.hit(0, 0), None);
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn short_sidebar_scrolls_to_keep_the_cursor_visible() {
        let log = ProbeLog::default();
        let mut window = MainWindow::new(Box::new(ProbeFactory { log }));
        window.toggle_submenu(SubMenu::Playlist);
        for _ in 0..20 {
            window.select_next();
        }
        assert_eq!(window.selected_entry().map(|e| e.label), Some("Exit"));

        let palette = Theme::Default.palette();
        let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
        let mut layout = ShellLayout::default();
        terminal
            .draw(|f| layout = draw(f, &mut window, &palette, 24))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Exit"));
        assert!(!text.contains("▸ Media"));

        // Clicking the bottom row lands on the row drawn there
        let bottom = layout.sidebar_rows.y + layout.sidebar_rows.height - 1;
        assert_eq!(
            layout.hit(layout.sidebar_rows.x, bottom),
            Some(Hit::SidebarRow(window.cursor()))
        );
    }

    #[test]
    fn offset_is_zero_while_the_cursor_fits() {
        assert_eq!(scroll_offset(0, 8), 0);
        assert_eq!(scroll_offset(7, 8), 0);
        assert_eq!(scroll_offset(8, 8), 1);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}
