// Play Music page - transport controls without an audio engine behind them

use super::{view_block, ChildView, Lifecycle, ViewKind};
use crate::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    Stopped,
    Playing,
    Paused,
}

impl TransportState {
    fn label(&self) -> &'static str {
        match self {
            TransportState::Playing => "▶ Playing",
            TransportState::Paused => "⏸ Paused",
            TransportState::Stopped => "⏹ Stopped",
        }
    }
}

pub struct PlayMusicView {
    lifecycle: Lifecycle,
    transport: TransportState,
    volume: f32,
}

impl PlayMusicView {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            transport: TransportState::Stopped,
            volume: 0.7,
        }
    }

    pub fn transport(&self) -> TransportState {
        self.transport
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn toggle_play_pause(&mut self) {
        self.transport = match self.transport {
            TransportState::Playing => TransportState::Paused,
            TransportState::Paused | TransportState::Stopped => TransportState::Playing,
        };
    }

    pub fn stop(&mut self) {
        self.transport = TransportState::Stopped;
    }

    pub fn adjust_volume(&mut self, delta: f32) {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
    }
}

impl Default for PlayMusicView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChildView for PlayMusicView {
    fn kind(&self) -> ViewKind {
        ViewKind::PlayMusic
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn release(&mut self) {
        self.stop();
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(' ') => self.toggle_play_pause(),
            KeyCode::Char('s') => self.stop(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_volume(0.1),
            KeyCode::Char('-') => self.adjust_volume(-0.1),
            _ => return false,
        }
        true
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = view_block(&self.lifecycle, self.title(), palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Transport state
                Constraint::Length(3), // Volume
            ])
            .split(inner);

        let state = Paragraph::new(self.transport.label())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(state, chunks[0]);

        let volume = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Volume"))
            .gauge_style(Style::default().fg(palette.ok))
            .ratio(self.volume as f64);
        frame.render_widget(volume, chunks[1]);
    }

    fn hint(&self) -> &'static str {
        "Space play/pause · s stop · +/- volume · Esc back"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{Embedding, ViewState};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn top_row(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer.content()[..width]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(view: &mut PlayMusicView, code: KeyCode) -> bool {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn space_cycles_between_playing_and_paused() {
        let mut view = PlayMusicView::new();
        assert!(press(&mut view, KeyCode::Char(' ')));
        assert_eq!(view.transport(), TransportState::Playing);
        press(&mut view, KeyCode::Char(' '));
        assert_eq!(view.transport(), TransportState::Paused);
        press(&mut view, KeyCode::Char('s'));
        assert_eq!(view.transport(), TransportState::Stopped);
    }

    #[test]
    fn volume_stays_in_range() {
        let mut view = PlayMusicView::new();
        for _ in 0..20 {
            press(&mut view, KeyCode::Char('+'));
        }
        assert_eq!(view.volume(), 1.0);
        for _ in 0..20 {
            press(&mut view, KeyCode::Char('-'));
        }
        assert_eq!(view.volume(), 0.0);
    }

    #[test]
    fn closing_stops_playback() {
        let mut view = PlayMusicView::new();
        view.toggle_play_pause();
        view.close();
        assert_eq!(view.transport(), TransportState::Stopped);
        assert_eq!(view.state(), ViewState::Closed);
    }

    #[test]
    fn floating_view_draws_its_own_title() {
        let mut view = PlayMusicView::new();
        view.embed(Embedding::floating());

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, &crate::theme::Theme::Default.palette());
            })
            .unwrap();

        let top = top_row(&terminal);
        assert!(top.contains("Play Music"));
    }

    #[test]
    fn docked_view_has_no_title_row() {
        let mut view = PlayMusicView::new();
        view.embed(Embedding::docked());

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, &crate::theme::Theme::Default.palette());
            })
            .unwrap();

        let top = top_row(&terminal);
        assert!(!top.contains("Play Music"));
    }
}
