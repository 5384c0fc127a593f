use crate::navigator::Navigator;
use crate::state::StatusMessage;
use crate::theme::Theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Footer with the last outcome on the left and key hints on the right
pub struct Footer<'a> {
    navigator: &'a Navigator,
    status: Option<&'a StatusMessage>,
}

impl<'a> Footer<'a> {
    pub fn new(navigator: &'a Navigator, status: Option<&'a StatusMessage>) -> Self {
        Self { navigator, status }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(Self::hints_width())])
            .split(area);

        if let Some(status) = self.status {
            let style = if status.is_error() { Theme::error() } else { Theme::success() };
            frame.render_widget(Paragraph::new(Line::from(Span::styled(status.text(), style))), columns[0]);
        }

        let mut hints = Vec::new();
        for (key, label) in Self::hints(self.navigator.execute_request().is_some()) {
            hints.push(Span::styled(format!("[{}]", key), Style::default().fg(Theme::BLUE)));
            hints.push(Span::styled(format!(" {} ", label), Theme::muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(hints)).alignment(Alignment::Right), columns[1]);
    }

    fn hints(can_execute: bool) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("Tab", "pane"), ("←/→", "scope")];
        if can_execute {
            hints.push(("Enter", "run"));
        }
        hints.push(("Esc", "close"));
        hints
    }

    fn hints_width() -> u16 {
        Self::hints(true).iter().map(|(key, label)| (key.chars().count() + label.chars().count() + 4) as u16).sum()
    }
}
