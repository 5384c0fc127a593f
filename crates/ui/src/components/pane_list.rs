use crate::navigator::Navigator;
use crate::theme::Theme;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tripane_core::PaneIndex;

/// One pane column: title, filter and the filtered candidate list
pub struct PaneList<'a> {
    navigator: &'a Navigator,
    pane: PaneIndex,
}

impl<'a> PaneList<'a> {
    pub fn new(navigator: &'a Navigator, pane: PaneIndex) -> Self {
        Self { navigator, pane }
    }

    fn title(&self, focused: bool) -> Line<'a> {
        let pane = self.navigator.state().pane(self.pane);
        let title_style = if focused {
            Style::default().fg(Theme::BLUE).add_modifier(Modifier::BOLD)
        } else {
            Theme::muted()
        };

        let mut spans = vec![Span::styled(format!(" {}", self.pane.title()), title_style)];
        if let Some(parent) = pane.parent.id() {
            spans.push(Span::styled(format!(" › {}", parent), Theme::muted()));
        }
        if !pane.filter_text.is_empty() {
            spans.push(Span::styled(format!(" /{}", pane.filter_text), Style::default().fg(Theme::CYAN)));
        }
        if self.navigator.pane_status(self.pane).loading {
            spans.push(Span::styled(" …", Theme::warning()));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let focused = self.navigator.active() == self.pane;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border(focused))
            .title(self.title(focused))
            .style(Theme::panel());

        let status = self.navigator.pane_status(self.pane);
        if let Some(error) = status.error {
            let message = Paragraph::new(Line::from(Span::styled(format!("! {}", error), Theme::error())))
                .wrap(Wrap { trim: true });
            frame.render_widget(message.block(block), area);
            return;
        }

        let filtered = self.navigator.filtered(self.pane);
        if filtered.is_empty() {
            let placeholder = match self.navigator.list(self.pane) {
                None if status.loading => "loading…",
                None => "",
                Some(_) => "no matches",
            };
            let message = Paragraph::new(Line::from(Span::styled(placeholder, Theme::muted())));
            frame.render_widget(message.block(block), area);
            return;
        }

        let selected = self.navigator.state().pane(self.pane).selected.as_ref();
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|candidate| {
                let mut spans = vec![Span::raw(candidate.name.clone())];
                if candidate.has_children {
                    spans.push(Span::styled(" ›", Theme::muted()));
                }
                if !candidate.detail.is_empty() {
                    spans.push(Span::styled(format!("  {}", candidate.detail), Theme::muted()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(filtered.iter().position(|c| Some(&c.id) == selected));

        let list = List::new(items).block(block).highlight_style(Theme::selected(focused)).highlight_symbol("▸ ");
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
