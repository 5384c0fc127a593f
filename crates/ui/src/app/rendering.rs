use super::App;
use crate::components::{Footer, PaneList};
use crate::layout::{NavigatorLayout, PaneLayout};
use crate::theme::Theme;

use ratatui::{Frame, Terminal, backend::CrosstermBackend, widgets::Block};
use std::io::{Result, Stdout};
use tripane_core::PaneIndex;

impl App {
    /// Draw the navigator
    pub fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        Ok(())
    }

    /// Render into any frame; panes beyond the visible count are skipped
    pub fn render(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Theme::base()), area);

        let columns = self.navigator.visible_pane_count();
        let layout = NavigatorLayout::calculate(area, PaneLayout::new(columns));
        for (pane, pane_area) in PaneIndex::VALUES.into_iter().zip(layout.panes.iter()) {
            PaneList::new(&self.navigator, pane).render(frame, *pane_area);
        }

        Footer::new(&self.navigator, self.status.as_ref()).render(frame, layout.footer);
    }
}
