use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Number of pane columns the navigator shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub columns: usize,
}

impl PaneLayout {
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }
}

/// Calculated screen areas
#[derive(Debug, Clone)]
pub struct NavigatorLayout {
    /// One area per visible pane, left to right
    pub panes: Vec<Rect>,
    /// Status and key hints (1 line)
    pub footer: Rect,
}

impl NavigatorLayout {
    /// Split `area` into equal pane columns above a one-line footer
    pub fn calculate(area: Rect, layout: PaneLayout) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let columns = layout.columns.max(1) as u32;
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns)))
            .split(chunks[0])
            .to_vec();

        Self { panes, footer: chunks[1] }
    }
}
