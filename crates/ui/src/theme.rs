use ratatui::style::{Color, Modifier, Style};

/// Iceberg color theme for the navigator
///
/// Based on iceberg.vim color scheme (https://github.com/cocopon/iceberg.vim)
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Primary background: deep blue-black
    pub const BG: Color = Color::Rgb(22, 24, 33);

    /// Foreground: light blue-gray
    pub const FG: Color = Color::Rgb(198, 200, 209);

    /// Secondary background for panes
    pub const PANEL_BG: Color = Color::Rgb(30, 33, 50);

    /// Selected row
    pub const ACTIVE: Color = Color::Rgb(39, 44, 66);

    /// Focused pane accent
    pub const BLUE: Color = Color::Rgb(132, 160, 198);

    pub const CYAN: Color = Color::Rgb(137, 184, 194);

    pub const GREEN: Color = Color::Rgb(180, 190, 130);

    pub const YELLOW: Color = Color::Rgb(226, 164, 120);

    pub const RED: Color = Color::Rgb(226, 120, 120);

    /// Details, hints and unfocused titles
    pub const MUTED: Color = Color::Rgb(107, 112, 137);

    pub const BORDER: Color = Color::Rgb(60, 65, 90);

    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn panel() -> Style {
        Style::default().fg(Self::FG).bg(Self::PANEL_BG)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::GREEN)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::YELLOW)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::RED)
    }

    /// Border of a pane, highlighted when it has focus
    pub fn border(focused: bool) -> Style {
        if focused { Style::default().fg(Self::BLUE) } else { Style::default().fg(Self::BORDER) }
    }

    /// Selected row of a pane; dimmer when the pane is unfocused
    pub fn selected(focused: bool) -> Style {
        let style = Style::default().fg(Self::FG).bg(Self::ACTIVE);
        if focused { style.add_modifier(Modifier::BOLD) } else { style }
    }
}
