use crate::ui::nav::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: &'a Route,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    pub fn title(&self) -> &'static str {
        match self.route {
            Route::Menu => "Home",
            Route::Movies => "Popular Movies",
            Route::Details(_) => "Movie Details",
            Route::About => "About",
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "MARQUEE",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.title(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.path(), separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
