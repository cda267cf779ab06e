use crate::config::Config;
use crate::tmdb::MovieSource;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    centered_rect_by_size, grid_cells, layout_regions, scroll_offset, visible_rows,
};
use crate::ui::menu::{MenuEntry, MenuState};
use crate::ui::nav::Route;
use crate::ui::presenter::{DetailView, ListView, MovieCard, MovieDetail};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, RATING,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const CARD_HEIGHT: u16 = 5;
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn draw<S: MovieSource>(frame: &mut Frame<'_>, app: &App<S>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route()).widget(), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::Menu => draw_menu(frame, body, app.menu()),
        Route::Movies => draw_movies(frame, body, app),
        Route::Details(_) => draw_details(frame, body, app),
        Route::About => draw_about(frame, body, app.api_key_env()),
    }
    frame.render_widget(Footer::new(app.route()).widget(footer), footer);
}

fn draw_menu(frame: &mut Frame<'_>, area: Rect, menu: &MenuState) {
    let mut lines = vec![
        Line::from(Span::styled("WELCOME TO", Style::default().fg(MUTED_TEXT))),
        Line::from(Span::styled(
            "M A R Q U E E",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Popular movies, right in your terminal",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
    ];

    let focused = menu.focused_entry();
    for (idx, entry) in MenuEntry::ALL.iter().enumerate() {
        let label = format!("  {}. {:<8}  ", idx + 1, entry.label());
        let style = if *entry == focused {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let marker = if *entry == focused { "▶" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(label, style),
        ]));
    }

    let height = lines.len() as u16 + 2;
    let rect = centered_rect_by_size(area, 44, height);
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, rect);
}

fn draw_movies<S: MovieSource>(frame: &mut Frame<'_>, area: Rect, app: &App<S>) {
    match app.list_view() {
        ListView::Busy => draw_busy(frame, area, "Loading movies", app.ticks()),
        ListView::Failed(message) => draw_failure(frame, area, &message),
        ListView::Cards { cards, notice } => {
            let mut grid_area = area;
            if let Some(notice) = notice {
                let notice_area = Rect {
                    y: area.bottom().saturating_sub(1),
                    height: area.height.min(1),
                    ..area
                };
                grid_area.height = area.height.saturating_sub(1);
                frame.render_widget(
                    Paragraph::new(Span::styled(notice, Style::default().fg(RATING)))
                        .alignment(Alignment::Center),
                    notice_area,
                );
            }
            draw_cards(frame, grid_area, &cards, app);
        }
    }
}

fn draw_cards<S: MovieSource>(frame: &mut Frame<'_>, area: Rect, cards: &[MovieCard], app: &App<S>) {
    if cards.is_empty() || area.height == 0 {
        return;
    }

    let columns = app.profile().columns.max(1);
    let total_rows = cards.len().div_ceil(columns);
    let visible = visible_rows(area, CARD_HEIGHT).max(1);
    let focused = app.grid().focused.min(cards.len() - 1);
    let first_row = scroll_offset(app.grid().row(columns).min(total_rows - 1), visible);
    let rows = visible.min(total_rows - first_row);

    for (row_idx, row) in grid_cells(area, columns, CARD_HEIGHT, rows).iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let idx = (first_row + row_idx) * columns + col_idx;
            if let Some(card) = cards.get(idx) {
                draw_card(frame, *cell, idx, card, idx == focused);
            }
        }
    }
}

fn draw_card(frame: &mut Frame<'_>, area: Rect, idx: usize, card: &MovieCard, focused: bool) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let title_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(card.title.clone(), title_style)),
        Line::from(vec![
            Span::styled(format!("★ {:.1}", card.vote_average), Style::default().fg(RATING)),
            Span::raw("  "),
            Span::styled(card.release_date.clone(), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(Span::styled(
            card.poster_url.clone(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} ", idx + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_details<S: MovieSource>(frame: &mut Frame<'_>, area: Rect, app: &App<S>) {
    match app.detail_view() {
        DetailView::Busy => draw_busy(frame, area, "Loading movie", app.ticks()),
        DetailView::Failed(message) => draw_failure(frame, area, &message),
        DetailView::Movie(detail) => draw_detail(frame, area, &detail),
    }
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, detail: &MovieDetail) {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let field = |name: &'static str, text: String| {
        Line::from(vec![Span::styled(name, label), Span::styled(text, value)])
    };

    let lines = vec![
        Line::from(Span::styled(
            detail.title.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail.overview.clone(), value)),
        Line::from(""),
        field("Rating:        ", format!("{:.1}/10", detail.vote_average)),
        field("Popularity:    ", format!("{}", detail.popularity)),
        field("Release date:  ", detail.release_date.clone()),
        field("Poster:        ", detail.poster_url.clone()),
        field("Backdrop:      ", detail.backdrop_url.clone()),
    ];

    let block = Block::default()
        .title(format!(" details/{} ", detail.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn draw_about(frame: &mut Frame<'_>, area: Rect, api_key_env: &str) {
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let lines = vec![
        Line::from(Span::styled(format!("Marquee v{VERSION}"), heading)),
        Line::from(Span::styled(
            "Browse the movies everyone is watching right now.",
            text,
        )),
        Line::from(""),
        Line::from(Span::styled("Data", heading)),
        Line::from(Span::styled(
            "This product uses the TMDB API but is not endorsed or certified by TMDB.",
            muted,
        )),
        Line::from(""),
        Line::from(Span::styled("Configuration", heading)),
        Line::from(Span::styled(
            format!("Config file: {}", Config::config_path().display()),
            text,
        )),
        Line::from(Span::styled(
            format!("API key: --api-key, ${api_key_env}, or api.api_key"),
            text,
        )),
        Line::from(Span::styled(
            "Logs: set MARQUEE_LOG to a file path",
            text,
        )),
    ];

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_busy(frame: &mut Frame<'_>, area: Rect, label: &str, ticks: u64) {
    let spinner = SPINNER[(ticks % SPINNER.len() as u64) as usize];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(STATUS_OK)),
        Span::raw(" "),
        Span::styled(format!("{label}…"), Style::default().fg(HEADER_TEXT)),
    ]);
    let rect = centered_rect_by_size(area, line.width() as u16 + 4, 3);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        rect,
    );
}

fn draw_failure(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 4).clamp(20, area.width.max(20));
    let rect = centered_rect_by_size(area, width, 5);
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Error ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            ),
        rect,
    );
}
