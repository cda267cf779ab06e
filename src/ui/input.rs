use crate::tmdb::MovieSource;
use crate::ui::app::App;
use crate::ui::grid::Direction;
use crate::ui::nav::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key press to an app action. Keys mirror a TV remote: arrows,
/// OK (Enter), Back (Esc / Backspace).
pub fn handle_key<S: MovieSource>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Up => app.move_focus(Direction::Up),
        KeyCode::Down => app.move_focus(Direction::Down),
        KeyCode::Left => app.move_focus(Direction::Left),
        KeyCode::Right => app.move_focus(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Esc | KeyCode::Backspace => {
            app.navigate_up();
        }
        KeyCode::Char('q') if app.route() == &Route::Menu => app.request_quit(),
        KeyCode::Char(ch) if app.route() == &Route::Menu => {
            if let Some(digit) = ch.to_digit(10).filter(|d| *d > 0) {
                app.focus_menu_entry(digit as usize - 1);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
