use crate::deck::Decision;
use crate::ui::app::App;
use crate::ui::session::FetchTicket;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// Action to take after processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Run the fetch for this ticket.
    Fetch(FetchTicket),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Right | KeyCode::Char('l') => app.swipe(Decision::Like),
        KeyCode::Left | KeyCode::Char('h') => app.swipe(Decision::Dislike),
        KeyCode::Char('u') | KeyCode::Backspace => app.undo(),
        KeyCode::Tab | KeyCode::Char('v') => app.toggle_view(),
        KeyCode::Char('r') => {
            if let Some(ticket) = app.request_reset() {
                return InputAction::Fetch(ticket);
            }
        }
        _ => {}
    }
    InputAction::None
}

/// Drags start only inside `body`; moves and releases are tracked anywhere.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, body: Rect) -> InputAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if body.contains(Position::new(mouse.column, mouse.row)) {
                app.on_drag_start(mouse.column);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.on_drag_move(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.on_drag_end(mouse.column),
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
