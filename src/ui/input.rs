//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode, Focus};

/// 根据当前模式、焦点和按键获取对应的 Action
pub fn get_action(app: &App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if let AppMode::Confirm(_) = app.mode {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Confirm),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        };
    }

    match app.focus {
        Focus::Title | Focus::Date => match key.code {
            KeyCode::Esc => Some(Action::FocusList),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::AddAppointment),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::FocusForm),
            KeyCode::Char('s') | KeyCode::Char(' ') => {
                app.selected_appointment_id().map(Action::ToggleStar)
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                app.selected_appointment_id().map(Action::DeleteOne)
            }
            KeyCode::Char('D') => Some(Action::StartDeleteAll),
            KeyCode::Char('f') => Some(Action::ToggleFilter),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
