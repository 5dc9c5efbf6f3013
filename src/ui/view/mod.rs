//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, ConfirmAction, Focus};
use components::{
    appointment_item, error_line, filter_badge, render_dialog_framework, render_input_widget,
};
use layouts::centered_rect;

pub const TITLE_ERROR_MESSAGE: &str = "Please fill the title field";
pub const DATE_ERROR_MESSAGE: &str = "**Please select a date**";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // 标题
            Constraint::Length(10), // 表单
            Constraint::Min(6),     // 列表
            Constraint::Length(3),  // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    if let AppMode::Confirm(action) = &app.mode {
        render_confirm_dialog(frame, action);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Appointments")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Add Appointment")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题输入
            Constraint::Length(1), // 标题错误
            Constraint::Length(3), // 日期输入
            Constraint::Length(1), // 日期错误
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "TITLE",
        &app.draft.title,
        "Title",
        app.focus == Focus::Title,
    );
    if app.draft.show_title_error {
        frame.render_widget(error_line(TITLE_ERROR_MESSAGE), chunks[1]);
    }

    render_input_widget(
        frame,
        chunks[2],
        "DATE",
        &app.draft.date,
        "yyyy-mm-dd",
        app.focus == Focus::Date,
    );
    if app.draft.show_date_error {
        frame.render_widget(error_line(DATE_ERROR_MESSAGE), chunks[3]);
    }

    // 光标放在当前输入框的文本末尾
    let cursor = match app.focus {
        Focus::Title => Some((chunks[0], app.draft.title.chars().count())),
        Focus::Date => Some((chunks[2], app.draft.date.chars().count())),
        Focus::List => None,
    };
    if let (Some((field, len)), AppMode::Normal) = (cursor, &app.mode) {
        let max_x = field.right().saturating_sub(2);
        let x = (field.x + 1).saturating_add(len as u16).min(max_x);
        frame.set_cursor_position(Position::new(x, field.y + 1));
    }
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_appointments();
    let list_focused = app.focus == Focus::List;

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, appointment)| {
            appointment_item(appointment, list_focused && i == app.selected_index)
        })
        .collect();

    let border_style = if list_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let header = Line::from(vec![
        Span::raw("Appointments "),
        filter_badge(app.is_filter_active),
    ]);

    let block = Block::default()
        .title(header)
        .borders(Borders::ALL)
        .border_style(border_style);

    if items.is_empty() {
        let hint = if app.appointments.is_empty() {
            "No appointments yet, fill in the form above to add one"
        } else {
            "No starred appointments"
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    if list_focused {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (&app.mode, app.focus) {
        (AppMode::Confirm(_), _) => "[y] Confirm  [n] Cancel",
        (AppMode::Normal, Focus::Title | Focus::Date) => {
            "[Enter] Add  [Tab] Next field  [Esc] List"
        }
        (AppMode::Normal, Focus::List) => {
            "[s] Star  [d] Delete  [D] Delete All Appointments  [f] Starred filter  [a] Add  [j/k] Move  [q] Quit"
        }
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_confirm_dialog(frame: &mut Frame, action: &ConfirmAction) {
    let area = centered_rect(50, 20, frame.area());
    let inner = render_dialog_framework(frame, area, "Confirm");

    let message = match action {
        ConfirmAction::DeleteAll => "Delete all appointments?",
    };

    let dialog = Paragraph::new(format!("{}\n\n[y] Confirm  [n] Cancel", message))
        .style(Style::default().fg(Color::Red));

    frame.render_widget(dialog, inner);
}
