//! 通用 UI 组件
//!
//! 对话框、输入框、预约条目等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Paragraph},
};

use crate::models::Appointment;

pub const STAR_FILLED: &str = "★";
pub const STAR_EMPTY: &str = "☆";

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和样式的单行输入框，值为空时显示占位文本
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let text = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

/// [组件] 行内错误提示
pub fn error_line(message: &str) -> Paragraph<'_> {
    Paragraph::new(message).style(Style::default().fg(Color::Red))
}

/// [组件] 单个预约条目：星标、标题、日期
pub fn appointment_item(appointment: &Appointment, is_selected: bool) -> ListItem<'_> {
    let (star, star_color) = if appointment.is_starred {
        (STAR_FILLED, Color::Yellow)
    } else {
        (STAR_EMPTY, Color::Gray)
    };

    let title_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("{star} "), Style::default().fg(star_color)),
            Span::styled(appointment.title.as_str(), title_style),
        ]),
        Line::from(Span::styled(
            format!("  Date: {}", appointment.date),
            Style::default().fg(Color::Gray),
        )),
    ])
}

/// [组件] 星标过滤按钮，激活时为实心样式
pub fn filter_badge(is_active: bool) -> Span<'static> {
    if is_active {
        Span::styled(
            " Starred ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" Starred ", Style::default().fg(Color::Yellow))
    }
}
