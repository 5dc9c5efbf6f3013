//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use tracing::{debug, info, warn};

use super::actions::Action;
use super::state::{App, AppMode, ConfirmAction, Focus};
use crate::models::{Appointment, parse_date_input};

/// 日期输入 YYYY-MM-DD 的最大长度
const DATE_INPUT_MAX_LEN: usize = 10;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::FocusForm => self.focus = Focus::Title,
            Action::FocusList => self.focus = Focus::List,

            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::AddAppointment => self.add_appointment(),

            Action::ToggleStar(id) => self.toggle_star(&id),
            Action::DeleteOne(id) => self.delete_one(&id),
            Action::StartDeleteAll => self.start_delete_all(),
            Action::ToggleFilter => self.toggle_filter(),

            Action::Confirm => self.execute_confirm(),
            Action::Cancel => self.cancel(),
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.visible_appointments().len() {
            self.selected_index += 1;
        }
    }

    // ============ 表单相关 ============

    /// 向当前焦点输入框追加字符，同时隐藏该输入框的错误提示
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Focus::Title => {
                self.draft.title.push(c);
                self.draft.show_title_error = false;
            }
            Focus::Date => {
                if (c.is_ascii_digit() || c == '-') && self.draft.date.len() < DATE_INPUT_MAX_LEN {
                    self.draft.date.push(c);
                }
                self.draft.show_date_error = false;
            }
            Focus::List => {}
        }
    }

    pub fn delete_char(&mut self) {
        match self.focus {
            Focus::Title => {
                self.draft.title.pop();
                self.draft.show_title_error = false;
            }
            Focus::Date => {
                self.draft.date.pop();
                self.draft.show_date_error = false;
            }
            Focus::List => {}
        }
    }

    /// 提交表单
    ///
    /// 先检查标题，标题为空时直接返回，不再检查日期。
    pub fn add_appointment(&mut self) {
        if self.draft.title.trim().is_empty() {
            self.draft.show_title_error = true;
            self.focus = Focus::Title;
            return;
        }

        let Some(date) = parse_date_input(&self.draft.date) else {
            self.draft.show_date_error = true;
            self.focus = Focus::Date;
            return;
        };

        let appointment = Appointment::new(self.draft.title.clone(), date);
        info!(id = %appointment.id, date = %appointment.date, "appointment added");
        self.appointments.push(appointment);

        self.draft.title.clear();
        self.draft.date.clear();
        self.focus = Focus::Title;
        self.message = Some("Appointment added".to_string());
        self.persist();
    }

    // ============ 列表操作 ============

    /// 切换星标，ID 不存在时不做任何事
    pub fn toggle_star(&mut self, id: &str) {
        let Some(starred) = self.appointments.toggle_star(id) else {
            debug!(id, "toggle star on unknown appointment");
            return;
        };
        debug!(id, starred, "appointment star toggled");
        self.clamp_selection();
        self.persist();
    }

    /// 删除单个预约，ID 不存在时不做任何事
    pub fn delete_one(&mut self, id: &str) {
        if self.appointments.remove(id).is_none() {
            debug!(id, "delete on unknown appointment");
            return;
        }
        info!(id, "appointment deleted");
        self.clamp_selection();
        self.message = Some("Appointment deleted".to_string());
        self.persist();
    }

    /// 开始删除全部
    pub fn start_delete_all(&mut self) {
        if self.confirm_delete_all {
            self.mode = AppMode::Confirm(ConfirmAction::DeleteAll);
        } else {
            self.delete_all();
        }
    }

    /// 清空列表并删除持久化条目（而不是保存空列表）
    pub fn delete_all(&mut self) {
        self.appointments.clear();
        self.selected_index = 0;
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear stored appointments");
        }
        info!("all appointments deleted");
        self.message = Some("All appointments deleted".to_string());
    }

    /// 切换星标过滤，不修改列表本身
    pub fn toggle_filter(&mut self) {
        self.is_filter_active = !self.is_filter_active;
        self.clamp_selection();
        self.message = Some(if self.is_filter_active {
            "Showing starred appointments".to_string()
        } else {
            "Showing all appointments".to_string()
        });
    }

    /// 把当前列表写入存储，失败只记录日志
    pub fn persist(&mut self) {
        if let Err(e) = self.store.save(self.appointments.to_data()) {
            warn!(error = %e, "failed to persist appointments");
        }
    }

    // ============ 通用操作 ============

    /// 执行确认操作
    pub fn execute_confirm(&mut self) {
        if let AppMode::Confirm(ConfirmAction::DeleteAll) = self.mode {
            self.delete_all();
        }
        self.mode = AppMode::Normal;
    }

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.message = None;
    }
}
