//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use tracing::{info, warn};

use crate::config::model::UiConfig;
use crate::models::{Appointment, AppointmentList};
use crate::storage::AppointmentStore;

/// 应用状态
pub struct App {
    pub appointments: AppointmentList,
    pub store: Box<dyn AppointmentStore>,
    pub draft: FormDraft,
    pub is_filter_active: bool,
    pub focus: Focus,
    pub mode: AppMode,
    pub selected_index: usize, // 在可见列表中的位置
    pub message: Option<String>,
    pub confirm_delete_all: bool,
}

/// 表单草稿，提交成功后清空输入
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub title: String,
    pub date: String, // YYYY-MM-DD
    pub show_title_error: bool,
    pub show_date_error: bool,
}

/// 当前焦点所在区域
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Title,
    Date,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Date,
            Focus::Date => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Date => Focus::Title,
            Focus::List => Focus::Date,
        }
    }
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Confirm(ConfirmAction),
}

/// 确认操作类型
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteAll,
}

impl App {
    /// 创建应用实例，并从存储中恢复之前的列表
    pub fn new(store: Box<dyn AppointmentStore>, ui: &UiConfig) -> Self {
        let appointments = match store.load() {
            Ok(Some(data)) => AppointmentList::from_data(data),
            Ok(None) => AppointmentList::new(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable appointment data");
                AppointmentList::new()
            }
        };
        info!(count = appointments.len(), "appointments loaded");

        Self {
            appointments,
            store,
            draft: FormDraft::default(),
            is_filter_active: false,
            focus: Focus::Title,
            mode: AppMode::Normal,
            selected_index: 0,
            message: None,
            confirm_delete_all: ui.confirm_delete_all,
        }
    }

    /// 当前显示的列表（受星标过滤影响）
    pub fn visible_appointments(&self) -> Vec<&Appointment> {
        self.appointments.filtered(self.is_filter_active)
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.visible_appointments().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的预约
    pub fn selected_appointment(&self) -> Option<&Appointment> {
        self.visible_appointments()
            .get(self.selected_index)
            .copied()
    }

    /// 获取当前选中的预约 ID
    pub fn selected_appointment_id(&self) -> Option<String> {
        self.selected_appointment().map(|a| a.id.clone())
    }
}
