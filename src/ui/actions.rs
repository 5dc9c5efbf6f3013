//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 焦点
    FocusNext,
    FocusPrev,
    FocusForm,
    FocusList,

    // 表单
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    AddAppointment,

    // 列表操作
    ToggleStar(String),
    DeleteOne(String),
    StartDeleteAll,
    ToggleFilter,

    // 确认框
    Confirm, // y
    Cancel,  // n / Esc
}
