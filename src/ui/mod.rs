//! 预约管理界面
//!
//! MVI 结构：
//! - Model (state.rs): App、表单草稿、焦点与模式
//! - Intent (actions.rs / input.rs): 按键 -> Action
//! - Update (logic.rs): App::dispatch，列表变更后写入存储
//! - View (view/): 纯函数渲染，列表条目由 components::appointment_item 负责

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;
