mod config;
mod logging;
mod models;
mod storage;
mod ui;

use std::fs;
use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::storage::JsonFileStore;
use crate::ui::{App, render};

fn main() -> Result<()> {
    let cfg = config::load_config()?;

    // 数据目录 (~/.local/share/appointments/)
    let data_dir = cfg.data_dir();
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    logging::init(&cfg.logging, &cfg.log_file())?;

    let store = JsonFileStore::new(&data_dir, &cfg.storage.key);
    info!(path = %store.path().display(), "starting");

    let mut app = App::new(Box::new(store), &cfg.ui);

    // 终端异常退出时先恢复终端
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // 设置终端
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    restore_terminal()?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// 单线程事件循环：每个按键处理完毕后再读取下一个
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}
