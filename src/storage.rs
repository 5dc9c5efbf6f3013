use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::Appointment;

/// 持久化层错误
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed appointment data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// 预约列表的持久化接口
///
/// 一个存储对应键值存储中的一个命名条目，条目内容为 JSON 数组。
pub trait AppointmentStore {
    /// 读取已保存的列表；条目不存在时返回 `Ok(None)`
    fn load(&self) -> StorageResult<Option<Vec<Appointment>>>;

    /// 覆盖写入整个列表
    fn save(&mut self, appointments: &[Appointment]) -> StorageResult<()>;

    /// 删除条目本身（不同于保存一个空列表）
    fn clear(&mut self) -> StorageResult<()>;
}

/// 基于文件的键值存储：`<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: &Path, key: &str) -> Self {
        Self {
            path: data_dir.join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AppointmentStore for JsonFileStore {
    fn load(&self) -> StorageResult<Option<Vec<Appointment>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let appointments: Vec<Appointment> = serde_json::from_str(&content)?;

        debug!(path = %self.path.display(), count = appointments.len(), "loaded appointments");
        Ok(Some(appointments))
    }

    fn save(&mut self, appointments: &[Appointment]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string(appointments)?;
        fs::write(&self.path, content)?;

        debug!(path = %self.path.display(), count = appointments.len(), "saved appointments");
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 内存存储，克隆体共享同一个条目，用于模拟重新加载
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entry: std::rc::Rc<std::cell::RefCell<Option<String>>>,
    fail_writes: std::rc::Rc<std::cell::Cell<bool>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接写入原始条目内容
    pub fn with_raw(raw: &str) -> Self {
        let store = Self::new();
        *store.entry.borrow_mut() = Some(raw.to_string());
        store
    }

    pub fn raw(&self) -> Option<String> {
        self.entry.borrow().clone()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "storage is read-only").into());
        }
        Ok(())
    }
}

#[cfg(test)]
impl AppointmentStore for MemoryStore {
    fn load(&self) -> StorageResult<Option<Vec<Appointment>>> {
        match self.entry.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, appointments: &[Appointment]) -> StorageResult<()> {
        self.check_writable()?;
        *self.entry.borrow_mut() = Some(serde_json::to_string(appointments)?);
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.check_writable()?;
        *self.entry.borrow_mut() = None;
        Ok(())
    }
}
