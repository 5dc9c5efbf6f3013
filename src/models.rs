use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// 表单日期输入格式（与 HTML date 输入框的值一致）
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// 列表中展示的日期格式，例如 "05 March 2024, Tuesday"
pub const DISPLAY_DATE_FORMAT: &str = "%d %B %Y, %A";

/// 预约
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub date: String, // 创建时格式化一次，之后不再重算
    #[serde(default)]
    pub is_starred: bool,
}

impl Appointment {
    pub fn new(title: String, date: NaiveDate) -> Self {
        Self {
            id: new_appointment_id(),
            title,
            date: format_display_date(date),
            is_starred: false,
        }
    }
}

/// 生成新的预约 ID
pub fn new_appointment_id() -> String {
    Uuid::new_v4().to_string()
}

/// 将日历日期格式化为展示字符串
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// 解析表单中的日期文本，空白或无法解析时返回 None
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT).ok()
}

/// 运行时预约列表（保持插入顺序，ID 唯一）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentList {
    items: Vec<Appointment>,
}

impl AppointmentList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 从持久化数据恢复，重复 ID 只保留第一次出现的条目
    pub fn from_data(data: Vec<Appointment>) -> Self {
        let mut seen = HashSet::new();
        let items = data
            .into_iter()
            .filter(|appointment| seen.insert(appointment.id.clone()))
            .collect();
        Self { items }
    }

    pub fn to_data(&self) -> &[Appointment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.items.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// 追加到末尾；ID 已存在时拒绝并返回 false
    pub fn push(&mut self, appointment: Appointment) -> bool {
        if self.contains(&appointment.id) {
            return false;
        }
        self.items.push(appointment);
        true
    }

    /// 切换星标，返回新的星标状态；ID 不存在时返回 None
    pub fn toggle_star(&mut self, id: &str) -> Option<bool> {
        let appointment = self.items.iter_mut().find(|a| a.id == id)?;
        appointment.is_starred = !appointment.is_starred;
        Some(appointment.is_starred)
    }

    /// 删除单个预约
    pub fn remove(&mut self, id: &str) -> Option<Appointment> {
        let index = self.items.iter().position(|a| a.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.items.iter()
    }

    /// 生成显示列表：全部，或仅星标条目（顺序不变）
    pub fn filtered(&self, starred_only: bool) -> Vec<&Appointment> {
        self.iter()
            .filter(|a| !starred_only || a.is_starred)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: &str, title: &str, starred: bool) -> Appointment {
        Appointment {
            id: id.to_string(),
            title: title.to_string(),
            date: "01 January 2024, Monday".to_string(),
            is_starred: starred,
        }
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_display_date(date), "05 March 2024, Tuesday");
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-03-05"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("   "), None);
        assert_eq!(parse_date_input("2024-02-30"), None);
        assert_eq!(parse_date_input("tomorrow"), None);
    }

    #[test]
    fn test_new_appointment() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let a = Appointment::new("Dentist".to_string(), date);
        let b = Appointment::new("Dentist".to_string(), date);

        assert_eq!(a.date, "05 March 2024, Tuesday");
        assert!(!a.is_starred);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_layout() {
        let a = appointment("1", "Dentist", true);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "title": "Dentist",
                "date": "01 January 2024, Monday",
                "isStarred": true
            })
        );
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let mut list = AppointmentList::new();
        assert!(list.push(appointment("1", "A", false)));
        assert!(!list.push(appointment("1", "B", false)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("1").unwrap().title, "A");
    }

    #[test]
    fn test_from_data_drops_duplicates() {
        let list = AppointmentList::from_data(vec![
            appointment("1", "A", false),
            appointment("2", "B", false),
            appointment("1", "C", true),
        ]);
        let titles: Vec<_> = list.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_toggle_star() {
        let mut list = AppointmentList::from_data(vec![appointment("1", "A", false)]);
        assert_eq!(list.toggle_star("1"), Some(true));
        assert_eq!(list.toggle_star("1"), Some(false));
        assert_eq!(list.toggle_star("missing"), None);
        assert!(!list.get("1").unwrap().is_starred);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = AppointmentList::from_data(vec![
            appointment("1", "A", false),
            appointment("2", "B", false),
            appointment("3", "C", false),
        ]);
        assert!(list.remove("2").is_some());
        assert!(list.remove("2").is_none());

        let ids: Vec<_> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_filtered() {
        let list = AppointmentList::from_data(vec![
            appointment("1", "A", true),
            appointment("2", "B", false),
            appointment("3", "C", true),
        ]);

        let starred: Vec<_> = list.filtered(true).into_iter().map(|a| a.id.as_str()).collect();
        assert_eq!(starred, ["1", "3"]);
        assert_eq!(list.filtered(false).len(), 3);
    }
}
