use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub finished: bool,
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
    pub due_date: Option<NaiveDate>,
    pub finished_date: Option<NaiveDate>,
    pub created_date: Option<NaiveDate>,
    #[serde(default)]
    pub assignee_list: Vec<Assignee>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: i64,
    pub prename: String,
    pub name: String,
    pub email: String,
}

impl Assignee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prename, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_decodes_backend_json() {
        let json = r#"{
            "id": 7,
            "title": "Hand in exercise sheet",
            "description": "Upload before the deadline",
            "finished": false,
            "priority": "HIGH",
            "category": "university",
            "dueDate": "2024-11-20",
            "finishedDate": null,
            "createdDate": "2024-11-01",
            "assigneeList": [
                { "id": 3, "prename": "Ada", "name": "Lovelace", "email": "ada@example.org" }
            ]
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.due_date, NaiveDate::from_ymd_opt(2024, 11, 20));
        assert_eq!(todo.finished_date, None);
        assert_eq!(todo.assignee_list.len(), 1);
        assert_eq!(todo.assignee_list[0].full_name(), "Ada Lovelace");
    }

    #[test]
    fn todo_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "title": "Water the plants",
            "finished": true,
            "priority": "LOW",
            "dueDate": null,
            "finishedDate": "2024-10-30",
            "createdDate": "2024-10-29"
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert!(todo.finished);
        assert!(todo.description.is_empty());
        assert!(todo.assignee_list.is_empty());
    }
}
