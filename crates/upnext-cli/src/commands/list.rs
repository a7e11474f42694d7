//! Static (non-interactive) list output

use chrono::SecondsFormat;
use serde::Serialize;
use upnext_core::{Stats, Todo, UpnextResult};

const RULE_WIDTH: usize = 50;

pub const EMPTY_MESSAGE: &str = "No tasks. Add one with: upnext add \"your task\"";

/// Plain text listing
pub fn render_plain(items: &[&Todo], stats: &Stats) -> String {
    if items.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec!["Tasks:".to_string(), rule.clone()];

    for (i, item) in items.iter().enumerate() {
        lines.push(format!(
            "{}. [{}] {}",
            i + 1,
            item.priority.symbol(),
            item.text
        ));
        if !item.description.is_empty() {
            lines.push(format!("      {}", item.description));
        }
    }

    lines.push(rule);
    lines.push(format!(
        "{} items | {} completed total",
        items.len(),
        stats.total_completed
    ));
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonList<'a> {
    items: Vec<JsonItem<'a>>,
    stats: &'a Stats,
}

#[derive(Serialize)]
struct JsonItem<'a> {
    id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    priority: &'static str,
    created: String,
    position: usize,
    #[serde(skip_serializing_if = "str::is_empty")]
    context: &'a str,
}

/// Pretty JSON listing with priorities as labels
pub fn render_json(items: &[&Todo], stats: &Stats) -> UpnextResult<String> {
    let output = JsonList {
        items: items
            .iter()
            .map(|item| JsonItem {
                id: &item.id,
                text: &item.text,
                description: &item.description,
                priority: item.priority.label(),
                created: item.created.to_rfc3339_opts(SecondsFormat::Secs, true),
                position: item.position,
                context: &item.context,
            })
            .collect(),
        stats,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use upnext_core::Priority;

    fn todo(text: &str, description: &str, priority: Priority, position: usize) -> Todo {
        Todo {
            id: format!("id-{}", position),
            text: text.to_string(),
            description: description.to_string(),
            priority,
            created: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            position,
            context: String::new(),
        }
    }

    #[test]
    fn test_plain_empty() {
        assert_eq!(
            render_plain(&[], &Stats::default()),
            "No tasks. Add one with: upnext add \"your task\""
        );
    }

    #[test]
    fn test_plain_listing() {
        let a = todo("Write report", "", Priority::High, 0);
        let b = todo("Call mom", "Sunday evening", Priority::Low, 1);
        let stats = Stats {
            total_completed: 12,
            streak_days: 0,
        };

        let out = render_plain(&[&a, &b], &stats);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Tasks:");
        assert_eq!(lines[1], "-".repeat(50));
        assert_eq!(lines[2], "1. [!!!] Write report");
        assert_eq!(lines[3], "2. [!] Call mom");
        assert_eq!(lines[4], "      Sunday evening");
        assert_eq!(lines[5], "-".repeat(50));
        assert_eq!(lines[6], "2 items | 12 completed total");
    }

    #[test]
    fn test_json_listing() {
        let mut a = todo("Write report", "", Priority::High, 0);
        a.context = "/home/me/work".to_string();
        let b = todo("Call mom", "Sunday evening", Priority::Medium, 1);

        let out = render_json(&[&a, &b], &Stats::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["items"][0]["priority"], "High");
        assert_eq!(value["items"][0]["created"], "2024-03-01T09:30:00Z");
        assert_eq!(value["items"][0]["context"], "/home/me/work");
        assert!(value["items"][0].get("description").is_none());
        assert_eq!(value["items"][1]["description"], "Sunday evening");
        assert_eq!(value["items"][1]["position"], 1);
        assert!(value["items"][1].get("context").is_none());
        assert_eq!(value["stats"]["total_completed"], 0);
        assert_eq!(value["stats"]["streak_days"], 0);
    }

    #[test]
    fn test_json_empty_list_is_array() {
        let out = render_json(&[], &Stats::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["items"].as_array().unwrap().is_empty());
    }
}
