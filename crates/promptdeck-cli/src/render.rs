//! Terminal rendering of store snapshots

use colored::Colorize;
use promptdeck::domain::format_millis;
use promptdeck::{ApiError, OperationKind, Prompt, PromptInState};

/// Heading for a failed operation, shown above its message
pub fn failure_title(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::FetchAll => "Error Fetching Prompts",
        OperationKind::Create => "Error Adding Prompt",
        OperationKind::Update => "Error Updating Prompt",
        OperationKind::Delete => "Error Removing Prompt",
    }
}

/// Failure title above the error message
pub fn render_failure(kind: OperationKind, error: &ApiError) -> String {
    format!(
        "{}\n  {}",
        failure_title(kind).red().bold(),
        error.message()
    )
}

/// "Updated on ..." once updated, otherwise "Created on ..."
pub fn timestamp_badge(prompt: &Prompt) -> Option<String> {
    if let Some(updated) = prompt.updated_at {
        return format_millis(updated).map(|d| format!("Updated on {d}"));
    }
    prompt
        .created_at
        .and_then(format_millis)
        .map(|d| format!("Created on {d}"))
}

/// One line for a collapsed item, plus body and badge when expanded
pub fn render_item(item: &PromptInState) -> String {
    let marker = if item.expanded { "▾" } else { "▸" };
    let mut out = format!(
        "{} {} {}",
        marker,
        item.prompt.title.cyan().bold(),
        format!("[{}]", item.prompt.id).dimmed()
    );

    if item.expanded {
        for line in item.prompt.body.lines() {
            out.push_str(&format!("\n    {line}"));
        }
        if let Some(badge) = timestamp_badge(&item.prompt) {
            out.push_str(&format!("\n    {}", badge.dimmed()));
        }
    }

    out
}

pub fn render_list(items: &[PromptInState]) -> String {
    if items.is_empty() {
        return "No prompts yet.".to_string();
    }

    let mut out = format!("{}", "Prompts list".bold());
    for item in items {
        out.push('\n');
        out.push_str("  ");
        out.push_str(&render_item(item).replace('\n', "\n  "));
    }
    out
}

/// Select label for an item
pub fn item_label(item: &PromptInState) -> String {
    let marker = if item.expanded { "▾" } else { "▸" };
    format!("{} {}", marker, truncate_string(&item.prompt.title, 60))
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(expanded: bool, updated_at: Option<i64>) -> PromptInState {
        PromptInState {
            prompt: Prompt {
                id: "abc".to_string(),
                title: "Greeting".to_string(),
                body: "Say hello\nThen wave".to_string(),
                created_at: Some(1_700_000_000_000),
                updated_at,
            },
            expanded,
        }
    }

    #[test]
    fn test_collapsed_hides_body() {
        let out = render_item(&item(false, None));
        assert!(out.contains("Greeting"));
        assert!(out.contains("abc"));
        assert!(!out.contains("Say hello"));
    }

    #[test]
    fn test_expanded_shows_body_and_badge() {
        let out = render_item(&item(true, None));
        assert!(out.contains("Say hello"));
        assert!(out.contains("Then wave"));
        assert!(out.contains("Created on"));
    }

    #[test]
    fn test_badge_prefers_updated() {
        let badge = timestamp_badge(&item(true, Some(1_700_000_100_000)).prompt).unwrap();
        assert!(badge.starts_with("Updated on"));
    }

    #[test]
    fn test_badge_absent_without_timestamps() {
        let mut prompt = item(true, None).prompt;
        prompt.created_at = None;
        assert_eq!(timestamp_badge(&prompt), None);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_list(&[]), "No prompts yet.");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_failure_titles() {
        assert_eq!(failure_title(OperationKind::Delete), "Error Removing Prompt");
        assert_eq!(failure_title(OperationKind::Create), "Error Adding Prompt");
    }

    #[test]
    fn test_render_failure_uses_error_message() {
        let error = ApiError::Status {
            status: 404,
            body: "{}".to_string(),
        };
        let out = render_failure(OperationKind::Delete, &error);
        assert!(out.contains("Error Removing Prompt"));
        assert!(out.ends_with("Request failed with status code 404"));
    }
}
