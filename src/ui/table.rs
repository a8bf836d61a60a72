use crate::reference::Reference;
use tabled::{settings::Style, Table, Tabled};

/// Longest title shown in a listing before it is cut with an ellipsis
const MAX_TITLE_WIDTH: usize = 48;

#[derive(Tabled)]
struct ReferenceRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Reference> for ReferenceRow {
    fn from(reference: &Reference) -> Self {
        Self {
            id: reference.id,
            title: truncate(&reference.title, MAX_TITLE_WIDTH),
            category: reference.category.clone(),
            language: reference.language.clone(),
            updated: reference.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub fn references_table(references: &[Reference]) -> String {
    if references.is_empty() {
        return String::new();
    }

    let rows: Vec<ReferenceRow> = references.iter().map(ReferenceRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn categories_table(categories: &[String]) -> String {
    #[derive(Tabled)]
    struct CategoryRow<'a> {
        #[tabled(rename = "Category")]
        name: &'a str,
    }

    if categories.is_empty() {
        return String::new();
    }

    let rows: Vec<CategoryRow> = categories.iter().map(|name| CategoryRow { name }).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reference(id: i64, title: &str) -> Reference {
        let now = Utc::now();
        Reference {
            id,
            title: title.to_string(),
            category: "Git".to_string(),
            content: "git status".to_string(),
            language: "bash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_references_table() {
        let table = references_table(&[reference(1, "Git Status"), reference(2, "Git Log")]);
        assert!(table.contains("Git Status"));
        assert!(table.contains("Category"));
        assert!(references_table(&[]).is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
