use crate::{OutputMode, emit_success};
use refcat::reference::{CreateReference, ReferenceFilter, UpdateReference};
use refcat::storage::SqliteStore;
use refcat::ui::{self, Icons, banner, section, success};
use owo_colors::OwoColorize;
use std::path::Path;

fn open_store(database: &Path) -> anyhow::Result<SqliteStore> {
    tracing::debug!("Opening {:?}", database);
    Ok(SqliteStore::bootstrap(database)?)
}

pub fn run_version(output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        banner(
            &format!("{}", "Refcat".bold().style(ui::theme().info.clone())),
            &format!("Version {}", env!("CARGO_PKG_VERSION").bold())
        );
    } else {
        let data = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
        });
        emit_success(output_mode, "version", data)?;
    }
    Ok(())
}

pub fn run_list(
    output_mode: OutputMode,
    database: &Path,
    search: Option<String>,
    category: Option<String>,
) -> anyhow::Result<()> {
    let store = open_store(database)?;
    let filter = ReferenceFilter::new(search, category);
    let references = store.list(&filter)?;

    if !output_mode.is_human() {
        return emit_success(output_mode, "list", serde_json::to_value(&references)?);
    }

    if !filter.is_empty() {
        ui::header(&format!(
            "{} Searching (search: {:?}, category: {:?})",
            Icons::SEARCH,
            filter.search().unwrap_or(""),
            filter.category().unwrap_or("")
        ));
    }

    if references.is_empty() {
        println!("{} No references found.", Icons::EMPTY);
    } else {
        println!("{}", ui::references_table(&references));
        ui::summary_row("Total:", &references.len().to_string());
    }
    Ok(())
}

pub fn run_show(output_mode: OutputMode, database: &Path, id: i64) -> anyhow::Result<()> {
    let store = open_store(database)?;
    let reference = store.get(id)?;

    if !output_mode.is_human() {
        return emit_success(output_mode, "show", serde_json::to_value(&reference)?);
    }

    println!(
        "{} #{} {} {}",
        Icons::FILE,
        reference.id,
        reference.title.bold(),
        format!("[{}]", reference.category).style(ui::theme().category.clone())
    );
    if !reference.language.is_empty() {
        ui::info("Language", &reference.language);
    }
    ui::info("Created", &reference.created_at.to_rfc3339());
    ui::info("Updated", &reference.updated_at.to_rfc3339());
    section("Content");
    println!("{}", reference.content.style(ui::theme().content.clone()));
    Ok(())
}

pub fn run_add(
    output_mode: OutputMode,
    database: &Path,
    title: String,
    category: String,
    content: String,
    language: Option<String>,
) -> anyhow::Result<()> {
    // Validate before touching the database so a bad add never creates the file
    let request = CreateReference::new(title, category, content, language)?;
    let store = open_store(database)?;
    let id = store.create(&request)?;

    if output_mode.is_human() {
        success(&format!("{} Created reference #{}", Icons::NEW, id));
    } else {
        emit_success(output_mode, "add", serde_json::json!({ "id": id }))?;
    }
    Ok(())
}

pub fn run_edit(
    output_mode: OutputMode,
    database: &Path,
    id: i64,
    title: Option<String>,
    category: Option<String>,
    content: Option<String>,
    language: Option<String>,
) -> anyhow::Result<()> {
    let store = open_store(database)?;
    let update = UpdateReference::new(title, category, content, language);

    if output_mode.is_human() {
        let blanked: Vec<&str> = [
            ("title", &update.title),
            ("category", &update.category),
            ("content", &update.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
        if !blanked.is_empty() {
            ui::warn(&format!("Not given, will be cleared: {}", blanked.join(", ")));
        }
    }

    store.update(id, &update)?;

    if output_mode.is_human() {
        success(&format!("{} Updated reference #{}", Icons::MOD, id));
    } else {
        emit_success(output_mode, "edit", serde_json::json!({ "id": id }))?;
    }
    Ok(())
}

pub fn run_remove(output_mode: OutputMode, database: &Path, id: i64) -> anyhow::Result<()> {
    let store = open_store(database)?;
    let removed = store.delete(id)?;

    if output_mode.is_human() {
        if removed {
            success(&format!("{} Deleted reference #{}", Icons::DEL, id));
        } else {
            println!("{} Reference #{} was already gone", Icons::EMPTY, id);
        }
    } else {
        emit_success(output_mode, "rm", serde_json::json!({ "id": id, "removed": removed }))?;
    }
    Ok(())
}

pub fn run_categories(output_mode: OutputMode, database: &Path) -> anyhow::Result<()> {
    let store = open_store(database)?;
    let categories = store.list_categories()?;

    if !output_mode.is_human() {
        return emit_success(output_mode, "categories", serde_json::to_value(&categories)?);
    }

    if categories.is_empty() {
        println!("{} No categories yet.", Icons::EMPTY);
    } else {
        section(&format!("{} Categories", Icons::TAG));
        println!("{}", ui::categories_table(&categories));
        let stats = store.stats()?;
        ui::summary_row(&format!("{} References:", Icons::STATS), &stats.references.to_string());
    }
    Ok(())
}
