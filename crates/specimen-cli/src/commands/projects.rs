use std::io::Write;

use anyhow::{Context, anyhow, bail};
use serde::Serialize;
use specimen_config::SpecimenConfig;
use specimen_core::{ProjectEntry, ProjectPage, ProjectQuery, ProjectRegistry, ProjectStore};

use crate::cli::subcommands::ProjectCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, table};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectView<'a> {
    #[serde(flatten)]
    entry: &'a ProjectEntry,
    display_name: String,
    exists: bool,
}

impl<'a> ProjectView<'a> {
    fn new(entry: &'a ProjectEntry) -> Self {
        Self {
            entry,
            display_name: entry.display_name(),
            exists: entry.exists(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse<'a> {
    page: usize,
    total_pages: usize,
    total: usize,
    items: Vec<ProjectView<'a>>,
}

#[derive(Debug, Serialize)]
struct RemovedResponse<'a> {
    id: &'a str,
    removed: bool,
}

/// Handle `specimen projects`.
pub fn handle(
    action: &ProjectCommands,
    flags: &GlobalFlags,
    config: &SpecimenConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let store = ProjectStore::new(config.projects.store_path()?);
    let mut registry = store
        .load()
        .with_context(|| format!("cannot read project list {}", store.path().display()))?;

    match action {
        ProjectCommands::Add { path, alias } => {
            let path = absolute(path);
            let entry = registry.add(&path, alias)?;
            save(&store, &registry)?;
            emit_entry(&entry, flags, out)
        }
        ProjectCommands::Rm { id } => {
            if !registry.remove(id) {
                bail!("project not found: {id}");
            }
            save(&store, &registry)?;
            let rendered = output::render(&RemovedResponse { id, removed: true }, flags.format)?;
            output::emit(out, &rendered)
        }
        ProjectCommands::Rename { id, alias } => {
            if !registry.rename(id, alias) {
                bail!("project not found: {id}");
            }
            save(&store, &registry)?;
            emit_entry(lookup(&registry, id)?, flags, out)
        }
        ProjectCommands::Touch { id } => {
            if !registry.touch(id) {
                bail!("project not found: {id}");
            }
            save(&store, &registry)?;
            emit_entry(lookup(&registry, id)?, flags, out)
        }
        ProjectCommands::Get { id } => emit_entry(lookup(&registry, id)?, flags, out),
        ProjectCommands::List {
            search,
            sort,
            desc,
            page,
        } => {
            let page = registry.query(&ProjectQuery {
                search: search.clone(),
                sort: (*sort).into(),
                descending: *desc,
                page: *page,
                page_size: config.projects.page_size,
            });
            tracing::debug!(total = page.total, page = page.page, "listed projects");
            let rendered = match flags.format {
                OutputFormat::Table => render_page_table(&page),
                OutputFormat::Json | OutputFormat::Raw => {
                    output::render(&list_response(&page), flags.format)?
                }
            };
            output::emit(out, &rendered)
        }
    }
}

fn lookup<'a>(registry: &'a ProjectRegistry, id: &str) -> anyhow::Result<&'a ProjectEntry> {
    registry
        .get(id)
        .ok_or_else(|| anyhow!("project not found: {id}"))
}

fn save(store: &ProjectStore, registry: &ProjectRegistry) -> anyhow::Result<()> {
    store
        .save(registry)
        .with_context(|| format!("cannot write project list {}", store.path().display()))
}

/// Relative paths are resolved against the working directory so the same
/// directory always dedupes to one entry.
fn absolute(path: &str) -> String {
    std::path::absolute(path).map_or_else(|_| path.to_string(), |p| p.display().to_string())
}

fn emit_entry(entry: &ProjectEntry, flags: &GlobalFlags, out: &mut impl Write) -> anyhow::Result<()> {
    let rendered = output::render(&ProjectView::new(entry), flags.format)?;
    output::emit(out, &rendered)
}

fn list_response(page: &ProjectPage) -> ListResponse<'_> {
    ListResponse {
        page: page.page,
        total_pages: page.total_pages,
        total: page.total,
        items: page.items.iter().map(ProjectView::new).collect(),
    }
}

fn render_page_table(page: &ProjectPage) -> String {
    let footer = format!(
        "page {}/{} ({} projects)",
        page.page, page.total_pages, page.total
    );
    if page.items.is_empty() {
        return format!("(no projects)\n{footer}");
    }

    let rows = page
        .items
        .iter()
        .map(|entry| {
            vec![
                entry.id.clone(),
                entry.display_name(),
                entry.path.clone(),
                entry.last_access_time.format(TIME_FORMAT).to_string(),
                if entry.exists() { "yes" } else { "missing" }.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let table = table::render_table(
        &["id", "name", "path", "last access", "exists"],
        &rows,
        output::term_width(),
    );
    format!("{table}\n{footer}")
}
