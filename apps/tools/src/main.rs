use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::domain::CategoryId;
use table_core::{SortColumn, TableView, ViewEvent, ViewState};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "catalog-tools", about = "Query the product catalog from the terminal")]
struct Cli {
    /// Directory holding users.json, categories.json and products.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[arg(long, global = true, default_value = "warn")]
    log_filter: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the visible product table.
    List {
        /// Exact, case-sensitive user name.
        #[arg(long)]
        user: Option<String>,
        /// Category id to toggle on; repeatable.
        #[arg(long = "category")]
        categories: Vec<i64>,
        #[arg(long)]
        search: Option<String>,
        /// Header click on id, product, category or user; repeatable.
        #[arg(long = "sort")]
        sorts: Vec<SortColumn>,
        /// JSON array of view events applied after the flags above.
        #[arg(long)]
        events: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// List users available to the user filter.
    Users,
    /// List categories available to the category filter.
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = catalog::load(cli.data_dir.as_deref()).map_err(|err| {
        let hint = err.startup_hint();
        anyhow::Error::new(err).context(format!("failed to load catalog: {hint}"))
    })?;

    match cli.command {
        Command::List {
            user,
            categories,
            search,
            sorts,
            events,
            json,
        } => {
            let mut replay = flag_events(user, &categories, &sorts, search);
            if let Some(path) = events {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read events file '{}'", path.display()))?;
                let extra: Vec<ViewEvent> = serde_json::from_str(&raw)
                    .with_context(|| format!("malformed events file '{}'", path.display()))?;
                replay.extend(extra);
            }

            let state = replay
                .into_iter()
                .fold(ViewState::default(), |state, event| state.apply(event));
            tracing::debug!(?state, "replayed view events");

            let table = TableView::build(&catalog, &state);
            if json {
                println!("{}", render::table_json(&state, &table)?);
            } else {
                print!("{}", render::table_text(&state, &table));
            }
        }
        Command::Users => {
            for user in catalog.users() {
                println!("{}\t{}", user.id, user.name);
            }
        }
        Command::Categories => {
            for category in catalog.categories() {
                println!("{}\t{} - {}", category.id, category.icon, category.title);
            }
        }
    }

    Ok(())
}

/// Events in the order a user would click them: user tab, categories, headers, then search.
fn flag_events(
    user: Option<String>,
    categories: &[i64],
    sorts: &[SortColumn],
    search: Option<String>,
) -> Vec<ViewEvent> {
    let mut events = Vec::new();
    if let Some(name) = user {
        events.push(ViewEvent::SelectUser(Some(name)));
    }
    events.extend(
        categories
            .iter()
            .map(|id| ViewEvent::ToggleCategory(CategoryId(*id))),
    );
    events.extend(sorts.iter().map(|column| ViewEvent::RequestSort(*column)));
    if let Some(text) = search {
        events.push(ViewEvent::SetSearch(text));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_sort_flags_walk_the_header_cycle() {
        let events = flag_events(None, &[], &[SortColumn::Id, SortColumn::Id], None);
        let state = events
            .into_iter()
            .fold(ViewState::default(), |state, event| state.apply(event));
        assert_eq!(state.sort_column, Some(SortColumn::Id));
        assert_eq!(state.sort_order, Some(table_core::SortOrder::Descending));
    }

    #[test]
    fn repeated_category_flag_toggles_off() {
        let events = flag_events(None, &[2, 2], &[], None);
        let state = events
            .into_iter()
            .fold(ViewState::default(), |state, event| state.apply(event));
        assert!(state.selected_categories.is_empty());
    }

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from([
            "catalog-tools",
            "list",
            "--user",
            "Max",
            "--category",
            "5",
            "--sort",
            "product",
            "--json",
        ])
        .expect("parse");
        match cli.command {
            Command::List {
                user,
                categories,
                sorts,
                json,
                ..
            } => {
                assert_eq!(user.as_deref(), Some("Max"));
                assert_eq!(categories, vec![5]);
                assert_eq!(sorts, vec![SortColumn::Product]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_sort_column() {
        let parsed = Cli::try_parse_from(["catalog-tools", "list", "--sort", "price"]);
        assert!(parsed.is_err());
    }
}
