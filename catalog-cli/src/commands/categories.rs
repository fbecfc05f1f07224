//! `catalogctl categories ...`

use std::io::{self, Write};

use catalog_client::{Category, CategoryView, HttpClient};
use clap::Subcommand;

use super::{Console, ensure_loaded, pad, report};

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// List all categories
    List,
    /// Create a category
    Add {
        name: String,
        #[arg(long, short, default_value = "")]
        description: String,
    },
    /// Change name and/or description
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, short)]
        description: Option<String>,
    },
    /// Soft-delete a category
    Delete { id: i64 },
}

pub async fn run<H: HttpClient>(console: &Console<H>, action: CategoryAction) -> anyhow::Result<()> {
    let mut view = CategoryView::new(console.client());
    let loaded = view.load_categories().await;
    ensure_loaded(loaded, view.status())?;

    match action {
        CategoryAction::List => {
            print_categories(view.categories())?;
            Ok(())
        }
        CategoryAction::Add { name, description } => {
            view.edit_draft(|draft| {
                draft.category_name = name;
                draft.description = description;
            });
            let outcome = view.add_category().await;
            report(outcome, view.status())?;
            print_categories(view.categories())?;
            Ok(())
        }
        CategoryAction::Update {
            id,
            name,
            description,
        } => {
            if !view.begin_edit(id) {
                anyhow::bail!("Category {} not found", id);
            }
            view.edit_selection(|category| {
                if let Some(name) = name {
                    category.category_name = name;
                }
                if let Some(description) = description {
                    category.description = description;
                }
            });
            let outcome = view.update_category().await;
            report(outcome, view.status())
        }
        CategoryAction::Delete { id } => {
            let Some(category) = view.categories().iter().find(|c| c.id == id) else {
                anyhow::bail!("Category {} not found", id);
            };
            let prompt = format!("Delete category \"{}\"?", category.category_name);
            let confirmed = console.confirm(&prompt)?;
            let outcome = view.delete_category(id, confirmed).await;
            report(outcome, view.status())
        }
    }
}

pub fn print_categories(categories: &[Category]) -> io::Result<()> {
    write_categories(&mut io::stdout().lock(), categories)
}

pub fn write_categories(out: &mut impl Write, categories: &[Category]) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "No categories");
    }
    writeln!(out, "{}  {}  DESCRIPTION", pad("ID", 6), pad("NAME", 24))?;
    for category in categories {
        writeln!(
            out,
            "{}  {}  {}",
            pad(&category.id.to_string(), 6),
            pad(&category.category_name, 24),
            category.description
        )?;
    }
    Ok(())
}
