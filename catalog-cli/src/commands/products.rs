//! `catalogctl products ...`

use std::io::{self, Write};

use catalog_client::{HttpClient, Product, ProductDetailView, ProductView};
use clap::Subcommand;

use super::{Console, ensure_loaded, pad, report};

#[derive(Subcommand, Debug)]
pub enum ProductAction {
    /// List products, optionally filtered
    List {
        /// Only products in this category
        #[arg(long, short)]
        category: Option<i64>,
        /// Case-insensitive match on name or description
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Create a product
    Add {
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long, short)]
        category: i64,
        #[arg(long, short, default_value = "")]
        description: String,
    },
    /// Change any subset of fields; the rest are sent unchanged
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, short)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long, short)]
        category: Option<i64>,
    },
    /// Delete a product
    Delete { id: i64 },
    /// Product details with related products
    Show { id: String },
}

pub async fn run<H: HttpClient>(console: &Console<H>, action: ProductAction) -> anyhow::Result<()> {
    match action {
        ProductAction::List { category, search } => {
            let mut view = loaded_view(console).await?;
            if let Some(category) = category {
                view.set_category_filter(category);
            }
            if let Some(search) = search {
                view.set_search_term(search);
            }
            print_products(&view, view.filtered_products())?;
            Ok(())
        }
        ProductAction::Add {
            name,
            price,
            category,
            description,
        } => {
            let mut view = loaded_view(console).await?;
            view.edit_draft(|draft| {
                draft.product_name = name;
                draft.description = description;
                draft.price = price;
                draft.category_id = category;
            });
            let outcome = view.add_product().await;
            report(outcome, view.status())
        }
        ProductAction::Update {
            id,
            name,
            description,
            price,
            category,
        } => {
            let mut view = loaded_view(console).await?;
            if !view.begin_edit(id) {
                anyhow::bail!("Product {} not found", id);
            }
            view.edit_selection(|product| {
                if let Some(name) = name {
                    product.product_name = name;
                }
                if let Some(description) = description {
                    product.description = description;
                }
                if let Some(price) = price {
                    product.price = price;
                }
                if let Some(category) = category {
                    product.category_id = category;
                }
            });
            let outcome = view.update_product().await;
            report(outcome, view.status())
        }
        ProductAction::Delete { id } => {
            let mut view = loaded_view(console).await?;
            let Some(product) = view.products().iter().find(|p| p.id == id) else {
                anyhow::bail!("Product {} not found", id);
            };
            let prompt = format!("Delete product \"{}\"?", product.product_name);
            let confirmed = console.confirm(&prompt)?;
            let outcome = view.delete_product(id, confirmed).await;
            report(outcome, view.status())
        }
        ProductAction::Show { id } => show(console, &id).await,
    }
}

async fn loaded_view<H: HttpClient>(console: &Console<H>) -> anyhow::Result<ProductView<H>> {
    let mut view = ProductView::new(console.client());
    let loaded = view.load_all().await;
    ensure_loaded(loaded, view.status())?;
    Ok(view)
}

/// Render the detail view for a raw route id
pub async fn show<H: HttpClient>(console: &Console<H>, id: &str) -> anyhow::Result<()> {
    let mut view = ProductDetailView::new(console.client());
    let loaded = view.load_from_param(id).await;
    ensure_loaded(loaded, view.status())?;

    let Some(product) = view.product() else {
        anyhow::bail!("Product not found");
    };
    println!("{} (#{})", product.product_name, product.id);
    println!("  Category:    {}", view.category_name());
    println!("  Price:       {}", view.format_price(product.price));
    if !product.description.is_empty() {
        println!("  Description: {}", product.description);
    }

    let related = view.related_products();
    if !related.is_empty() {
        println!();
        println!("Related products:");
        for other in related {
            println!(
                "  {}  {}  {}",
                pad(&other.product_name, 24),
                pad(&view.format_price(other.price), 12),
                view.view_product(other.id)
            );
        }
    }
    Ok(())
}

pub fn print_products<H: HttpClient>(view: &ProductView<H>, products: &[Product]) -> io::Result<()> {
    write_products(&mut io::stdout().lock(), view, products)
}

pub fn write_products<H: HttpClient>(
    out: &mut impl Write,
    view: &ProductView<H>,
    products: &[Product],
) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products");
    }
    writeln!(
        out,
        "{}  {}  {}  PRICE",
        pad("ID", 6),
        pad("NAME", 24),
        pad("CATEGORY", 16)
    )?;
    for product in products {
        writeln!(
            out,
            "{}  {}  {}  {}",
            pad(&product.id.to_string(), 6),
            pad(&product.product_name, 24),
            pad(view.category_name(product.category_id), 16),
            view.format_price(product.price)
        )?;
    }
    Ok(())
}
