//! `catalogctl open <path>`: render the view behind a client route

use std::io::{self, Write};

use catalog_client::{CategoryView, HttpClient, ProductView, Route};

use super::categories::{print_categories, write_categories};
use super::products::{print_products, show, write_products};
use super::{Console, ensure_loaded};

pub async fn run<H: HttpClient>(console: &Console<H>, path: &str) -> anyhow::Result<()> {
    let route = Route::parse(path);
    if route == Route::Home && !matches!(path.trim(), "" | "/") {
        eprintln!("No view at {}, showing {}", path, route);
    }

    match route {
        Route::Home => {
            let mut view = ProductView::new(console.client());
            let loaded = view.load_all().await;
            ensure_loaded(loaded, view.status())?;
            write_overview(&mut io::stdout().lock(), &view)?;
            Ok(())
        }
        Route::Categories => {
            let mut view = CategoryView::new(console.client());
            let loaded = view.load_categories().await;
            ensure_loaded(loaded, view.status())?;
            print_categories(view.categories())?;
            Ok(())
        }
        Route::Products => {
            let mut view = ProductView::new(console.client());
            let loaded = view.load_all().await;
            ensure_loaded(loaded, view.status())?;
            print_products(&view, view.filtered_products())?;
            Ok(())
        }
        Route::ProductDetail(id) => show(console, &id).await,
    }
}

/// Home page: both listings, categories first
pub fn write_overview<H: HttpClient>(out: &mut impl Write, view: &ProductView<H>) -> io::Result<()> {
    writeln!(out, "Categories ({})", view.categories().len())?;
    write_categories(out, view.categories())?;
    writeln!(out)?;
    writeln!(out, "Products ({})", view.products().len())?;
    write_products(out, view, view.products())
}
