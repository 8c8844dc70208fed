use anyhow::Result;
use casems_application::AppContext;
use casems_core::category::{Category, CategoryPatch, NewCategory};
use colored::Colorize;

pub async fn list(ctx: &AppContext) -> Result<()> {
    let categories = ctx.entities.list_categories().await?;
    if categories.is_empty() {
        println!("No categories.");
        return Ok(());
    }

    for category in categories {
        let count = ctx.entities.category_case_count(&category.name).await?;
        println!(
            "{:<4} {:<20} {:>3} cases  {}",
            category.id.cyan(),
            category.name.bold(),
            count,
            category.description.dimmed()
        );
    }
    Ok(())
}

pub async fn create(ctx: &AppContext, fields: NewCategory) -> Result<()> {
    let category = ctx.entities.create_category(fields).await?;
    print_category(&category);
    Ok(())
}

pub async fn update(ctx: &AppContext, id: &str, patch: CategoryPatch) -> Result<()> {
    match ctx.entities.update_category(id, patch).await? {
        Some(category) => print_category(&category),
        None => println!("{}", format!("No category with id {}", id).dimmed()),
    }
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: &str) -> Result<()> {
    if !ctx.entities.delete_category(id).await? {
        println!("{}", format!("No category with id {}", id).dimmed());
    }
    Ok(())
}

fn print_category(category: &Category) {
    println!(
        "{} {} {}",
        category.id.cyan(),
        category.name.bold(),
        category.description.dimmed()
    );
}
