use anyhow::Result;
use casems_application::AppContext;
use casems_core::route::Route;
use colored::Colorize;

/// Prints the view a path resolves to, or where the guard redirects.
pub async fn run(ctx: &AppContext, path: &str) -> Result<()> {
    let route = Route::resolve(path);
    let authenticated = ctx.session.is_authenticated().await;

    match route.guard(authenticated) {
        Some(target) => println!(
            "{} {} {}",
            route.path().cyan(),
            "redirects to".yellow(),
            target.path().cyan()
        ),
        None => println!("{} {:?}", route.path().cyan(), route),
    }
    Ok(())
}
