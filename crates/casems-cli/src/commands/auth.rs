use anyhow::Result;
use casems_application::AppContext;
use colored::Colorize;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    if ctx.session.login(email, password).await {
        whoami(ctx).await?;
    }
    Ok(())
}

pub async fn register(ctx: &AppContext, email: &str, password: &str, name: &str) -> Result<()> {
    ctx.session.register(email, password, name).await;
    whoami(ctx).await
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.session.logout().await;
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    let state = ctx.session.state().await;
    match state.user() {
        Some(user) => println!(
            "{} <{}> {} {}",
            user.name.bold(),
            user.email,
            user.role.to_string().cyan(),
            user.id.dimmed()
        ),
        None => println!("{}", "Not signed in".dimmed()),
    }
    Ok(())
}

pub async fn forgot_password(ctx: &AppContext, email: &str) -> Result<()> {
    ctx.session.request_password_reset(email).await;
    Ok(())
}

/// Validation failures are reported as an error exit.
pub async fn reset_password(ctx: &AppContext, password: &str, confirm: &str) -> Result<()> {
    ctx.session.reset_password(password, confirm).await?;
    Ok(())
}
