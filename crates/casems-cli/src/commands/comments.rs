use anyhow::Result;
use casems_application::AppContext;
use casems_core::comment::NewComment;
use colored::Colorize;

/// Posts a comment. A reply whose parent is not a top-level comment is
/// dropped by the store; that is reported here but is not an error.
pub async fn add(ctx: &AppContext, comment: NewComment) -> Result<()> {
    match ctx.entities.add_comment(comment).await? {
        Some(comment) => println!("{} {}", comment.id.cyan(), comment.author.bold()),
        None => println!(
            "{}",
            "Reply dropped: parent is not a top-level comment".yellow()
        ),
    }
    Ok(())
}
