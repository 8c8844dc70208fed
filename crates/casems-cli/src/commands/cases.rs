use anyhow::Result;
use casems_application::{AppContext, RELATED_CASES_LIMIT};
use casems_core::CasemsError;
use casems_core::case::{CasePatch, CaseQuery, CaseStatus, NewCase};
use casems_core::comment::Comment;
use colored::Colorize;

use crate::output::{print_case_detail, print_case_row};

pub struct CreateArgs {
    pub title: String,
    pub category: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub status: CaseStatus,
}

pub async fn list(
    ctx: &AppContext,
    search: Option<String>,
    category: Option<String>,
    status: Option<CaseStatus>,
) -> Result<()> {
    let mut query = CaseQuery::new();
    if let Some(search) = search {
        query = query.with_search(search);
    }
    if let Some(category) = category {
        query = query.with_category(category);
    }
    if let Some(status) = status {
        query = query.with_status(status);
    }

    let cases = ctx.entities.filter_cases(&query).await?;
    if cases.is_empty() {
        println!("No cases found.");
        return Ok(());
    }
    for case in &cases {
        print_case_row(case);
    }
    println!("{}", format!("{} case(s)", cases.len()).dimmed());
    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str) -> Result<()> {
    let case = ctx
        .entities
        .get_case(id)
        .await?
        .ok_or_else(|| CasemsError::not_found("case", id))?;
    print_case_detail(&case);

    let comments = ctx.entities.list_top_level_comments(&case.id).await?;
    if !comments.is_empty() {
        let total: usize = comments.iter().map(Comment::thread_len).sum();
        println!();
        println!("{}", format!("Comments ({})", total).bold());
        for comment in &comments {
            print_comment(comment, 1);
            for reply in &comment.replies {
                print_comment(reply, 2);
            }
        }
    }

    let related = ctx
        .entities
        .related_cases(&case.id, RELATED_CASES_LIMIT)
        .await?;
    if !related.is_empty() {
        println!();
        println!("{}", "Related cases".bold());
        for case in &related {
            print_case_row(case);
        }
    }
    Ok(())
}

pub async fn create(ctx: &AppContext, args: CreateArgs) -> Result<()> {
    let case = ctx
        .entities
        .create_case(NewCase {
            title: args.title,
            category: args.category,
            description: args.description,
            content: args.content,
            tags: args.tags,
            status: args.status,
            ..NewCase::default()
        })
        .await?;
    print_case_row(&case);
    Ok(())
}

pub async fn update(ctx: &AppContext, id: &str, patch: CasePatch) -> Result<()> {
    match ctx.entities.update_case(id, patch).await? {
        Some(case) => print_case_row(&case),
        None => println!("{}", format!("No case with id {}", id).dimmed()),
    }
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: &str) -> Result<()> {
    if !ctx.entities.delete_case(id).await? {
        println!("{}", format!("No case with id {}", id).dimmed());
    }
    Ok(())
}

pub async fn by_category(ctx: &AppContext, name: &str) -> Result<()> {
    let cases = ctx.entities.list_cases_by_category(name).await?;
    if cases.is_empty() {
        println!("No cases in {}.", name);
        return Ok(());
    }
    for case in &cases {
        print_case_row(case);
    }
    Ok(())
}

fn print_comment(comment: &Comment, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{}{} {}",
        indent,
        comment.author.bold(),
        comment.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
    );
    println!("{}{}", indent, comment.body);
}
