use anyhow::{Context, Result};
use casems_application::{AppContext, bootstrap};
use casems_core::case::{CasePatch, CaseStatus};
use casems_core::category::{CategoryPatch, NewCategory};
use casems_core::comment::NewComment;
use casems_infrastructure::{CasemsPaths, ConfigService, FileSessionCache, ServiceType};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;

mod commands;
mod logging;
mod output;

use logging::{LogConfig, LogFormat};
use output::ConsoleNotifier;

#[derive(Parser)]
#[command(name = "casems")]
#[command(about = "CaseMS CLI - browse and manage the legal case showcase", long_about = None)]
struct Cli {
    /// Directory holding config.toml and the session cache
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit cases
    Cases {
        #[command(subcommand)]
        action: CasesAction,
    },
    /// Browse and edit categories
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
    /// Post comments and replies
    Comments {
        #[command(subcommand)]
        action: CommentsAction,
    },
    /// Show admin dashboard figures
    Dashboard {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sign in with the demo administrator account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an administrator account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in identity
    Whoami,
    /// Request password-reset instructions
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Set a new password
    ResetPassword {
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Resolve a web path and apply the admin guard
    Route { path: String },
}

#[derive(Subcommand)]
enum CasesAction {
    /// List cases, optionally filtered
    List {
        /// Case-insensitive text search over title, description and tags
        #[arg(long)]
        search: Option<String>,
        /// Exact category name
        #[arg(long)]
        category: Option<String>,
        /// open, in-progress or closed
        #[arg(long)]
        status: Option<CaseStatus>,
    },
    /// Show one case with its comments and related cases
    Show { id: String },
    /// Create a case (kept for this process only)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        content: String,
        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        #[arg(long, default_value_t = CaseStatus::Open)]
        status: CaseStatus,
    },
    /// Change fields of a case; omitted fields are kept
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Comma-separated tags, replacing the current ones
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
        #[arg(long)]
        status: Option<CaseStatus>,
    },
    /// Delete a case
    Delete { id: String },
    /// List the cases of one category
    ByCategory { name: String },
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// List categories with their case counts
    List,
    /// Create a category
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Rename or describe a category; cases keep the old name
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a category; its cases are kept
    Delete { id: String },
}

#[derive(Subcommand)]
enum CommentsAction {
    /// Post a comment on a case, or a reply to a top-level comment
    Add {
        case_id: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        body: String,
        /// ID of the top-level comment to reply to
        #[arg(long)]
        reply_to: Option<String>,
    },
}

async fn build_context(
    config_dir: Option<PathBuf>,
    notifier: Arc<ConsoleNotifier>,
) -> Result<AppContext> {
    let paths = CasemsPaths::new(config_dir);
    let config_path = paths
        .get_path(ServiceType::Config)
        .context("Failed to locate config directory")?;
    let cache_path = paths
        .get_path(ServiceType::SessionCache)
        .context("Failed to locate config directory")?;

    let config = ConfigService::with_path(config_path)
        .get_config()
        .context("Failed to load configuration")?;
    let cache = Arc::new(FileSessionCache::with_path(cache_path));

    Ok(bootstrap(config, cache, notifier).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_flags(cli.verbose, cli.quiet)
        .with_format(cli.log_format)
        .with_ansi(io::stderr().is_terminal());
    logging::init_logging(&log_config);

    let notifier = Arc::new(ConsoleNotifier::new());
    let ctx = build_context(cli.config_dir, notifier.clone()).await?;

    let result = match cli.command {
        Commands::Cases { action } => match action {
            CasesAction::List {
                search,
                category,
                status,
            } => commands::cases::list(&ctx, search, category, status).await,
            CasesAction::Show { id } => commands::cases::show(&ctx, &id).await,
            CasesAction::Create {
                title,
                category,
                description,
                content,
                tags,
                status,
            } => {
                commands::cases::create(
                    &ctx,
                    commands::cases::CreateArgs {
                        title,
                        category,
                        description,
                        content,
                        tags,
                        status,
                    },
                )
                .await
            }
            CasesAction::Update {
                id,
                title,
                category,
                description,
                content,
                tags,
                status,
            } => {
                let patch = CasePatch {
                    title,
                    category,
                    description,
                    content,
                    tags,
                    status,
                    ..CasePatch::default()
                };
                commands::cases::update(&ctx, &id, patch).await
            }
            CasesAction::Delete { id } => commands::cases::delete(&ctx, &id).await,
            CasesAction::ByCategory { name } => commands::cases::by_category(&ctx, &name).await,
        },
        Commands::Categories { action } => match action {
            CategoriesAction::List => commands::categories::list(&ctx).await,
            CategoriesAction::Create { name, description } => {
                commands::categories::create(&ctx, NewCategory { name, description }).await
            }
            CategoriesAction::Update {
                id,
                name,
                description,
            } => {
                commands::categories::update(&ctx, &id, CategoryPatch { name, description }).await
            }
            CategoriesAction::Delete { id } => commands::categories::delete(&ctx, &id).await,
        },
        Commands::Comments { action } => match action {
            CommentsAction::Add {
                case_id,
                author,
                email,
                body,
                reply_to,
            } => {
                let mut comment = NewComment::new(case_id, author, email, body);
                if let Some(parent_id) = reply_to {
                    comment = comment.in_reply_to(parent_id);
                }
                commands::comments::add(&ctx, comment).await
            }
        },
        Commands::Dashboard { json } => commands::dashboard::run(&ctx, json).await,
        Commands::Login { email, password } => commands::auth::login(&ctx, &email, &password).await,
        Commands::Register {
            email,
            password,
            name,
        } => commands::auth::register(&ctx, &email, &password, &name).await,
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Whoami => commands::auth::whoami(&ctx).await,
        Commands::ForgotPassword { email } => commands::auth::forgot_password(&ctx, &email).await,
        Commands::ResetPassword { password, confirm } => {
            commands::auth::reset_password(&ctx, &password, &confirm).await
        }
        Commands::Route { path } => commands::route::run(&ctx, &path).await,
    };

    notifier.flush();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cases_list_filters() {
        let cli = Cli::try_parse_from([
            "casems",
            "cases",
            "list",
            "--category",
            "Criminal Law",
            "--status",
            "in-progress",
        ])
        .unwrap();
        match cli.command {
            Commands::Cases {
                action:
                    CasesAction::List {
                        search,
                        category,
                        status,
                    },
            } => {
                assert_eq!(search, None);
                assert_eq!(category.as_deref(), Some("Criminal Law"));
                assert_eq!(status, Some(CaseStatus::InProgress));
            }
            _ => panic!("expected cases list"),
        }
    }

    #[test]
    fn test_parse_cases_update_keeps_omitted_fields_unset() {
        let cli = Cli::try_parse_from([
            "casems", "cases", "update", "3", "--status", "closed", "--tags", "a,b",
        ])
        .unwrap();
        match cli.command {
            Commands::Cases {
                action:
                    CasesAction::Update {
                        id,
                        title,
                        tags,
                        status,
                        ..
                    },
            } => {
                assert_eq!(id, "3");
                assert_eq!(title, None);
                assert_eq!(tags, Some(vec!["a".to_string(), "b".to_string()]));
                assert_eq!(status, Some(CaseStatus::Closed));
            }
            _ => panic!("expected cases update"),
        }
    }

    #[test]
    fn test_parse_comment_reply() {
        let cli = Cli::try_parse_from([
            "casems", "comments", "add", "1", "--author", "Ann", "--email", "a@b.c", "--body",
            "Agreed", "--reply-to", "c1",
        ])
        .unwrap();
        match cli.command {
            Commands::Comments {
                action: CommentsAction::Add { reply_to, .. },
            } => assert_eq!(reply_to.as_deref(), Some("c1")),
            _ => panic!("expected comments add"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["casems", "cases", "list", "--status", "pending"]).is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["casems", "whoami", "-vv", "--log-format", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[tokio::test]
    async fn test_build_context_with_empty_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = build_context(
            Some(temp_dir.path().to_path_buf()),
            Arc::new(ConsoleNotifier::new()),
        )
        .await
        .unwrap();

        assert_eq!(ctx.entities.list_cases().await.unwrap().len(), 6);
        assert!(!ctx.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_build_context_reads_config_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "[store]\nseed_demo_data = false\n",
        )
        .unwrap();

        let ctx = build_context(
            Some(temp_dir.path().to_path_buf()),
            Arc::new(ConsoleNotifier::new()),
        )
        .await
        .unwrap();
        assert!(ctx.entities.list_cases().await.unwrap().is_empty());
    }
}
