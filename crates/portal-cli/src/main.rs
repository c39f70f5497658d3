use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portal_core::i18n::Language;
use portal_core::model::DEFAULT_CHAT_CHANNEL;
use portal_infrastructure::PortalPaths;

mod app;
mod commands;
mod logging;
mod render;

use commands::lang::LangChange;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Portal - terminal client for the enterprise collaboration portal", long_about = None)]
struct Cli {
    /// Portal server URL (overrides config.toml and PORTAL_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config directory (overrides PORTAL_CONFIG_DIR)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show or change the display language
    Lang {
        #[command(subcommand)]
        action: Option<LangAction>,
    },
    /// Module cards, integration center and feature map
    Dashboard,
    /// Open a module page
    Open { module: String },
    /// Run quick tasks of a module
    Run {
        module: String,
        /// Task id, repeatable
        #[arg(long = "task")]
        tasks: Vec<String>,
    },
    /// Documents and chat
    Office {
        #[command(subcommand)]
        action: OfficeAction,
    },
    /// Approvals
    Oa {
        #[command(subcommand)]
        action: OaAction,
    },
    /// Expense claims
    Finance {
        #[command(subcommand)]
        action: FinanceAction,
    },
    /// Account administration
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum LangAction {
    /// Print the current language
    Show,
    /// Switch between zh and en
    Toggle,
    Zh,
    En,
}

#[derive(Subcommand)]
enum OfficeAction {
    /// Save a document
    Doc {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        /// Comma-separated user names
        #[arg(long, default_value = "")]
        collaborators: String,
    },
    /// Post a chat message
    Chat {
        message: String,
        #[arg(long, default_value = DEFAULT_CHAT_CHANNEL)]
        channel: String,
    },
    /// Latest documents and messages
    Feed,
}

#[derive(Subcommand)]
enum OaAction {
    /// Submit an approval request
    Submit {
        #[arg(long = "type", default_value = "")]
        kind: String,
        #[arg(long, default_value = "")]
        amount: String,
        #[arg(long, default_value = "")]
        reason: String,
    },
    /// Latest approvals
    Feed,
}

#[derive(Subcommand)]
enum FinanceAction {
    /// Submit an expense claim
    Submit {
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Latest expense claims
    Feed,
}

#[derive(Subcommand)]
enum UsersAction {
    /// Create an account
    Create {
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        department: String,
        /// Comma-separated module keys
        #[arg(long, default_value = "")]
        modules: String,
    },
}

impl From<Option<LangAction>> for LangChange {
    fn from(action: Option<LangAction>) -> Self {
        match action {
            None | Some(LangAction::Show) => LangChange::Show,
            Some(LangAction::Toggle) => LangChange::Toggle,
            Some(LangAction::Zh) => LangChange::Set(Language::Zh),
            Some(LangAction::En) => LangChange::Set(Language::En),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PortalPaths::new(cli.config_dir.clone())?;
    let _log_guard = logging::init(&paths.logs_dir(), cli.verbose)?;
    let state = app::bootstrap(paths, cli.base_url.as_deref()).await?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&state, &username, &password).await?
        }
        Commands::Logout => commands::auth::logout(&state).await?,
        Commands::Lang { action } => commands::lang::run(&state, action.into()).await?,
        Commands::Dashboard => commands::page::dashboard(&state).await?,
        Commands::Open { module } => commands::page::open(&state, &module).await?,
        Commands::Run { module, tasks } => commands::page::run(&state, &module, &tasks).await?,
        Commands::Office { action } => match action {
            OfficeAction::Doc {
                title,
                content,
                collaborators,
            } => commands::office::save_document(&state, &title, &content, &collaborators).await?,
            OfficeAction::Chat { message, channel } => {
                commands::office::send_chat(&state, &channel, &message).await?
            }
            OfficeAction::Feed => commands::office::feed(&state).await?,
        },
        Commands::Oa { action } => match action {
            OaAction::Submit {
                kind,
                amount,
                reason,
            } => commands::oa::submit(&state, &kind, &amount, &reason).await?,
            OaAction::Feed => commands::oa::feed(&state).await?,
        },
        Commands::Finance { action } => match action {
            FinanceAction::Submit {
                kind,
                amount,
                description,
            } => commands::finance::submit(&state, &kind, &amount, &description).await?,
            FinanceAction::Feed => commands::finance::feed(&state).await?,
        },
        Commands::Users { action } => match action {
            UsersAction::Create {
                username,
                password,
                department,
                modules,
            } => commands::users::create(&state, &username, &password, &department, &modules).await?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_collects_repeated_tasks() {
        let cli = Cli::try_parse_from([
            "portal",
            "--base-url",
            "http://127.0.0.1:9000",
            "run",
            "finance",
            "--task",
            "finance:reconcile",
            "--task",
            "finance:report",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        match cli.command {
            Commands::Run { module, tasks } => {
                assert_eq!(module, "finance");
                assert_eq!(tasks, vec!["finance:reconcile", "finance:report"]);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_lang_without_action_shows() {
        let cli = Cli::try_parse_from(["portal", "lang"]).unwrap();
        match cli.command {
            Commands::Lang { action } => assert_eq!(LangChange::from(action), LangChange::Show),
            _ => panic!("expected lang"),
        }
        let cli = Cli::try_parse_from(["portal", "lang", "en", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Lang { action } => {
                assert_eq!(LangChange::from(action), LangChange::Set(Language::En))
            }
            _ => panic!("expected lang"),
        }
    }

    #[test]
    fn test_finance_submit_requires_amount() {
        assert!(Cli::try_parse_from(["portal", "finance", "submit", "--type", "travel"]).is_err());
    }
}
