use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use courtside_core::seed::{StaticRoleDirectory, StaticRoster};
use courtside_core::{
    Navigator, PlayerRecord, RosterStats, ViewCommand, ViewEvent, ViewSession,
};

mod error;
mod prompt;
mod render;

use error::Result;
use prompt::{AnnouncingNavigator, AssumeYes, StdinPrompt};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(version, about = "Courtside admin console - roster and role management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Player roster screen
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Role management screen
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },
}

#[derive(Subcommand)]
enum RosterAction {
    /// Show the roster table
    List {
        /// Search box contents (matches name and membership code)
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Filter button state
        #[arg(long, value_enum, default_value = "all")]
        status: StatusArg,

        /// Emit the visible slice as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Delete a member after confirmation
    Delete {
        /// Membership code (e.g. SC-003)
        id: String,

        /// Skip the interactive prompt and answer yes
        #[arg(long)]
        yes: bool,
    },

    /// Open the edit form for a member
    Edit {
        /// Membership code
        id: String,
    },

    /// Open the form for a new member
    Add,
}

#[derive(Subcommand)]
enum RoleAction {
    /// Show the role directory
    List {
        /// Search box contents (matches name and id)
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Emit the visible slice as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Delete a role after confirmation
    Delete {
        /// Role id
        id: u32,

        /// Skip the interactive prompt and answer yes
        #[arg(long)]
        yes: bool,
    },

    /// Open the edit form for a role
    Edit {
        /// Role id
        id: u32,
    },

    /// Open the form for a new role
    Add,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatusArg {
    All,
    Active,
    Inactive,
}

impl StatusArg {
    fn matches(self, player: &PlayerRecord) -> bool {
        match self {
            StatusArg::All => true,
            StatusArg::Active => player.is_active(),
            StatusArg::Inactive => !player.is_active(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Roster { action } => run_roster(action),
        Commands::Roles { action } => run_roles(action),
    }
}

fn run_roster(action: RosterAction) -> Result<()> {
    let mut session = ViewSession::open(&StaticRoster)?;

    match action {
        RosterAction::List {
            search,
            page,
            status,
            json,
        } => {
            if let Some(search) = search {
                session.set_search(search);
            }
            session.set_page(page);

            let view = session.visible_filtered(|p| status.matches(p));
            if json {
                println!("{}", serde_json::to_string_pretty(view.records())?);
            } else {
                let stats =
                    RosterStats::compute(session.store(), chrono::Local::now().date_naive());
                print!("{}", render::stats_line(&stats));
                print!("{}", render::roster_table(&view));
            }
        }

        RosterAction::Delete { id, yes } => {
            let event = if yes {
                session.delete_with_prompt(id, &mut AssumeYes)
            } else {
                session.delete_with_prompt(id, &mut StdinPrompt)
            };
            report_delete(&event);
            info!("Roster now holds {} members", session.store().len());
        }

        RosterAction::Edit { id } => {
            dispatch_navigation(session.handle(ViewCommand::Edit { id }));
        }

        RosterAction::Add => {
            dispatch_navigation(session.handle(ViewCommand::Add));
        }
    }

    Ok(())
}

fn run_roles(action: RoleAction) -> Result<()> {
    let mut session = ViewSession::open(&StaticRoleDirectory)?;

    match action {
        RoleAction::List { search, page, json } => {
            if let Some(search) = search {
                session.set_search(search);
            }
            session.set_page(page);

            let view = session.visible();
            if json {
                println!("{}", serde_json::to_string_pretty(view.records())?);
            } else {
                print!("{}", render::roles_table(&view));
            }
        }

        RoleAction::Delete { id, yes } => {
            let event = if yes {
                session.delete_with_prompt(id, &mut AssumeYes)
            } else {
                session.delete_with_prompt(id, &mut StdinPrompt)
            };
            report_delete(&event);
            info!("Directory now holds {} roles", session.store().len());
        }

        RoleAction::Edit { id } => {
            dispatch_navigation(session.handle(ViewCommand::Edit { id }));
        }

        RoleAction::Add => {
            dispatch_navigation(session.handle(ViewCommand::Add));
        }
    }

    Ok(())
}

fn dispatch_navigation<Id: std::fmt::Display>(event: ViewEvent<Id>) {
    match event {
        ViewEvent::NavigationRequested { target } => {
            AnnouncingNavigator.navigate(&target);
        }
        other => info!("No navigation for event {:?}", display_kind(&other)),
    }
}

fn report_delete<Id: std::fmt::Display>(event: &ViewEvent<Id>) {
    match event {
        ViewEvent::RecordRemoved { id } => println!("Deleted {}.", id),
        ViewEvent::DeleteCancelled { id } => println!("Kept {}.", id),
        ViewEvent::CommandIgnored { reason } => {
            println!("Nothing deleted ({:?}).", reason);
        }
        other => info!("Unexpected delete outcome {:?}", display_kind(other)),
    }
}

fn display_kind<Id: std::fmt::Display>(event: &ViewEvent<Id>) -> &'static str {
    match event {
        ViewEvent::NavigationRequested { .. } => "NavigationRequested",
        ViewEvent::ConfirmationRequested { .. } => "ConfirmationRequested",
        ViewEvent::RecordRemoved { .. } => "RecordRemoved",
        ViewEvent::DeleteCancelled { .. } => "DeleteCancelled",
        ViewEvent::CommandIgnored { .. } => "CommandIgnored",
    }
}
