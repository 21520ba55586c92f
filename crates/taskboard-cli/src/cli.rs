use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Filter, view and edit a taskboard board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a board snapshot JSON file (or set TASKBOARD_FILE env var)
    #[arg(long, value_name = "FILE", env = "TASKBOARD_FILE", global = true)]
    pub file: Option<String>,

    /// Base URL of the board API
    #[arg(long, env = "TASKBOARD_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Workspace the board belongs to
    #[arg(long, env = "TASKBOARD_WORKSPACE", global = true)]
    pub workspace: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the board with filters applied
    Show(ShowArgs),
    /// List the tags available on a board
    Tags(TagsArgs),
    /// Assign a user to a card, or clear the assignment
    Assign(AssignArgs),
    /// Rename a card
    Rename(RenameArgs),
    /// Create a tag on a board
    CreateTag(CreateTagArgs),
    /// Move a card within the snapshot, as a drag and drop would
    Move(MoveArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Case-insensitive match against card titles and descriptions
    #[arg(long)]
    pub search: Option<String>,
    /// Only cards assigned to this user
    #[arg(long)]
    pub user: Option<String>,
    /// Only cards carrying at least one of these tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// `kanban` or `list`; defaults to the configured view
    #[arg(long)]
    pub view: Option<String>,
    /// Order cards LOW, MEDIUM, HIGH, CRITICAL, then unset
    #[arg(long)]
    pub by_priority: bool,
}

#[derive(Args)]
pub struct TagsArgs {
    /// Defaults to the board in the snapshot file
    #[arg(long)]
    pub board_id: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct AssignArgs {
    #[arg(long)]
    pub card_id: String,
    #[arg(long, conflicts_with = "unassign", required_unless_present = "unassign")]
    pub user_id: Option<String>,
    #[arg(long)]
    pub unassign: bool,
}

#[derive(Args)]
pub struct RenameArgs {
    #[arg(long)]
    pub card_id: String,
    #[arg(long)]
    pub title: String,
}

#[derive(Args)]
pub struct CreateTagArgs {
    /// Defaults to the board in the snapshot file
    #[arg(long)]
    pub board_id: Option<String>,
    #[arg(long)]
    pub name: String,
}

#[derive(Args)]
pub struct MoveArgs {
    #[arg(long)]
    pub card_id: String,
    #[arg(long)]
    pub list_id: String,
    /// Zero-based index in the destination list; clamped to its length
    #[arg(long, default_value_t = 0)]
    pub position: usize,
}
