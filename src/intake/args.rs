use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(about = "Contact-request intake tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a contact request (the public form)
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// One of: sauna, micro-house, tiny-house, custom-project
        #[arg(long)]
        service: String,

        #[arg(long)]
        message: String,
    },

    /// Capture a referral code for future submissions
    Ref {
        code: String,
    },

    /// Sign in to the staff dashboard commands
    Login {
        email: String,
        password: String,
    },

    /// Sign out
    Logout,

    /// List contacts with filtering, sorting, and pagination
    #[command(alias = "ls")]
    List {
        /// Case-insensitive substring match on name or email
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by service (omit for all)
        #[arg(long)]
        service: Option<String>,

        /// Filter by status (omit for all)
        #[arg(long)]
        status: Option<String>,

        /// Sort key: created or updated
        #[arg(long, default_value = "created")]
        sort: String,

        /// Sort ascending (default is newest first)
        #[arg(long)]
        asc: bool,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 5)]
        per_page: usize,
    },

    /// View one contact with its notes
    #[command(alias = "v")]
    Show {
        id: String,
    },

    /// Edit every field of a contact
    #[command(alias = "e")]
    Edit {
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        service: String,

        #[arg(long)]
        message: String,

        /// One of: new, todo, inprogress, completed
        #[arg(long)]
        status: String,

        /// Referral code to keep on the contact. Edit overwrites every
        /// field, so omitting this nulls the stored code.
        #[arg(long)]
        referral: Option<String>,
    },

    /// Move a contact to a workflow status
    Status {
        id: String,
        status: String,
    },

    /// Delete one or more contacts (notes go with them)
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Manage notes on a contact
    #[command(subcommand)]
    Note(NoteCommands),

    /// Populate the store with demo contacts
    Seed {
        #[arg(long, default_value_t = intake::commands::seed::DEFAULT_COUNT)]
        count: usize,
    },

    /// Wipe all contacts and notes
    Reset {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a note to a contact
    Add {
        contact_id: String,
        content: String,
    },

    /// Delete a note by id
    Rm {
        note_id: String,
    },
}
