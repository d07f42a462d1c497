use clap::{Parser, Subcommand};
use notekeep::model::NoteId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeep", version)]
#[command(about = "Keep, tag and search short rich-text notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes, categories, theme and config
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Title of the note ("Note N" when blank)
        title: Option<String>,

        /// Content of the note (markup is kept as-is)
        content: Option<String>,

        /// Image file to embed
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,

        /// Category (e.g. work, personal, ideas)
        #[arg(short, long)]
        category: Option<String>,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Pin the note right away
        #[arg(long)]
        pin: bool,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Filter: all, pinned, archived or a category name
        #[arg(short, long)]
        filter: Option<String>,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search notes by title, content or tag
    Search {
        term: String,

        /// Filter applied before searching
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// View one or more notes
    #[command(alias = "v")]
    View {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Change fields of a note
    #[command(alias = "e")]
    Edit {
        id: NoteId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Replace the embedded image
        #[arg(long, value_name = "FILE", conflicts_with = "remove_image")]
        image: Option<PathBuf>,

        /// Remove the embedded image
        #[arg(long)]
        remove_image: bool,

        #[arg(short, long)]
        category: Option<String>,

        /// Replace tags (repeatable)
        #[arg(short, long = "tag", value_name = "TAG", conflicts_with = "clear_tags")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Pin one or more notes
    #[command(alias = "p")]
    Pin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Unpin one or more notes
    #[command(alias = "u")]
    Unpin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Archive notes, or restore them if already archived
    Archive {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Reorder the collection by creation time
    Sort {
        /// newest or oldest (defaults to the configured order)
        order: Option<String>,
    },

    /// Append dictated text to a note
    Dictate {
        id: NoteId,

        #[arg(required = true, num_args = 1..)]
        fragments: Vec<String>,
    },

    /// List or add categories
    Category {
        #[command(subcommand)]
        action: Option<CategoryAction>,
    },

    /// Show or set the display theme
    Theme { name: Option<String> },

    /// Get or set configuration
    Config {
        /// Configuration key (default-sort, default-filter, preview-length)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// List categories
    #[command(alias = "ls")]
    List,

    /// Add a category
    Add { name: String },
}
