use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print a text message")]
    Text { message: String },

    #[command(about = "Print an error message to stderr")]
    Error { message: String },

    #[command(about = "Print a JSON object, optionally under a title")]
    Doc {
        #[arg(help = "JSON object to print")]
        document: String,

        #[arg(long)]
        title: Option<String>,
    },

    #[command(about = "Print a message followed by its items")]
    List { message: String, items: Vec<String> },

    #[command(about = "Print JSON object rows as an aligned table")]
    Table {
        #[arg(long, value_delimiter = ',', help = "Comma-separated column headers")]
        headers: Vec<String>,

        #[arg(help = "One JSON object per row, keyed by header")]
        rows: Vec<String>,

        #[arg(long, help = "Wrap values longer than this many characters")]
        max_column_width: Option<usize>,
    },

    #[command(about = "Ask a free-text question and print the answer")]
    Ask {
        question: String,

        #[arg(long)]
        default: Option<String>,
    },

    #[command(about = "Ask a yes/no question and print the answer")]
    Confirm {
        question: String,

        #[arg(long)]
        default_yes: bool,
    },
}
