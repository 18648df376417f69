use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse the catalog interactively")]
    Browse,

    #[command(about = "Render one page of the filtered catalog")]
    List {
        /// Case-insensitive title substring
        #[arg(long)]
        title: Option<String>,

        /// Author id (omit for all authors)
        #[arg(long)]
        author: Option<String>,

        /// Genre id (omit for all genres)
        #[arg(long)]
        genre: Option<String>,

        /// How many pages to reveal
        #[arg(long, default_value = "1")]
        page: usize,

        /// Books per page (overrides config)
        #[arg(long)]
        page_size: Option<usize>,
    },

    #[command(about = "Show one book in detail")]
    Show {
        /// Book id
        id: String,
    },

    #[command(about = "List the author table")]
    Authors,

    #[command(about = "List the genre table")]
    Genres,

    /// Records the global --catalog flag, when given, as the default catalog
    #[command(about = "Write a starter config.toml")]
    Init,
}
