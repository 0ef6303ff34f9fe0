use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Preview the slug for a name. Without NAME, reads one name per line
    /// from stdin and prints the slug after each line.
    Slug {
        /// Tag name
        name: Option<String>,
    },

    /// Create a tag
    Create {
        /// Tag name (at least 3 characters)
        name: String,
    },

    /// List tags
    List,
}
