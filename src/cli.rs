use clap::{Parser, Subcommand};

/// A command-line messenger for Slack channels and groups
///
/// Crier resolves a channel or group by its display name through the
/// platform's REST API, then posts a message to the resolved destination.
/// Each run is a single, independent invocation with no persistent state.
#[derive(Parser, Debug)]
#[command(name = "crier", version, author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the messaging API
    #[arg(
        long,
        global = true,
        value_name = "URL",
        default_value = crate::api::DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Suppress all non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Post a message to a channel or group
    ///
    /// Resolves --name against the communities of the given --type and posts
    /// --message to the match. The type is a prefix of "channels" or
    /// "groups", so 'channel', 'chan' and 'group' all work.
    Post {
        /// Community type, a prefix of "channels" or "groups"
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// Exact display name of the destination channel or group
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// API token, sent as the `token` query parameter
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,

        /// Message text to post
        #[arg(long, value_name = "TEXT")]
        message: Option<String>,
    },

    /// List the channels or groups visible to a token
    ///
    /// Prints the label of every community of the given --type, one per line.
    List {
        /// Community type, a prefix of "channels" or "groups"
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// API token, sent as the `token` query parameter
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },
}
