use clap::Subcommand;

/// Secret message subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MessageCommands {
    /// Leave a secret message
    Send {
        /// Message text
        text: String,
    },
    /// List secret messages, newest first
    List,
    /// Mark a secret message as read
    Read {
        /// Message id or unique prefix
        id: String,
    },
}
