use clap::Subcommand;

#[derive(Subcommand)]
pub enum LoginCommands {
    /// Ask the identity service to open a login session
    Request {
        /// Username (defaults to probe.username from config)
        username: Option<String>,
    },
}
