use crate::login_commands::LoginCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Login operations
    Login {
        #[command(subcommand)]
        action: LoginCommands,
    },

    /// Call a function on the identity service and print its return value
    Call {
        /// Function name
        function: String,

        /// Arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },
}
