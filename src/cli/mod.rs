mod commands;
mod table;

pub use table::render_file_table;

use crate::client::OpenAIClient;
use crate::errors::OpenAIResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "openai-files",
    about = "Manage files stored with the OpenAI API",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload a file and monitor it until the server has processed it
    Upload {
        /// Path to the file to upload
        filepath: PathBuf,

        /// Purpose of the file
        #[arg(long, default_value = "fine-tune")]
        purpose: String,

        /// Polling interval in seconds
        #[arg(long, default_value_t = 5)]
        poll: u64,
    },

    /// Download a file's content
    Download {
        /// ID of the file to download
        file_id: String,

        /// Output path for the downloaded file
        output: PathBuf,
    },

    /// Delete a file
    Delete {
        /// ID of the file to delete
        file_id: String,
    },

    /// Monitor the processing status of a file
    Status {
        /// ID of the file to check the status of
        file_id: String,
    },

    /// List stored files
    List {
        /// Limit the number of files to list
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

/// Dispatches a parsed command. Every failure propagates except `delete`'s,
/// which is reported and swallowed inside its handler.
pub async fn run(cli: Cli, client: &OpenAIClient) -> OpenAIResult<()> {
    match cli.command {
        Command::Upload {
            filepath,
            purpose,
            poll,
        } => commands::upload(client, &filepath, &purpose, poll).await,
        Command::Download { file_id, output } => {
            commands::download(client, &file_id, &output).await
        }
        Command::Delete { file_id } => {
            commands::delete(client, &file_id).await;
            Ok(())
        }
        Command::Status { file_id } => commands::status(client, &file_id).await,
        Command::List { limit } => commands::list(client, limit).await,
    }
}
