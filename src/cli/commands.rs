use crate::cli::table::render_file_table;
use crate::client::OpenAIClient;
use crate::errors::OpenAIResult;
use crate::services::files::{newest_first, FileService, FileUploadRequest};
use bytes::Bytes;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

/// Interval between `status` polls, matching the default upload poll.
const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Uploads a local file, then polls until the server reports it processed.
pub async fn upload(
    client: &OpenAIClient,
    filepath: &Path,
    purpose: &str,
    poll_secs: u64,
) -> OpenAIResult<()> {
    let data = tokio::fs::read(filepath).await?;
    let filename = filepath
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| filepath.display().to_string());

    let file = client
        .files()
        .upload(FileUploadRequest::new(Bytes::from(data), filename, purpose))
        .await?;

    info!(file_id = %file.id, "monitoring upload");
    client
        .files()
        .wait_until_processed(&file.id, Duration::from_secs(poll_secs))
        .await?;
    info!(file_id = %file.id, "file uploaded successfully");
    Ok(())
}

/// Fetches a file's content and writes it verbatim, overwriting `output`.
pub async fn download(client: &OpenAIClient, file_id: &str, output: &Path) -> OpenAIResult<()> {
    let content = client.files().content(file_id).await?;
    tokio::fs::write(output, &content).await?;
    info!(file_id, output = %output.display(), "file downloaded successfully");
    Ok(())
}

/// Requests deletion. This is the one command that swallows remote
/// failures: they are logged and the command exits cleanly.
pub async fn delete(client: &OpenAIClient, file_id: &str) {
    match client.files().delete(file_id).await {
        Ok(_) => info!(file_id, "file deleted successfully"),
        Err(e) => error!(file_id, error = %e, "error deleting file"),
    }
}

/// Polls the file's processing status until it reaches a terminal state,
/// logging each transition along the way.
pub async fn status(client: &OpenAIClient, file_id: &str) -> OpenAIResult<()> {
    let file = client
        .files()
        .wait_until_processed(file_id, STATUS_POLL_INTERVAL)
        .await?;
    info!(file_id = %file.id, "file processed");
    Ok(())
}

/// Prints a table of the `limit` most-recently-created files, newest first.
pub async fn list(client: &OpenAIClient, limit: usize) -> OpenAIResult<()> {
    let response = client.files().list().await?;
    let files = newest_first(response.data, limit);
    println!("{}", render_file_table(&files));
    Ok(())
}
