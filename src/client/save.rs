//! Image download to local disk

use super::XkcdClient;
use crate::error::{Error, Result};
use crate::utils::{filename_from_url, resolve_output_dir};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

impl XkcdClient {
    /// Download an image into `dir`, named after the URL's last path segment
    ///
    /// An existing file with the same name is overwritten. If the transfer
    /// fails after the file was created, the partial file is removed.
    ///
    /// Returns the absolute path written.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if no file name can be derived from `url`
    /// - [`Error::Network`] on transport failure or timeout
    /// - [`Error::HttpStatus`] if the server answers with a non-success status
    /// - [`Error::Io`] if the file cannot be created or written
    pub async fn save_image(&self, url: &str, dir: &Path) -> Result<PathBuf> {
        let file_name = filename_from_url(url)?;
        let path = resolve_output_dir(dir)?.join(file_name);

        debug!(url = %url, "fetching image");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let mut file = File::create(&path).await?;

        match write_body(response, &mut file).await {
            Ok(bytes) => {
                info!(path = %path.display(), bytes, "saved image");
                Ok(path)
            }
            Err(e) => {
                drop(file);
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    warn!(
                        path = %path.display(),
                        error = %remove_err,
                        "failed to remove partial image file"
                    );
                }
                Err(e)
            }
        }
    }
}

/// Stream the response body into `file` chunk by chunk
async fn write_body(mut response: reqwest::Response, file: &mut File) -> Result<u64> {
    let mut written: u64 = 0;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(written)
}
