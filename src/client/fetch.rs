//! Metadata request and decode

use super::XkcdClient;
use crate::error::Result;
use crate::types::{Comic, ComicId, RemoteRecord};
use tracing::{debug, warn};

impl XkcdClient {
    /// Fetch a comic's metadata, optionally saving its image first
    ///
    /// When `save` is set the image is written to the configured output
    /// directory before the comic is returned. A failed save fails the whole
    /// call; no metadata is returned in that case.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`](crate::Error::Network) on transport failure or timeout
    /// - [`Error::Decode`](crate::Error::Decode) if the body is not comic JSON
    /// - any error from [`XkcdClient::save_image`] when `save` is set
    ///
    /// # Example
    ///
    /// ```no_run
    /// use xkcd_dl::{ComicId, Config, XkcdClient};
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = XkcdClient::new(Config::default())?;
    ///     let comic = client.fetch(ComicId::Number(353), false).await?;
    ///     println!("{}", comic.title);
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch(&self, id: ComicId, save: bool) -> Result<Comic> {
        let record = self.fetch_record(id).await?;

        if save {
            self.save_image(&record.img, &self.config.output_dir).await?;
        }

        Ok(record.into_comic())
    }

    /// Fetch and decode the raw service record
    ///
    /// A non-success status is not an error here: the body is still decoded
    /// against the comic schema, and a body that does not match fails with
    /// [`Error::Decode`](crate::Error::Decode).
    pub async fn fetch_record(&self, id: ComicId) -> Result<RemoteRecord> {
        let url = self.build_request_url(id);
        debug!(url = %url, comic = %id, "fetching comic metadata");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "metadata request returned non-success status");
        }

        let body = response.bytes().await?;
        let record: RemoteRecord = serde_json::from_slice(&body)?;

        debug!(num = record.num, title = %record.title, "decoded comic metadata");
        Ok(record)
    }
}
