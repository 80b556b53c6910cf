use serde::Deserialize;

use crate::error::ApiError;
use crate::transport::ApiTransport;

/// Default track-metadata endpoint root.
pub const DEFAULT_TRACK_BASE_URL: &str = "https://theaudiodb.com/api/v1/json/2";

/// The subset of a track document the client consumes. The service wraps
/// every lookup in a `track` array, with `null` standing in for "no match".
#[derive(Debug, Deserialize)]
struct TrackDocument {
    track: Option<Vec<TrackEntry>>,
}

#[derive(Debug, Deserialize)]
struct TrackEntry {
    #[serde(rename = "strMusicVid")]
    music_vid: Option<String>,
}

/// Track-metadata client, generic over the HTTP transport.
#[derive(Debug, Clone)]
pub struct TrackClient<T> {
    transport: T,
    base_url: String,
}

impl<T: ApiTransport> TrackClient<T> {
    /// Create a client for the default endpoint.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: DEFAULT_TRACK_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint root.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the track document for `track_id` and extract its media URL.
    ///
    /// # Errors
    ///
    /// An unknown ID or a document without a usable `strMusicVid` field is
    /// [`ApiError::MissingField`]; nothing is defaulted.
    pub async fn music_video_url(&self, track_id: u64) -> Result<String, ApiError> {
        let url = format!("{}/track.php?h={}", self.base_url, track_id);
        tracing::debug!(track_id, "fetching track document");

        let document = self.transport.get_json(&url).await?;
        let document: TrackDocument = serde_json::from_value(document)?;

        let entry = document
            .track
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(ApiError::MissingField { field: "track" })?;

        match entry.music_vid {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(ApiError::MissingField {
                field: "strMusicVid",
            }),
        }
    }
}
