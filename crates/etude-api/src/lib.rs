//! Weather and track-metadata lookups over HTTP.
//!
//! The crate keeps I/O behind the [`ApiTransport`] trait: clients are
//! generic over the transport, the production implementation wraps
//! `reqwest`, and tests script their own. Responses are decoded with serde
//! into small derived records; all failures surface to the immediate caller
//! with no retry and no partial result.
//!
//! # Clients
//!
//! - [`WeatherClient`] - current conditions by postal code, one-shot or
//!   polled on a bounded schedule via `etude-poll`
//! - [`TrackClient`] - media URL extraction from track documents fetched by
//!   numeric ID

mod config;
mod error;
mod track;
mod transport;
mod weather;

pub use config::{DEFAULT_WEATHER_BASE_URL, WeatherConfig};
pub use error::ApiError;
pub use track::{DEFAULT_TRACK_BASE_URL, TrackClient};
pub use transport::{ApiTransport, TransportError};
pub use weather::{WeatherClient, WeatherReport, kelvin_to_fahrenheit};

#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
