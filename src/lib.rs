//! Fixed-window admission gate that paces calls to the CRPT document-creation API.
//!
//! The [`gate::AdmissionGate`] admits at most `capacity` operations per window and parks
//! excess callers until the window refills. [`client::DocumentClient`] wraps the gate around
//! the `lk/documents/create` endpoint so every submission waits for admission before the
//! request leaves the process.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod document;
pub mod error;
pub mod gate;
pub mod http;
pub mod obs;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use tokio::time::Instant;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
