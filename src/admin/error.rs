// RADOS Gateway Admin Rust Library
// Copyright 2025 rgw-admin contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for admin operations
//!
//! Errors fall into four categories, each with its own type:
//!
//! - [`ValidationErr`]: the request could not be built (missing identifier,
//!   bad base URL, ...). No network call was made.
//! - [`NetworkError`]: the transport failed (connection, timeout, cancelled body read).
//! - [`ServerError`]: the gateway answered with a non-2xx status.
//! - [`Error::Decode`]: the gateway answered 2xx but the body did not match the
//!   expected JSON structure.

use crate::admin::error_response::ErrorResponse;
use thiserror::Error;

/// Prefix of every decode error message.
pub const UNMARSHAL_ERROR: &str = "failed to unmarshal radosgw http response";

/// Errors detected before a request is sent.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("missing account ID")]
    MissingAccountId,

    #[error("missing user ID")]
    MissingUserId,

    #[error("missing user ID or access key")]
    MissingUserIdOrAccessKey,

    #[error("missing user display name")]
    MissingUserDisplayName,

    #[error("missing bucket name")]
    MissingBucketName,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("invalid header value for {name}")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    #[error("unable to read certificate file: {0}")]
    CertificateFile(#[source] std::io::Error),

    #[error("unable to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Transport level failures, propagated as returned by the HTTP client.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// Non-success responses from the gateway.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The body is kept verbatim; see [`ServerError::error_response`] to interpret it.
    #[error("admin operation failed with HTTP status {status}: {body}")]
    HttpError { status: u16, body: String },
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::HttpError { status, .. } => *status,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            ServerError::HttpError { body, .. } => body,
        }
    }

    /// Parses the body as the gateway's JSON error document, if it is one.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        ErrorResponse::parse(self.body().as_bytes()).ok()
    }
}

/// Error returned by every admin operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("{prefix}. {body}. {source}", prefix = UNMARSHAL_ERROR)]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Builds a decode error carrying the offending body as text.
    pub(crate) fn decode(body: &[u8], source: serde_json::Error) -> Self {
        Error::Decode {
            body: String::from_utf8_lossy(body).into_owned(),
            source,
        }
    }

    /// HTTP status of a [`ServerError`], `None` for every other category.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server(e) => Some(e.status()),
            _ => None,
        }
    }
}
