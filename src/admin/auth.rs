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

//! Authentication providers for admin requests
//!
//! The client does not implement a signing scheme of its own. Every outgoing
//! request is handed to an [`AdminAuth`] right before it is sent, which may add
//! whatever headers the gateway expects:
//!
//! - **NoAuth** (default): adds nothing, for gateways behind an authenticating proxy
//! - **Bearer Token**: static `Authorization` header
//!
//! Request signing (e.g. AWS SigV4) plugs in by implementing [`AdminAuth`].

use crate::admin::error::{Error, ValidationErr};
use crate::admin::params::ParamSet;
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use http::Method;
use std::fmt::Debug;
use std::sync::Arc;

/// Trait for authenticating admin requests
///
/// Implementations must be `Send + Sync` since one client is shared between
/// concurrent requests.
pub trait AdminAuth: Send + Sync + Debug {
    /// Authenticate a request by adding headers
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method of the request
    /// * `path` - Full request path (e.g., `/admin/account`)
    /// * `headers` - Headers that will be sent with the request
    /// * `query_params` - Encoded query parameters of the request
    fn authenticate(
        &self,
        method: &Method,
        path: &str,
        headers: &mut HeaderMap,
        query_params: &ParamSet,
    ) -> Result<(), Error>;

    /// Returns a human-readable name for this auth provider
    fn name(&self) -> &'static str;
}

/// Bearer token authentication
///
/// Adds `Authorization: <token_type> <token>` to every request. Token refresh
/// is the caller's responsibility: build a new client with the new token.
///
/// # Example
///
/// ```
/// use rgw_admin::admin::auth::BearerAuth;
///
/// let auth = BearerAuth::new("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9...");
/// let auth_custom = BearerAuth::with_token_type("my-token", "CustomScheme");
/// ```
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
    token_type: String,
    auth_header: String,
}

impl Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

impl BearerAuth {
    /// Create a new BearerAuth using the "Bearer" scheme
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_token_type(token, "Bearer")
    }

    /// Create a new BearerAuth with a custom token type
    pub fn with_token_type(token: impl Into<String>, token_type: impl Into<String>) -> Self {
        let token = token.into();
        let token_type = token_type.into();
        let auth_header = format!("{token_type} {token}");
        Self {
            token,
            token_type,
            auth_header,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }
}

impl AdminAuth for BearerAuth {
    fn authenticate(
        &self,
        _method: &Method,
        _path: &str,
        headers: &mut HeaderMap,
        _query_params: &ParamSet,
    ) -> Result<(), Error> {
        let mut value = HeaderValue::from_str(&self.auth_header).map_err(|source| {
            ValidationErr::InvalidHeaderValue {
                name: AUTHORIZATION.to_string(),
                source,
            }
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "BearerAuth"
    }
}

/// No authentication
#[derive(Clone, Debug, Default)]
pub struct NoAuth;

impl NoAuth {
    pub fn new() -> Self {
        Self
    }
}

impl AdminAuth for NoAuth {
    fn authenticate(
        &self,
        _method: &Method,
        _path: &str,
        _headers: &mut HeaderMap,
        _query_params: &ParamSet,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoAuth"
    }
}

/// Type alias for boxed auth provider
pub type BoxedAdminAuth = Arc<dyn AdminAuth>;
