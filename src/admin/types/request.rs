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

//! Request types and traits for admin operations

use crate::admin::client::AdminClient;
use crate::admin::error::{Error, ValidationErr};
use crate::admin::params::ParamSet;
use http::{HeaderMap, Method};
use typed_builder::TypedBuilder;

/// Request structure for admin API operations
#[derive(Clone, Debug, TypedBuilder)]
pub struct AdminRequest {
    #[builder(!default)]
    pub(crate) client: AdminClient,
    #[builder(!default)]
    pub method: Method,
    /// Resource path, relative to the admin prefix (e.g. `/account`)
    #[builder(!default, setter(into))]
    pub path: String,
    #[builder(default)]
    pub query_params: ParamSet,
    #[builder(default)]
    pub headers: HeaderMap,
}

impl AdminRequest {
    /// Sends the request; only 2xx responses are returned as `Ok`.
    pub(crate) async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                &self.method,
                &self.path,
                &mut self.headers,
                &self.query_params,
            )
            .await
    }
}

/// Convert builder to AdminRequest
pub trait ToAdminRequest {
    /// Convert this builder into an AdminRequest
    ///
    /// # Errors
    ///
    /// Returns `ValidationErr` if a required identifier is missing. Nothing
    /// is sent in that case.
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr>;
}

/// Execute admin API operation
pub trait AdminApi: ToAdminRequest {
    /// Response type for this operation
    type AdminResponse: FromAdminResponse;

    /// Send the request and await the response
    ///
    /// Cancelling is done by dropping the returned future.
    ///
    /// # Errors
    ///
    /// Returns `Error` if validation, the transport or decoding fails, or if
    /// the gateway answers with a non-success status.
    fn send(self) -> impl std::future::Future<Output = Result<Self::AdminResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let mut request: AdminRequest = self.to_admin_request()?;
            let response: Result<reqwest::Response, Error> = request.execute().await;
            Self::AdminResponse::from_admin_response(request, response).await
        }
    }
}

/// Parse response from admin API
#[async_trait::async_trait]
pub trait FromAdminResponse: Sized {
    async fn from_admin_response(
        request: AdminRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}
