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

//! Response types for admin operations
//!
//! Every response keeps the request that produced it, the response headers
//! and the raw body. Responses that carry a record decode it while being
//! received, so a body that does not match fails `send()` with
//! [`Error::Decode`](crate::admin::error::Error::Decode).

use crate::admin::error::Error;
use crate::admin::types::AdminRequest;
use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

mod account;
mod bucket;
mod quota;
mod user;

pub use account::{
    CreateAccountResponse, GetAccountResponse, ModifyAccountResponse, RemoveAccountResponse,
};
pub use bucket::{GetBucketInfoResponse, ListBucketsResponse, RemoveBucketResponse};
pub use quota::{
    GetBucketQuotaResponse, GetUserQuotaResponse, SetBucketQuotaResponse,
    SetIndividualBucketQuotaResponse, SetUserQuotaResponse,
};
pub use user::{
    CreateUserResponse, GetUserResponse, ListUsersResponse, ModifyUserResponse,
    RemoveUserResponse,
};

#[macro_export]
/// Implements the `FromAdminResponse` trait for responses without a payload.
macro_rules! impl_from_admin_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::admin::types::FromAdminResponse for $ty {
                async fn from_admin_response(
                    request: $crate::admin::types::AdminRequest,
                    response: Result<reqwest::Response, $crate::admin::error::Error>,
                ) -> Result<Self, $crate::admin::error::Error> {
                    let mut resp = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp
                            .bytes()
                            .await
                            .map_err($crate::admin::error::NetworkError::ReqwestError)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `FromAdminResponse` trait for responses that decode their
/// JSON body into the given field.
macro_rules! impl_from_admin_response_decoded {
    ($($ty:ty => $field:ident: $record:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::admin::types::FromAdminResponse for $ty {
                async fn from_admin_response(
                    request: $crate::admin::types::AdminRequest,
                    response: Result<reqwest::Response, $crate::admin::error::Error>,
                ) -> Result<Self, $crate::admin::error::Error> {
                    let mut resp = response?;
                    let headers = std::mem::take(resp.headers_mut());
                    let body = resp
                        .bytes()
                        .await
                        .map_err($crate::admin::error::NetworkError::ReqwestError)?;
                    let $field: $record = $crate::admin::response::decode_json(&body)?;
                    Ok(Self {
                        request,
                        headers,
                        body,
                        $field,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasAdminFields` trait for the specified types.
macro_rules! impl_has_admin_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::admin::response::HasAdminFields for $ty {
                /// The request that was sent to the gateway.
                #[inline]
                fn request(&self) -> &$crate::admin::types::AdminRequest {
                    &self.request
                }

                /// HTTP headers returned by the gateway.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The response body returned by the gateway, as raw bytes.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Common fields of every admin response
pub trait HasAdminFields {
    /// The request that was sent to the gateway.
    fn request(&self) -> &AdminRequest;
    /// HTTP headers returned by the gateway.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the gateway, as raw bytes.
    fn body(&self) -> &Bytes;
}

/// Decodes a JSON body, keeping the body text in the error.
///
/// An empty body is a decode error, not an empty record.
#[doc(hidden)]
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|e| Error::decode(body, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::error::UNMARSHAL_ERROR;
    use crate::admin::types::Account;

    #[test]
    fn test_decode_json_account() {
        let account: Account = decode_json(br#"{"id":"acct1","name":"svc"}"#).unwrap();
        assert_eq!(account.id, "acct1");
        assert_eq!(account.name, "svc");
    }

    #[test]
    fn test_decode_json_empty_body() {
        let err = decode_json::<Account>(b"").unwrap_err();
        assert!(matches!(&err, Error::Decode { body, .. } if body.is_empty()));
        assert!(err.to_string().starts_with(UNMARSHAL_ERROR));
    }

    #[test]
    fn test_decode_json_wrong_shape() {
        let err = decode_json::<Vec<String>>(br#"{"id":"acct1"}"#).unwrap_err();
        match err {
            Error::Decode { body, .. } => assert_eq!(body, r#"{"id":"acct1"}"#),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
