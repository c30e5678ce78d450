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

//! Interpretation of the gateway's JSON error documents.
//!
//! The dispatcher never looks at error bodies. Callers that want to branch on
//! the gateway error code can feed [`ServerError::body`](crate::admin::error::ServerError::body)
//! to [`ErrorResponse::parse`].

use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Error codes returned by the admin API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RgwErrorCode {
    #[default]
    NoError,
    AccessDenied,
    InvalidAccessKeyId,
    SignatureDoesNotMatch,
    InvalidArgument,
    NoSuchAccount,
    AccountAlreadyExists,
    NoSuchUser,
    UserAlreadyExists,
    InvalidAccessKey,
    KeyExists,
    EmailExists,
    NoSuchBucket,
    BucketNotEmpty,
    NoSuchKey,
    QuotaExceeded,
    MethodNotAllowed,

    /// Any code not listed above, kept as received
    OtherError(String),
}

#[allow(dead_code)]
const ALL_RGW_ERROR_CODES: &[RgwErrorCode] = &[
    RgwErrorCode::NoError,
    RgwErrorCode::AccessDenied,
    RgwErrorCode::InvalidAccessKeyId,
    RgwErrorCode::SignatureDoesNotMatch,
    RgwErrorCode::InvalidArgument,
    RgwErrorCode::NoSuchAccount,
    RgwErrorCode::AccountAlreadyExists,
    RgwErrorCode::NoSuchUser,
    RgwErrorCode::UserAlreadyExists,
    RgwErrorCode::InvalidAccessKey,
    RgwErrorCode::KeyExists,
    RgwErrorCode::EmailExists,
    RgwErrorCode::NoSuchBucket,
    RgwErrorCode::BucketNotEmpty,
    RgwErrorCode::NoSuchKey,
    RgwErrorCode::QuotaExceeded,
    RgwErrorCode::MethodNotAllowed,
];

impl RgwErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            RgwErrorCode::NoError => "NoError",
            RgwErrorCode::AccessDenied => "AccessDenied",
            RgwErrorCode::InvalidAccessKeyId => "InvalidAccessKeyId",
            RgwErrorCode::SignatureDoesNotMatch => "SignatureDoesNotMatch",
            RgwErrorCode::InvalidArgument => "InvalidArgument",
            RgwErrorCode::NoSuchAccount => "NoSuchAccount",
            RgwErrorCode::AccountAlreadyExists => "AccountAlreadyExists",
            RgwErrorCode::NoSuchUser => "NoSuchUser",
            RgwErrorCode::UserAlreadyExists => "UserAlreadyExists",
            RgwErrorCode::InvalidAccessKey => "InvalidAccessKey",
            RgwErrorCode::KeyExists => "KeyExists",
            RgwErrorCode::EmailExists => "EmailExists",
            RgwErrorCode::NoSuchBucket => "NoSuchBucket",
            RgwErrorCode::BucketNotEmpty => "BucketNotEmpty",
            RgwErrorCode::NoSuchKey => "NoSuchKey",
            RgwErrorCode::QuotaExceeded => "QuotaExceeded",
            RgwErrorCode::MethodNotAllowed => "MethodNotAllowed",
            RgwErrorCode::OtherError(code) => code,
        }
    }
}

impl FromStr for RgwErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        let code = match s.to_lowercase().as_str() {
            "" | "noerror" => RgwErrorCode::NoError,
            "accessdenied" => RgwErrorCode::AccessDenied,
            "invalidaccesskeyid" => RgwErrorCode::InvalidAccessKeyId,
            "signaturedoesnotmatch" => RgwErrorCode::SignatureDoesNotMatch,
            "invalidargument" => RgwErrorCode::InvalidArgument,
            "nosuchaccount" => RgwErrorCode::NoSuchAccount,
            "accountalreadyexists" => RgwErrorCode::AccountAlreadyExists,
            "nosuchuser" => RgwErrorCode::NoSuchUser,
            "useralreadyexists" => RgwErrorCode::UserAlreadyExists,
            "invalidaccesskey" => RgwErrorCode::InvalidAccessKey,
            "keyexists" => RgwErrorCode::KeyExists,
            "emailexists" => RgwErrorCode::EmailExists,
            "nosuchbucket" => RgwErrorCode::NoSuchBucket,
            "bucketnotempty" => RgwErrorCode::BucketNotEmpty,
            "nosuchkey" => RgwErrorCode::NoSuchKey,
            "quotaexceeded" => RgwErrorCode::QuotaExceeded,
            "methodnotallowed" => RgwErrorCode::MethodNotAllowed,
            _ => RgwErrorCode::OtherError(s.to_owned()),
        };
        Ok(code)
    }
}

impl fmt::Display for RgwErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
struct RawErrorResponse {
    #[serde(rename = "Code", default)]
    code: String,
    #[serde(rename = "RequestId", default)]
    request_id: String,
    #[serde(rename = "HostId", default)]
    host_id: String,
}

/// Error document sent by the gateway with non-2xx responses
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: RgwErrorCode,
    pub request_id: String,
    pub host_id: String,
}

impl ErrorResponse {
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: RawErrorResponse = serde_json::from_slice(body)?;
        let code = match raw.code.parse() {
            Ok(v) => v,
            Err(e) => match e {},
        };
        Ok(ErrorResponse {
            code,
            request_id: raw.request_id,
            host_id: raw.host_id,
        })
    }
}
