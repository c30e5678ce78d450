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

//! Argument builders for admin operations
//!
//! Each builder validates its identifying fields, selects the parameters the
//! endpoint accepts and turns into an [`AdminRequest`](crate::admin::types::AdminRequest).

mod account;
mod bucket;
mod quota;
mod user;

pub use account::*;
pub use bucket::*;
pub use quota::*;
pub use user::*;

/// Sub-resource flag selecting the quota endpoints of `/user` and `/bucket`
pub(crate) const QUOTA_FLAG: &str = "quota";

#[cfg(test)]
pub(crate) fn test_client() -> crate::admin::client::AdminClient {
    crate::admin::client::AdminClient::new(
        "http://localhost:7480".parse().unwrap(),
        crate::admin::auth::NoAuth,
    )
    .unwrap()
}
