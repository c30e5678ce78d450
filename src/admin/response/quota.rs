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

//! Response types for quota operations

use crate::admin::types::{AdminRequest, QuotaSpec};
use crate::{impl_from_admin_response, impl_from_admin_response_decoded, impl_has_admin_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of the get user quota operation
#[derive(Clone, Debug)]
pub struct GetUserQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    quota: QuotaSpec,
}

/// Response of the get bucket quota operation
#[derive(Clone, Debug)]
pub struct GetBucketQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    quota: QuotaSpec,
}

impl GetUserQuotaResponse {
    pub fn quota(&self) -> &QuotaSpec {
        &self.quota
    }

    pub fn into_quota(self) -> QuotaSpec {
        self.quota
    }
}

impl GetBucketQuotaResponse {
    pub fn quota(&self) -> &QuotaSpec {
        &self.quota
    }

    pub fn into_quota(self) -> QuotaSpec {
        self.quota
    }
}

impl_has_admin_fields!(GetUserQuotaResponse, GetBucketQuotaResponse);
impl_from_admin_response_decoded!(
    GetUserQuotaResponse => quota: QuotaSpec,
    GetBucketQuotaResponse => quota: QuotaSpec,
);

/// Response of the set user quota operation
#[derive(Clone, Debug)]
pub struct SetUserQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of the set bucket quota operation
#[derive(Clone, Debug)]
pub struct SetBucketQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of the set individual bucket quota operation
#[derive(Clone, Debug)]
pub struct SetIndividualBucketQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(
    SetUserQuotaResponse,
    SetBucketQuotaResponse,
    SetIndividualBucketQuotaResponse,
);
impl_from_admin_response!(
    SetUserQuotaResponse,
    SetBucketQuotaResponse,
    SetIndividualBucketQuotaResponse,
);
