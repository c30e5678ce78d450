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

//! Response types for bucket operations

use crate::admin::types::{AdminRequest, Bucket};
use crate::{impl_from_admin_response, impl_from_admin_response_decoded, impl_has_admin_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of the list buckets operation
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    buckets: Vec<String>,
}

impl ListBucketsResponse {
    /// Bucket names
    pub fn buckets(&self) -> &[String] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<String> {
        self.buckets
    }
}

/// Response of the bucket info operation
#[derive(Clone, Debug)]
pub struct GetBucketInfoResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    bucket: Bucket,
}

impl GetBucketInfoResponse {
    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    pub fn into_bucket(self) -> Bucket {
        self.bucket
    }
}

/// Response of the remove bucket operation
#[derive(Clone, Debug)]
pub struct RemoveBucketResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(ListBucketsResponse, GetBucketInfoResponse, RemoveBucketResponse);
impl_from_admin_response_decoded!(
    ListBucketsResponse => buckets: Vec<String>,
    GetBucketInfoResponse => bucket: Bucket,
);
impl_from_admin_response!(RemoveBucketResponse);
