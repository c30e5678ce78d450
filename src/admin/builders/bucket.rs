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

//! Builders for bucket operations
//!
//! Admin API: `GET|DELETE /admin/bucket`

use crate::admin::client::AdminClient;
use crate::admin::error::ValidationErr;
use crate::admin::params::{ParamSelection, ToParams};
use crate::admin::response::{GetBucketInfoResponse, ListBucketsResponse, RemoveBucketResponse};
use crate::admin::types::{AdminApi, AdminRequest, Bucket, ToAdminRequest};
use http::Method;
use typed_builder::TypedBuilder;

const BUCKET_PATH: &str = "/bucket";

/// The bucket endpoints name the owner `uid`
fn owner_as_uid(fields: &[&'static str]) -> ParamSelection {
    ParamSelection::new(fields).rename("owner", "uid")
}

/// Argument builder for the list buckets operation
///
/// Lists every bucket, or only those owned by `owner` when set.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)]
    client: AdminClient,
    #[builder(default, setter(into))]
    owner: String,
}

impl AdminApi for ListBuckets {
    type AdminResponse = ListBucketsResponse;
}

/// Builder type for ListBuckets
pub type ListBucketsBldr = ListBucketsBuilder<((AdminClient,), ())>;

impl ToAdminRequest for ListBuckets {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        let filter = Bucket {
            owner: self.owner,
            ..Default::default()
        };

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(BUCKET_PATH)
            .query_params(filter.to_params(&owner_as_uid(&["owner"])))
            .build())
    }
}

/// Argument builder for the bucket info operation
///
/// Set `generate_stat` on the bucket to have usage counters included.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetBucketInfo {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    bucket: Bucket,
}

impl AdminApi for GetBucketInfo {
    type AdminResponse = GetBucketInfoResponse;
}

/// Builder type for GetBucketInfo
pub type GetBucketInfoBldr = GetBucketInfoBuilder<((AdminClient,), (Bucket,))>;

impl ToAdminRequest for GetBucketInfo {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        if self.bucket.bucket.is_empty() {
            return Err(ValidationErr::MissingBucketName);
        }

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(BUCKET_PATH)
            .query_params(
                self.bucket
                    .to_params(&owner_as_uid(&["bucket", "owner", "stats"])),
            )
            .build())
    }
}

/// Argument builder for the remove bucket operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct RemoveBucket {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    bucket: Bucket,
}

impl AdminApi for RemoveBucket {
    type AdminResponse = RemoveBucketResponse;
}

/// Builder type for RemoveBucket
pub type RemoveBucketBldr = RemoveBucketBuilder<((AdminClient,), (Bucket,))>;

impl ToAdminRequest for RemoveBucket {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        if self.bucket.bucket.is_empty() {
            return Err(ValidationErr::MissingBucketName);
        }

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path(BUCKET_PATH)
            .query_params(
                self.bucket
                    .to_params(&ParamSelection::new(&["bucket", "purge-objects"])),
            )
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::builders::test_client;

    #[test]
    fn test_list_buckets_sends_owner_as_uid() {
        let req = ListBuckets::builder()
            .client(test_client())
            .owner("alice")
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/bucket");
        assert_eq!(req.query_params.to_query_string(), "uid=alice");

        let req = ListBuckets::builder()
            .client(test_client())
            .build()
            .to_admin_request()
            .unwrap();
        assert!(req.query_params.is_empty());
    }

    #[test]
    fn test_get_bucket_info() {
        let bucket = Bucket {
            bucket: "photos".into(),
            owner: "alice".into(),
            generate_stat: Some(true),
            ..Default::default()
        };
        let req = GetBucketInfo::builder()
            .client(test_client())
            .bucket(bucket)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(
            req.query_params.to_query_string(),
            "bucket=photos&uid=alice&stats=true"
        );
    }

    #[test]
    fn test_remove_bucket() {
        let err = RemoveBucket::builder()
            .client(test_client())
            .bucket(Bucket::default())
            .build()
            .to_admin_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::MissingBucketName));

        let bucket = Bucket {
            bucket: "photos".into(),
            purge_objects: Some(true),
            ..Default::default()
        };
        let req = RemoveBucket::builder()
            .client(test_client())
            .bucket(bucket)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(
            req.query_params.to_query_string(),
            "bucket=photos&purge-objects=true"
        );
    }
}
