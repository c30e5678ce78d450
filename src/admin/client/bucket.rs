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

//! Client methods for bucket operations

use crate::admin::builders::{
    GetBucketInfo, GetBucketInfoBldr, ListBuckets, ListBucketsBldr, RemoveBucket,
    RemoveBucketBldr,
};
use crate::admin::client::AdminClient;
use crate::admin::types::Bucket;

impl AdminClient {
    /// Lists bucket names; chain `.owner(uid)` to restrict to one user.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_admin::admin::client::AdminClient;
    /// use rgw_admin::admin::types::AdminApi;
    ///
    /// # async fn example(client: AdminClient) -> Result<(), rgw_admin::admin::error::Error> {
    /// let resp = client.list_buckets().owner("alice").build().send().await?;
    /// for name in resp.buckets() {
    ///     println!("{name}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }

    pub fn get_bucket_info(&self, bucket: Bucket) -> GetBucketInfoBldr {
        GetBucketInfo::builder().client(self.clone()).bucket(bucket)
    }

    /// Removes a bucket; set `purge_objects` to delete a non-empty bucket.
    pub fn remove_bucket(&self, bucket: Bucket) -> RemoveBucketBldr {
        RemoveBucket::builder().client(self.clone()).bucket(bucket)
    }
}
