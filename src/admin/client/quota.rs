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

//! Client methods for quota operations

use crate::admin::builders::{
    GetBucketQuota, GetBucketQuotaBldr, GetUserQuota, GetUserQuotaBldr, SetBucketQuota,
    SetBucketQuotaBldr, SetIndividualBucketQuota, SetIndividualBucketQuotaBldr, SetUserQuota,
    SetUserQuotaBldr,
};
use crate::admin::client::AdminClient;
use crate::admin::types::QuotaSpec;

impl AdminClient {
    /// Reads the quota applied to user `quota.uid` as a whole.
    pub fn get_user_quota(&self, quota: QuotaSpec) -> GetUserQuotaBldr {
        GetUserQuota::builder().client(self.clone()).quota(quota)
    }

    /// Sets the quota applied to user `quota.uid` as a whole.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_admin::admin::client::AdminClient;
    /// use rgw_admin::admin::types::{AdminApi, QuotaSpec};
    ///
    /// # async fn example(client: AdminClient) -> Result<(), rgw_admin::admin::error::Error> {
    /// let quota = QuotaSpec {
    ///     uid: "alice".into(),
    ///     enabled: Some(true),
    ///     max_objects: Some(10_000),
    ///     ..Default::default()
    /// };
    /// client.set_user_quota(quota).build().send().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_user_quota(&self, quota: QuotaSpec) -> SetUserQuotaBldr {
        SetUserQuota::builder().client(self.clone()).quota(quota)
    }

    /// Reads the quota every bucket of user `quota.uid` gets.
    pub fn get_bucket_quota(&self, quota: QuotaSpec) -> GetBucketQuotaBldr {
        GetBucketQuota::builder().client(self.clone()).quota(quota)
    }

    /// Sets the quota every bucket of user `quota.uid` gets.
    pub fn set_bucket_quota(&self, quota: QuotaSpec) -> SetBucketQuotaBldr {
        SetBucketQuota::builder().client(self.clone()).quota(quota)
    }

    /// Sets the quota of bucket `quota.bucket` owned by `quota.uid`.
    pub fn set_individual_bucket_quota(&self, quota: QuotaSpec) -> SetIndividualBucketQuotaBldr {
        SetIndividualBucketQuota::builder()
            .client(self.clone())
            .quota(quota)
    }
}
