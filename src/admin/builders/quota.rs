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

//! Builders for quota operations
//!
//! Admin API: `GET|PUT /admin/user?quota`, `PUT /admin/bucket?quota`

use crate::admin::builders::QUOTA_FLAG;
use crate::admin::client::AdminClient;
use crate::admin::error::ValidationErr;
use crate::admin::params::{ParamSelection, ParamSet, ToParams};
use crate::admin::response::{
    GetBucketQuotaResponse, GetUserQuotaResponse, SetBucketQuotaResponse,
    SetIndividualBucketQuotaResponse, SetUserQuotaResponse,
};
use crate::admin::types::{AdminApi, AdminRequest, QuotaSpec, QuotaType, ToAdminRequest};
use http::Method;
use typed_builder::TypedBuilder;

const USER_PATH: &str = "/user";
const BUCKET_PATH: &str = "/bucket";

/// Parameters sent when reading a user-level quota
pub const QUOTA_LOOKUP_PARAMS: &[&str] = &["uid", "quota-type"];

/// Parameters sent when setting a user-level quota
pub const QUOTA_SET_PARAMS: &[&str] = &[
    "uid",
    "quota-type",
    "enabled",
    "check-on-raw",
    "max-size",
    "max-size-kb",
    "max-objects",
];

/// Parameters sent when setting the quota of one bucket
pub const BUCKET_QUOTA_SET_PARAMS: &[&str] = &[
    "uid",
    "bucket",
    "enabled",
    "check-on-raw",
    "max-size",
    "max-size-kb",
    "max-objects",
];

/// Builds the request of a user-level quota operation.
///
/// The quota type always follows the operation, whatever the caller set.
fn user_quota_request(
    client: AdminClient,
    method: Method,
    mut quota: QuotaSpec,
    quota_type: QuotaType,
    fields: &[&'static str],
) -> Result<AdminRequest, ValidationErr> {
    if quota.uid.is_empty() {
        return Err(ValidationErr::MissingUserId);
    }
    quota.quota_type = Some(quota_type);

    let mut query_params = ParamSet::new();
    query_params.insert_flag(QUOTA_FLAG);
    query_params.extend(quota.to_params(&ParamSelection::new(fields)));

    Ok(AdminRequest::builder()
        .client(client)
        .method(method)
        .path(USER_PATH)
        .query_params(query_params)
        .build())
}

/// Argument builder for reading the quota applied to a user as a whole
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetUserQuota {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    quota: QuotaSpec,
}

impl AdminApi for GetUserQuota {
    type AdminResponse = GetUserQuotaResponse;
}

/// Builder type for GetUserQuota
pub type GetUserQuotaBldr = GetUserQuotaBuilder<((AdminClient,), (QuotaSpec,))>;

impl ToAdminRequest for GetUserQuota {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        user_quota_request(
            self.client,
            Method::GET,
            self.quota,
            QuotaType::User,
            QUOTA_LOOKUP_PARAMS,
        )
    }
}

/// Argument builder for setting the quota applied to a user as a whole
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetUserQuota {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    quota: QuotaSpec,
}

impl AdminApi for SetUserQuota {
    type AdminResponse = SetUserQuotaResponse;
}

/// Builder type for SetUserQuota
pub type SetUserQuotaBldr = SetUserQuotaBuilder<((AdminClient,), (QuotaSpec,))>;

impl ToAdminRequest for SetUserQuota {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        user_quota_request(
            self.client,
            Method::PUT,
            self.quota,
            QuotaType::User,
            QUOTA_SET_PARAMS,
        )
    }
}

/// Argument builder for reading the per-bucket quota a user's buckets default to
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetBucketQuota {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    quota: QuotaSpec,
}

impl AdminApi for GetBucketQuota {
    type AdminResponse = GetBucketQuotaResponse;
}

/// Builder type for GetBucketQuota
pub type GetBucketQuotaBldr = GetBucketQuotaBuilder<((AdminClient,), (QuotaSpec,))>;

impl ToAdminRequest for GetBucketQuota {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        user_quota_request(
            self.client,
            Method::GET,
            self.quota,
            QuotaType::Bucket,
            QUOTA_LOOKUP_PARAMS,
        )
    }
}

/// Argument builder for setting the per-bucket quota a user's buckets default to
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetBucketQuota {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    quota: QuotaSpec,
}

impl AdminApi for SetBucketQuota {
    type AdminResponse = SetBucketQuotaResponse;
}

/// Builder type for SetBucketQuota
pub type SetBucketQuotaBldr = SetBucketQuotaBuilder<((AdminClient,), (QuotaSpec,))>;

impl ToAdminRequest for SetBucketQuota {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        user_quota_request(
            self.client,
            Method::PUT,
            self.quota,
            QuotaType::Bucket,
            QUOTA_SET_PARAMS,
        )
    }
}

/// Argument builder for setting the quota of one specific bucket
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetIndividualBucketQuota {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    quota: QuotaSpec,
}

impl AdminApi for SetIndividualBucketQuota {
    type AdminResponse = SetIndividualBucketQuotaResponse;
}

/// Builder type for SetIndividualBucketQuota
pub type SetIndividualBucketQuotaBldr =
    SetIndividualBucketQuotaBuilder<((AdminClient,), (QuotaSpec,))>;

impl ToAdminRequest for SetIndividualBucketQuota {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        if self.quota.uid.is_empty() {
            return Err(ValidationErr::MissingUserId);
        }
        if self.quota.bucket.is_empty() {
            return Err(ValidationErr::MissingBucketName);
        }

        let mut query_params = ParamSet::new();
        query_params.insert_flag(QUOTA_FLAG);
        query_params.extend(
            self.quota
                .to_params(&ParamSelection::new(BUCKET_QUOTA_SET_PARAMS)),
        );

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path(BUCKET_PATH)
            .query_params(query_params)
            .build())
    }
}
