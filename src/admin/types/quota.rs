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

use crate::admin::params::{FieldSpec, NestedParam, ToParams, non_empty, present};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope a user-level quota operation applies to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuotaType {
    #[default]
    User,
    Bucket,
}

impl QuotaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotaType::User => "user",
            QuotaType::Bucket => "bucket",
        }
    }
}

impl fmt::Display for QuotaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quota limits of a user, a bucket or an account.
///
/// Negative sizes and counts mean "unlimited" on the gateway side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaSpec {
    #[serde(rename = "user_id", skip_serializing_if = "String::is_empty")]
    pub uid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bucket: String,
    #[serde(skip)]
    pub quota_type: Option<QuotaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_on_raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_kb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_objects: Option<i64>,
}

impl QuotaSpec {
    /// Returns true when no limit or flag is set.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none()
            && self.check_on_raw.is_none()
            && self.max_size.is_none()
            && self.max_size_kb.is_none()
            && self.max_objects.is_none()
    }
}

impl NestedParam for QuotaSpec {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl ToParams for QuotaSpec {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            wire: "uid",
            value: |q| non_empty(&q.uid),
        },
        FieldSpec {
            wire: "bucket",
            value: |q| non_empty(&q.bucket),
        },
        FieldSpec {
            wire: "quota-type",
            value: |q| present(&q.quota_type),
        },
        FieldSpec {
            wire: "enabled",
            value: |q| present(&q.enabled),
        },
        FieldSpec {
            wire: "check-on-raw",
            value: |q| present(&q.check_on_raw),
        },
        FieldSpec {
            wire: "max-size",
            value: |q| present(&q.max_size),
        },
        FieldSpec {
            wire: "max-size-kb",
            value: |q| present(&q.max_size_kb),
        },
        FieldSpec {
            wire: "max-objects",
            value: |q| present(&q.max_objects),
        },
    ];
}
