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

use crate::admin::params::{FieldSpec, ToParams, non_empty, present};
use crate::admin::types::QuotaSpec;
use serde::{Deserialize, Serialize};

/// Usage counters of one bucket category
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketUsageStats {
    pub size: Option<u64>,
    pub size_actual: Option<u64>,
    pub size_utilized: Option<u64>,
    pub size_kb: Option<u64>,
    pub size_kb_actual: Option<u64>,
    pub size_kb_utilized: Option<u64>,
    pub num_objects: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketUsage {
    #[serde(rename = "rgw.main")]
    pub rgw_main: BucketUsageStats,
    #[serde(rename = "rgw.multimeta")]
    pub rgw_multimeta: BucketUsageStats,
}

/// Bucket as returned by `/bucket` when stats are requested
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bucket {
    pub bucket: String,
    pub num_shards: Option<u64>,
    pub tenant: String,
    pub zonegroup: String,
    pub placement_rule: String,
    pub id: String,
    pub marker: String,
    pub index_type: String,
    pub owner: String,
    pub ver: String,
    pub master_ver: String,
    pub mtime: String,
    pub creation_time: String,
    pub max_marker: String,
    pub usage: BucketUsage,
    pub bucket_quota: QuotaSpec,

    #[serde(skip)]
    pub purge_objects: Option<bool>,
    #[serde(skip)]
    pub generate_stat: Option<bool>,
}

impl Bucket {
    pub fn with_name(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }
}

impl ToParams for Bucket {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            wire: "bucket",
            value: |b| non_empty(&b.bucket),
        },
        FieldSpec {
            wire: "owner",
            value: |b| non_empty(&b.owner),
        },
        FieldSpec {
            wire: "purge-objects",
            value: |b| present(&b.purge_objects),
        },
        FieldSpec {
            wire: "stats",
            value: |b| present(&b.generate_stat),
        },
    ];
}
