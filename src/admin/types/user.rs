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

/// S3 key pair of a user
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserKeySpec {
    pub user: String,
    pub access_key: String,
    pub secret_key: String,
}

/// Swift secret of a user or subuser
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwiftKeySpec {
    pub user: String,
    pub secret_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubuserSpec {
    pub id: String,
    pub permissions: String,
}

/// Administrative capability, e.g. `users=read`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCapSpec {
    #[serde(rename = "type")]
    pub cap_type: String,
    pub perm: String,
}

/// Storage usage, returned when stats are requested
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStat {
    pub size: Option<u64>,
    pub size_actual: Option<u64>,
    pub size_utilized: Option<u64>,
    pub size_kb: Option<u64>,
    pub size_kb_actual: Option<u64>,
    pub size_kb_utilized: Option<u64>,
    pub num_objects: Option<u64>,
}

/// User of the object store, as sent to and returned by `/user`
///
/// Fields without a JSON counterpart are request-only switches (key
/// generation, purge on removal, stats).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: String,
    pub tenant: String,
    pub display_name: String,
    pub email: String,
    pub suspended: Option<i64>,
    pub max_buckets: Option<i64>,
    pub subusers: Vec<SubuserSpec>,
    pub keys: Vec<UserKeySpec>,
    pub swift_keys: Vec<SwiftKeySpec>,
    pub caps: Vec<UserCapSpec>,
    pub op_mask: String,
    pub default_placement: String,
    pub default_storage_class: String,
    pub placement_tags: Vec<String>,
    pub bucket_quota: QuotaSpec,
    pub user_quota: QuotaSpec,
    #[serde(rename = "type")]
    pub user_type: String,
    pub account_id: String,
    pub stats: Option<UserStat>,

    #[serde(skip)]
    pub key_type: String,
    #[serde(skip)]
    pub access_key: String,
    #[serde(skip)]
    pub secret_key: String,
    #[serde(skip)]
    pub user_caps: String,
    #[serde(skip)]
    pub generate_key: Option<bool>,
    #[serde(skip)]
    pub purge_data: Option<bool>,
    #[serde(skip)]
    pub generate_stat: Option<bool>,
}

impl User {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl ToParams for User {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            wire: "uid",
            value: |u| non_empty(&u.id),
        },
        FieldSpec {
            wire: "display-name",
            value: |u| non_empty(&u.display_name),
        },
        FieldSpec {
            wire: "email",
            value: |u| non_empty(&u.email),
        },
        FieldSpec {
            wire: "key-type",
            value: |u| non_empty(&u.key_type),
        },
        FieldSpec {
            wire: "access-key",
            value: |u| non_empty(&u.access_key),
        },
        FieldSpec {
            wire: "secret-key",
            value: |u| non_empty(&u.secret_key),
        },
        FieldSpec {
            wire: "user-caps",
            value: |u| non_empty(&u.user_caps),
        },
        FieldSpec {
            wire: "generate-key",
            value: |u| present(&u.generate_key),
        },
        FieldSpec {
            wire: "max-buckets",
            value: |u| present(&u.max_buckets),
        },
        FieldSpec {
            wire: "suspended",
            value: |u| present(&u.suspended),
        },
        FieldSpec {
            wire: "op-mask",
            value: |u| non_empty(&u.op_mask),
        },
        FieldSpec {
            wire: "account-id",
            value: |u| non_empty(&u.account_id),
        },
        FieldSpec {
            wire: "purge-data",
            value: |u| present(&u.purge_data),
        },
        FieldSpec {
            wire: "stats",
            value: |u| present(&u.generate_stat),
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::params::ParamSelection;

    #[test]
    fn test_user_request_only_fields_are_encoded() {
        let user = User {
            id: "alice".into(),
            display_name: "Alice".into(),
            generate_key: Some(false),
            access_key: "AK".into(),
            secret_key: "SK".into(),
            ..Default::default()
        };
        let params = user.to_params(&ParamSelection::new(&[
            "uid",
            "display-name",
            "access-key",
            "secret-key",
            "generate-key",
            "max-buckets",
        ]));
        assert_eq!(
            params.to_query_string(),
            "uid=alice&display-name=Alice&access-key=AK&secret-key=SK&generate-key=false"
        );
    }

    #[test]
    fn test_user_decode() {
        let json = r#"{
            "user_id": "alice",
            "display_name": "Alice",
            "email": "",
            "suspended": 0,
            "max_buckets": 1000,
            "subusers": [],
            "keys": [{"user": "alice", "access_key": "AK", "secret_key": "SK"}],
            "swift_keys": [],
            "caps": [{"type": "users", "perm": "read"}],
            "op_mask": "read, write, delete",
            "default_placement": "",
            "default_storage_class": "",
            "placement_tags": [],
            "bucket_quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
            "user_quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
            "temp_url_keys": [],
            "type": "rgw",
            "mfa_ids": []
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "alice");
        assert_eq!(user.suspended, Some(0));
        assert_eq!(user.keys[0].access_key, "AK");
        assert_eq!(user.caps[0].cap_type, "users");
        assert_eq!(user.user_type, "rgw");
        assert!(user.stats.is_none());
        assert!(user.access_key.is_empty());
    }
}
