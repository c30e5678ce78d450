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

use crate::admin::params::{FieldSpec, ToParams, nested_json, non_empty, present};
use crate::admin::types::QuotaSpec;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use quickcheck::Arbitrary;

/// Account of the object store, as sent to and returned by `/account`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub tenant: String,
    pub name: String,
    pub email: String,
    pub quota: QuotaSpec,
    pub bucket_quota: QuotaSpec,
    pub max_users: Option<i64>,
    pub max_roles: Option<i64>,
    pub max_groups: Option<i64>,
    pub max_buckets: Option<i64>,
    pub max_access_keys: Option<i64>,
}

impl Account {
    /// Account reference carrying only its identifier
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl ToParams for Account {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            wire: "id",
            value: |a| non_empty(&a.id),
        },
        FieldSpec {
            wire: "tenant",
            value: |a| non_empty(&a.tenant),
        },
        FieldSpec {
            wire: "name",
            value: |a| non_empty(&a.name),
        },
        FieldSpec {
            wire: "email",
            value: |a| non_empty(&a.email),
        },
        FieldSpec {
            wire: "quota",
            value: |a| nested_json(&a.quota),
        },
        FieldSpec {
            wire: "bucket-quota",
            value: |a| nested_json(&a.bucket_quota),
        },
        FieldSpec {
            wire: "max-users",
            value: |a| present(&a.max_users),
        },
        FieldSpec {
            wire: "max-roles",
            value: |a| present(&a.max_roles),
        },
        FieldSpec {
            wire: "max-groups",
            value: |a| present(&a.max_groups),
        },
        FieldSpec {
            wire: "max-buckets",
            value: |a| present(&a.max_buckets),
        },
        FieldSpec {
            wire: "max-access-keys",
            value: |a| present(&a.max_access_keys),
        },
    ];
}

#[cfg(test)]
impl Arbitrary for Account {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let quota = |g: &mut quickcheck::Gen| QuotaSpec {
            enabled: Option::<bool>::arbitrary(g),
            max_size: Option::<i64>::arbitrary(g),
            max_objects: Option::<i64>::arbitrary(g),
            ..Default::default()
        };
        Account {
            id: String::arbitrary(g),
            tenant: String::arbitrary(g),
            name: String::arbitrary(g),
            email: String::arbitrary(g),
            quota: quota(g),
            bucket_quota: quota(g),
            max_users: Option::<i64>::arbitrary(g),
            max_roles: Option::<i64>::arbitrary(g),
            max_groups: Option::<i64>::arbitrary(g),
            max_buckets: Option::<i64>::arbitrary(g),
            max_access_keys: Option::<i64>::arbitrary(g),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::params::ParamSelection;

    const ALL: &[&str] = &[
        "id",
        "tenant",
        "name",
        "email",
        "quota",
        "bucket-quota",
        "max-users",
        "max-roles",
        "max-groups",
        "max-buckets",
        "max-access-keys",
    ];

    quickcheck! {
        fn prop_present_fields_are_emitted(account: Account) -> bool {
            let params = account.to_params(&ParamSelection::new(ALL));
            let strings = [
                ("id", &account.id),
                ("tenant", &account.tenant),
                ("name", &account.name),
                ("email", &account.email),
            ];
            let limits = [
                ("max-users", account.max_users),
                ("max-roles", account.max_roles),
                ("max-groups", account.max_groups),
                ("max-buckets", account.max_buckets),
                ("max-access-keys", account.max_access_keys),
            ];
            let emitted = strings.iter().all(|(key, value)| {
                params.get(key) == (!value.is_empty()).then_some(value.as_str())
            }) && limits.iter().all(|(key, value)| {
                params.get(key).map(str::to_owned) == value.map(|v| v.to_string())
            }) && params.contains_key("quota") == !account.quota.is_empty();
            emitted
        }

        fn prop_lookup_selection_is_respected(account: Account) -> bool {
            let params = account.to_params(&ParamSelection::new(&["id", "tenant", "name"]));
            let selected = params.keys().all(|k| ["id", "tenant", "name"].contains(&k));
            selected
        }

        fn prop_encoding_is_idempotent(account: Account) -> bool {
            let selection = ParamSelection::new(ALL);
            account.to_params(&selection) == account.clone().to_params(&selection)
        }

        fn prop_encode_then_echo_decodes_equal(account: Account) -> bool {
            let json = serde_json::to_string(&account).unwrap();
            serde_json::from_str::<Account>(&json).unwrap() == account
        }
    }

    #[test]
    fn test_account_limits_zero_differs_from_unset() {
        let account = Account {
            name: "svc".into(),
            max_users: Some(0),
            max_access_keys: Some(4),
            ..Default::default()
        };
        let params = account.to_params(&ParamSelection::new(ALL));
        assert_eq!(params.get("max-users"), Some("0"));
        assert_eq!(params.get("max-access-keys"), Some("4"));
        assert!(!params.contains_key("max-roles"));
        assert!(!params.contains_key("id"));
    }

    #[test]
    fn test_account_quota_is_one_json_param() {
        let account = Account {
            id: "acct1".into(),
            quota: QuotaSpec {
                enabled: Some(true),
                max_objects: Some(100),
                ..Default::default()
            },
            ..Default::default()
        };
        let params = account.to_params(&ParamSelection::new(ALL));
        assert_eq!(
            params.get("quota"),
            Some(r#"{"enabled":true,"max_objects":100}"#)
        );
        assert!(!params.contains_key("bucket-quota"));
        assert!(!params.contains_key("max-objects"));
    }

    #[test]
    fn test_account_decode() {
        let json = r#"{
            "id": "RGW11111111111111111",
            "tenant": "",
            "name": "svc",
            "email": "a@b.com",
            "quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
            "bucket_quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
            "max_users": 1000,
            "max_roles": 1000,
            "max_groups": 1000,
            "max_buckets": 1000,
            "max_access_keys": 4
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, "RGW11111111111111111");
        assert_eq!(account.email, "a@b.com");
        assert_eq!(account.max_access_keys, Some(4));
        assert_eq!(account.quota.max_objects, Some(-1));
    }

    #[test]
    fn test_account_decode_missing_limits() {
        let account: Account = serde_json::from_str(r#"{"id":"acct1"}"#).unwrap();
        assert_eq!(account, Account::with_id("acct1"));
    }
}
