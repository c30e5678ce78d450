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

use http::Method;
use rgw_admin::admin::error::{Error, UNMARSHAL_ERROR, ValidationErr};
use rgw_admin::admin::error_response::RgwErrorCode;
use rgw_admin::admin::response::{GetAccountResponse, HasAdminFields};
use rgw_admin::admin::types::{Account, AdminApi, QuotaSpec};
use rgw_admin_common::MockGateway;

const ACCOUNT_JSON: &str = r#"{
    "id": "RGW11111111111111111",
    "tenant": "",
    "name": "svc",
    "email": "svc@example.com",
    "quota": {"enabled": true, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": 500},
    "bucket_quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1},
    "max_users": 1000,
    "max_roles": 1000,
    "max_groups": 1000,
    "max_buckets": 1000,
    "max_access_keys": 4
}"#;

#[tokio::test]
async fn get_account() {
    let gw = MockGateway::start().await;
    gw.respond(200, ACCOUNT_JSON);

    let resp: GetAccountResponse = gw
        .client()
        .get_account(Account::with_id("RGW11111111111111111"))
        .build()
        .send()
        .await
        .unwrap();

    let req = gw.single_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/admin/account");
    assert_eq!(req.query, "id=RGW11111111111111111");

    let account = resp.account();
    assert_eq!(account.id, "RGW11111111111111111");
    assert_eq!(account.email, "svc@example.com");
    assert_eq!(account.quota.enabled, Some(true));
    assert_eq!(account.quota.max_objects, Some(500));
    assert_eq!(account.bucket_quota.max_size, Some(-1));
    assert_eq!(account.max_access_keys, Some(4));
    assert_eq!(resp.request().path, "/account");
}

#[tokio::test]
async fn create_account_omits_unset_fields() {
    let gw = MockGateway::start().await;
    gw.respond(200, ACCOUNT_JSON);

    let account = Account {
        name: "svc".into(),
        email: "svc@example.com".into(),
        max_buckets: Some(0),
        ..Default::default()
    };
    let created = gw
        .client()
        .create_account(account)
        .build()
        .send()
        .await
        .unwrap()
        .into_account();

    let req = gw.single_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.param_keys(), vec!["name", "email", "max-buckets"]);
    assert_eq!(req.param("email").as_deref(), Some("svc@example.com"));
    assert_eq!(req.param("max-buckets").as_deref(), Some("0"));
    assert_eq!(req.param("id"), None);
    assert_eq!(req.param("max-users"), None);

    assert_eq!(created.id, "RGW11111111111111111");
}

#[tokio::test]
async fn modify_account_sends_quota_as_json() {
    let gw = MockGateway::start().await;
    gw.respond(200, ACCOUNT_JSON);

    let account = Account {
        id: "RGW11111111111111111".into(),
        quota: QuotaSpec {
            enabled: Some(true),
            max_objects: Some(500),
            ..Default::default()
        },
        max_access_keys: Some(4),
        ..Default::default()
    };
    gw.client()
        .modify_account(account)
        .build()
        .send()
        .await
        .unwrap();

    let req = gw.single_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.param_keys(), vec!["id", "quota", "max-access-keys"]);
    assert_eq!(
        req.param("quota").as_deref(),
        Some(r#"{"enabled":true,"max_objects":500}"#)
    );
}

#[tokio::test]
async fn remove_account() {
    let gw = MockGateway::start().await;

    let account = Account {
        id: "RGW11111111111111111".into(),
        name: "svc".into(),
        ..Default::default()
    };
    let resp = gw
        .client()
        .remove_account(account)
        .build()
        .send()
        .await
        .unwrap();

    let req = gw.single_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.query, "id=RGW11111111111111111");
    assert!(resp.body().is_empty());
}

#[tokio::test]
async fn missing_id_sends_nothing() {
    let gw = MockGateway::start().await;
    let client = gw.client();

    let err = client
        .get_account(Account::default())
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingAccountId)
    ));

    let err = client
        .remove_account(Account::default())
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "missing account ID");

    let err = client
        .modify_account(Account {
            email: "svc@example.com".into(),
            ..Default::default()
        })
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingAccountId)
    ));

    assert_eq!(gw.request_count(), 0);
}

#[tokio::test]
async fn not_found_keeps_status_and_body() {
    let gw = MockGateway::start().await;
    gw.respond(404, r#"{"Code":"NoSuchAccount","RequestId":"tx1","HostId":"z1"}"#);

    let err = gw
        .client()
        .get_account(Account::with_id("RGW00000000000000000"))
        .build()
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    match err {
        Error::Server(e) => {
            assert_eq!(
                e.body(),
                r#"{"Code":"NoSuchAccount","RequestId":"tx1","HostId":"z1"}"#
            );
            let doc = e.error_response().unwrap();
            assert_eq!(doc.code, RgwErrorCode::NoSuchAccount);
            assert_eq!(doc.request_id, "tx1");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body() {
    let gw = MockGateway::start().await;
    gw.respond(200, "<html>proxy error</html>");
    gw.respond(200, "");

    let client = gw.client();
    let err = client
        .get_account(Account::with_id("RGW11111111111111111"))
        .build()
        .send()
        .await
        .unwrap_err();
    match &err {
        Error::Decode { body, .. } => assert_eq!(body, "<html>proxy error</html>"),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().starts_with(UNMARSHAL_ERROR));

    let err = client
        .create_account(Account::default())
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));

    assert_eq!(gw.request_count(), 2);
}

#[tokio::test]
async fn echoed_account_decodes_equal() {
    let gw = MockGateway::start().await;

    let account = Account {
        id: "RGW22222222222222222".into(),
        tenant: "t1".into(),
        name: "echo".into(),
        email: "echo@example.com".into(),
        bucket_quota: QuotaSpec {
            max_size: Some(1 << 30),
            ..Default::default()
        },
        max_users: Some(0),
        max_roles: Some(-1),
        ..Default::default()
    };
    gw.respond(200, serde_json::to_string(&account).unwrap());

    let echoed = gw
        .client()
        .modify_account(account.clone())
        .build()
        .send()
        .await
        .unwrap()
        .into_account();

    assert_eq!(echoed, account);
}
