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
use rgw_admin::admin::error::{Error, ValidationErr};
use rgw_admin::admin::error_response::RgwErrorCode;
use rgw_admin::admin::types::{AdminApi, Bucket, BucketUsageStats};
use rgw_admin_common::MockGateway;

const BUCKET_JSON: &str = r#"{
    "bucket": "photos",
    "num_shards": 11,
    "tenant": "",
    "zonegroup": "3f1e6a47-zg",
    "placement_rule": "default-placement",
    "explicit_placement": {"data_pool": "", "data_extra_pool": "", "index_pool": ""},
    "id": "c1a7b2e4.4137.1",
    "marker": "c1a7b2e4.4137.1",
    "index_type": "Normal",
    "owner": "alice",
    "ver": "0#1,1#3",
    "master_ver": "0#0,1#0",
    "mtime": "2025-03-01T10:00:00.000000Z",
    "creation_time": "2025-03-01T10:00:00.000000Z",
    "max_marker": "0#,1#",
    "usage": {
        "rgw.main": {"size": 2048, "size_actual": 8192, "size_utilized": 2048, "size_kb": 2, "size_kb_actual": 8, "size_kb_utilized": 2, "num_objects": 2}
    },
    "bucket_quota": {"enabled": false, "check_on_raw": false, "max_size": -1, "max_size_kb": 0, "max_objects": -1}
}"#;

#[tokio::test]
async fn list_all_buckets() {
    let gw = MockGateway::start().await;
    gw.respond(200, r#"["photos","logs"]"#);

    let names = gw
        .client()
        .list_buckets()
        .build()
        .send()
        .await
        .unwrap()
        .into_buckets();

    let req = gw.single_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/admin/bucket");
    assert!(req.query.is_empty());
    assert_eq!(names, vec!["photos".to_string(), "logs".to_string()]);
}

#[tokio::test]
async fn list_buckets_of_owner() {
    let gw = MockGateway::start().await;
    gw.respond(200, r#"["photos"]"#);

    let resp = gw
        .client()
        .list_buckets()
        .owner("alice")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(gw.single_request().query, "uid=alice");
    assert_eq!(resp.buckets(), ["photos"]);
}

#[tokio::test]
async fn get_bucket_info() {
    let gw = MockGateway::start().await;
    gw.respond(200, BUCKET_JSON);

    let bucket = gw
        .client()
        .get_bucket_info(Bucket {
            generate_stat: Some(true),
            ..Bucket::with_name("photos")
        })
        .build()
        .send()
        .await
        .unwrap()
        .into_bucket();

    let req = gw.single_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.query, "bucket=photos&stats=true");

    assert_eq!(bucket.owner, "alice");
    assert_eq!(bucket.num_shards, Some(11));
    assert_eq!(bucket.usage.rgw_main.num_objects, Some(2));
    assert_eq!(bucket.usage.rgw_multimeta, BucketUsageStats::default());
    assert_eq!(bucket.bucket_quota.max_objects, Some(-1));
}

#[tokio::test]
async fn remove_bucket_with_objects() {
    let gw = MockGateway::start().await;
    gw.respond(409, r#"{"Code":"BucketNotEmpty"}"#);

    let client = gw.client();
    let err = client
        .remove_bucket(Bucket::with_name("photos"))
        .build()
        .send()
        .await
        .unwrap_err();
    match err {
        Error::Server(e) => {
            assert_eq!(e.status(), 409);
            assert_eq!(
                e.error_response().unwrap().code,
                RgwErrorCode::BucketNotEmpty
            );
        }
        other => panic!("unexpected error {other:?}"),
    }

    client
        .remove_bucket(Bucket {
            purge_objects: Some(true),
            ..Bucket::with_name("photos")
        })
        .build()
        .send()
        .await
        .unwrap();

    let requests = gw.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].query, "bucket=photos");
    assert_eq!(requests[1].query, "bucket=photos&purge-objects=true");
}

#[tokio::test]
async fn bucket_name_required() {
    let gw = MockGateway::start().await;

    let err = gw
        .client()
        .get_bucket_info(Bucket::default())
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingBucketName)
    ));
    assert_eq!(gw.request_count(), 0);
}
