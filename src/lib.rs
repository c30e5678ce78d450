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

//! # RADOS Gateway admin client (`rgw-admin`)
//!
//! This crate provides a strongly-typed, async interface to the admin
//! operations API of the Ceph RADOS Gateway: accounts, users, quotas and
//! buckets.
//!
//! Each operation has a request builder (e.g. [`admin::builders::GetAccount`],
//! [`admin::builders::CreateUser`]) returned by a method on
//! [`admin::AdminClient`]. All builders implement [`admin::types::AdminApi`],
//! which provides the async [`send`](crate::admin::types::AdminApi::send)
//! method returning a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use rgw_admin::admin::AdminClient;
//! use rgw_admin::admin::auth::BearerAuth;
//! use rgw_admin::admin::types::{Account, AdminApi};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AdminClient::builder("http://localhost:7480".parse().unwrap())
//!         .auth(BearerAuth::new("token"))
//!         .build()
//!         .unwrap();
//!
//!     let created = client
//!         .create_account(Account {
//!             name: "svc".into(),
//!             email: "svc@example.com".into(),
//!             ..Default::default()
//!         })
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("account id: {}", created.account().id);
//! }
//! ```
//!
//! ## Design
//! - Records declare a static table mapping fields to query parameter names
//!   ([`admin::params::ToParams`]); each operation selects the fields it sends
//! - Every request is a single round trip; no retries, no caching
//! - Errors are split into validation, transport, gateway status and decode
//!   failures ([`admin::error::Error`])

#![allow(clippy::result_large_err)]
pub mod admin;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
