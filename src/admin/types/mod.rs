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

//! Core types for admin operations: resource records and the request traits

mod account;
mod bucket;
mod quota;
mod request;
mod user;

pub use account::Account;
pub use bucket::{Bucket, BucketUsage, BucketUsageStats};
pub use quota::{QuotaSpec, QuotaType};
pub use request::{AdminApi, AdminRequest, FromAdminResponse, ToAdminRequest};
pub use user::{SubuserSpec, SwiftKeySpec, User, UserCapSpec, UserKeySpec, UserStat};
