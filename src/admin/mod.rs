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

//! Client for the RADOS Gateway admin operations API

pub mod auth;
pub mod builders;
pub mod client;
pub mod error;
pub mod error_response;
pub mod http;
pub mod params;
pub mod response;
pub mod types;

pub use client::{AdminClient, AdminClientBuilder};
