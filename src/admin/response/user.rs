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

//! Response types for user operations

use crate::admin::types::{AdminRequest, User};
use crate::{impl_from_admin_response, impl_from_admin_response_decoded, impl_has_admin_fields};
use bytes::Bytes;
use http::HeaderMap;

macro_rules! user_response {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug)]
            pub struct $name {
                request: AdminRequest,
                headers: HeaderMap,
                body: Bytes,
                user: User,
            }

            impl $name {
                pub fn user(&self) -> &User {
                    &self.user
                }

                pub fn into_user(self) -> User {
                    self.user
                }
            }

            impl_has_admin_fields!($name);
            impl_from_admin_response_decoded!($name => user: User);
        )*
    };
}

user_response!(
    /// Response of the get user operation
    GetUserResponse,
    /// Response of the create user operation, including generated keys
    CreateUserResponse,
    /// Response of the modify user operation
    ModifyUserResponse,
);

/// Response of the remove user operation
#[derive(Clone, Debug)]
pub struct RemoveUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(RemoveUserResponse);
impl_from_admin_response!(RemoveUserResponse);

/// Response of the list users operation
#[derive(Clone, Debug)]
pub struct ListUsersResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    users: Vec<String>,
}

impl ListUsersResponse {
    /// User ids, tenant-qualified as `tenant$uid` where applicable
    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn into_users(self) -> Vec<String> {
        self.users
    }
}

impl_has_admin_fields!(ListUsersResponse);
impl_from_admin_response_decoded!(ListUsersResponse => users: Vec<String>);
