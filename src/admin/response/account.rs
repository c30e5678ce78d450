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

//! Response types for account operations

use crate::admin::types::{Account, AdminRequest};
use crate::{impl_from_admin_response, impl_from_admin_response_decoded, impl_has_admin_fields};
use bytes::Bytes;
use http::HeaderMap;

macro_rules! account_response {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug)]
            pub struct $name {
                request: AdminRequest,
                headers: HeaderMap,
                body: Bytes,
                account: Account,
            }

            impl $name {
                /// The account as returned by the gateway
                pub fn account(&self) -> &Account {
                    &self.account
                }

                pub fn into_account(self) -> Account {
                    self.account
                }
            }

            impl_has_admin_fields!($name);
            impl_from_admin_response_decoded!($name => account: Account);
        )*
    };
}

account_response!(
    /// Response of the get account operation
    GetAccountResponse,
    /// Response of the create account operation, carrying the stored account
    /// including a generated id
    CreateAccountResponse,
    /// Response of the modify account operation
    ModifyAccountResponse,
);

/// Response of the remove account operation
///
/// Success is the only information; the body is not interpreted.
#[derive(Clone, Debug)]
pub struct RemoveAccountResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(RemoveAccountResponse);
impl_from_admin_response!(RemoveAccountResponse);
