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

//! Builders for account operations
//!
//! Admin API: `GET|POST|DELETE /admin/account`

use crate::admin::client::AdminClient;
use crate::admin::error::ValidationErr;
use crate::admin::params::{ParamSelection, ToParams};
use crate::admin::response::{
    CreateAccountResponse, GetAccountResponse, ModifyAccountResponse, RemoveAccountResponse,
};
use crate::admin::types::{Account, AdminApi, AdminRequest, ToAdminRequest};
use http::Method;
use typed_builder::TypedBuilder;

const ACCOUNT_PATH: &str = "/account";

/// Parameters identifying an account for lookup
pub const ACCOUNT_LOOKUP_PARAMS: &[&str] = &["id", "tenant", "name"];

/// Parameters sent when creating or modifying an account
pub const ACCOUNT_MUTABLE_PARAMS: &[&str] = &[
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

fn require_account_id(account: &Account) -> Result<(), ValidationErr> {
    if account.id.is_empty() {
        return Err(ValidationErr::MissingAccountId);
    }
    Ok(())
}

/// Argument builder for the get account operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetAccount {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    account: Account,
}

impl AdminApi for GetAccount {
    type AdminResponse = GetAccountResponse;
}

/// Builder type for GetAccount
pub type GetAccountBldr = GetAccountBuilder<((AdminClient,), (Account,))>;

impl ToAdminRequest for GetAccount {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        require_account_id(&self.account)?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(ACCOUNT_PATH)
            .query_params(
                self.account
                    .to_params(&ParamSelection::new(ACCOUNT_LOOKUP_PARAMS)),
            )
            .build())
    }
}

/// Argument builder for the create account operation
///
/// The id is optional; the gateway generates one when it is left empty.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateAccount {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    account: Account,
}

impl AdminApi for CreateAccount {
    type AdminResponse = CreateAccountResponse;
}

/// Builder type for CreateAccount
pub type CreateAccountBldr = CreateAccountBuilder<((AdminClient,), (Account,))>;

impl ToAdminRequest for CreateAccount {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .path(ACCOUNT_PATH)
            .query_params(
                self.account
                    .to_params(&ParamSelection::new(ACCOUNT_MUTABLE_PARAMS)),
            )
            .build())
    }
}

/// Argument builder for the modify account operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct ModifyAccount {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    account: Account,
}

impl AdminApi for ModifyAccount {
    type AdminResponse = ModifyAccountResponse;
}

/// Builder type for ModifyAccount
pub type ModifyAccountBldr = ModifyAccountBuilder<((AdminClient,), (Account,))>;

impl ToAdminRequest for ModifyAccount {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        require_account_id(&self.account)?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .path(ACCOUNT_PATH)
            .query_params(
                self.account
                    .to_params(&ParamSelection::new(ACCOUNT_MUTABLE_PARAMS)),
            )
            .build())
    }
}

/// Argument builder for the remove account operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct RemoveAccount {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    account: Account,
}

impl AdminApi for RemoveAccount {
    type AdminResponse = RemoveAccountResponse;
}

/// Builder type for RemoveAccount
pub type RemoveAccountBldr = RemoveAccountBuilder<((AdminClient,), (Account,))>;

impl ToAdminRequest for RemoveAccount {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        require_account_id(&self.account)?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path(ACCOUNT_PATH)
            .query_params(self.account.to_params(&ParamSelection::new(&["id"])))
            .build())
    }
}
