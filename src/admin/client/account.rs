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

//! Client methods for account operations

use crate::admin::builders::{
    CreateAccount, CreateAccountBldr, GetAccount, GetAccountBldr, ModifyAccount,
    ModifyAccountBldr, RemoveAccount, RemoveAccountBldr,
};
use crate::admin::client::AdminClient;
use crate::admin::types::Account;

impl AdminClient {
    /// Retrieves an account by id.
    ///
    /// `tenant` and `name` are sent along when set; every other field is ignored.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_admin::admin::client::AdminClient;
    /// use rgw_admin::admin::types::{Account, AdminApi};
    ///
    /// # async fn example(client: AdminClient) -> Result<(), rgw_admin::admin::error::Error> {
    /// let account = client
    ///     .get_account(Account::with_id("RGW11111111111111111"))
    ///     .build()
    ///     .send()
    ///     .await?
    ///     .into_account();
    /// println!("{} <{}>", account.name, account.email);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_account(&self, account: Account) -> GetAccountBldr {
        GetAccount::builder().client(self.clone()).account(account)
    }

    /// Creates an account. The gateway generates the id when it is empty.
    pub fn create_account(&self, account: Account) -> CreateAccountBldr {
        CreateAccount::builder().client(self.clone()).account(account)
    }

    /// Updates an existing account. Unset fields are left unchanged.
    pub fn modify_account(&self, account: Account) -> ModifyAccountBldr {
        ModifyAccount::builder().client(self.clone()).account(account)
    }

    /// Removes an account. Only its id is sent.
    pub fn remove_account(&self, account: Account) -> RemoveAccountBldr {
        RemoveAccount::builder().client(self.clone()).account(account)
    }
}
