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

//! Client methods for user operations

use crate::admin::builders::{
    CreateUser, CreateUserBldr, GetUser, GetUserBldr, ListUsers, ListUsersBldr, ModifyUser,
    ModifyUserBldr, RemoveUser, RemoveUserBldr,
};
use crate::admin::client::AdminClient;
use crate::admin::types::User;

impl AdminClient {
    /// Retrieves a user by `id`, or by `access_key` when the id is empty.
    pub fn get_user(&self, user: User) -> GetUserBldr {
        GetUser::builder().client(self.clone()).user(user)
    }

    /// Creates a user. Both `id` and `display_name` are required.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_admin::admin::client::AdminClient;
    /// use rgw_admin::admin::types::{AdminApi, User};
    ///
    /// # async fn example(client: AdminClient) -> Result<(), rgw_admin::admin::error::Error> {
    /// let user = User {
    ///     id: "alice".into(),
    ///     display_name: "Alice".into(),
    ///     max_buckets: Some(10),
    ///     ..Default::default()
    /// };
    /// let created = client.create_user(user).build().send().await?;
    /// for key in &created.user().keys {
    ///     println!("access key {}", key.access_key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_user(&self, user: User) -> CreateUserBldr {
        CreateUser::builder().client(self.clone()).user(user)
    }

    pub fn modify_user(&self, user: User) -> ModifyUserBldr {
        ModifyUser::builder().client(self.clone()).user(user)
    }

    pub fn remove_user(&self, user: User) -> RemoveUserBldr {
        RemoveUser::builder().client(self.clone()).user(user)
    }

    /// Lists the ids of all users.
    pub fn list_users(&self) -> ListUsersBldr {
        ListUsers::builder().client(self.clone())
    }
}
