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

//! Builders for user operations
//!
//! Admin API: `GET|PUT|POST|DELETE /admin/user`, `GET /admin/metadata/user`

use crate::admin::client::AdminClient;
use crate::admin::error::ValidationErr;
use crate::admin::params::{ParamSelection, ToParams};
use crate::admin::response::{
    CreateUserResponse, GetUserResponse, ListUsersResponse, ModifyUserResponse,
    RemoveUserResponse,
};
use crate::admin::types::{AdminApi, AdminRequest, ToAdminRequest, User};
use http::Method;
use typed_builder::TypedBuilder;

const USER_PATH: &str = "/user";
const USER_METADATA_PATH: &str = "/metadata/user";

/// Parameters identifying a user for lookup
pub const USER_LOOKUP_PARAMS: &[&str] = &["uid", "access-key", "stats"];

/// Parameters sent when creating a user
pub const USER_CREATE_PARAMS: &[&str] = &[
    "uid",
    "display-name",
    "email",
    "key-type",
    "access-key",
    "secret-key",
    "user-caps",
    "generate-key",
    "max-buckets",
    "suspended",
    "op-mask",
    "account-id",
];

/// Parameters sent when modifying a user
pub const USER_MODIFY_PARAMS: &[&str] = &[
    "uid",
    "display-name",
    "email",
    "key-type",
    "access-key",
    "secret-key",
    "generate-key",
    "max-buckets",
    "suspended",
    "op-mask",
];

fn require_user_id(user: &User) -> Result<(), ValidationErr> {
    if user.id.is_empty() {
        return Err(ValidationErr::MissingUserId);
    }
    Ok(())
}

/// Argument builder for the get user operation
///
/// The user is looked up by `id` or, when that is empty, by `access_key`.
/// Set `generate_stat` to have storage stats included.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetUser {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    user: User,
}

impl AdminApi for GetUser {
    type AdminResponse = GetUserResponse;
}

/// Builder type for GetUser
pub type GetUserBldr = GetUserBuilder<((AdminClient,), (User,))>;

impl ToAdminRequest for GetUser {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        if self.user.id.is_empty() && self.user.access_key.is_empty() {
            return Err(ValidationErr::MissingUserIdOrAccessKey);
        }

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(USER_PATH)
            .query_params(self.user.to_params(&ParamSelection::new(USER_LOOKUP_PARAMS)))
            .build())
    }
}

/// Argument builder for the create user operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateUser {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    user: User,
}

impl AdminApi for CreateUser {
    type AdminResponse = CreateUserResponse;
}

/// Builder type for CreateUser
pub type CreateUserBldr = CreateUserBuilder<((AdminClient,), (User,))>;

impl ToAdminRequest for CreateUser {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        require_user_id(&self.user)?;
        if self.user.display_name.is_empty() {
            return Err(ValidationErr::MissingUserDisplayName);
        }

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path(USER_PATH)
            .query_params(self.user.to_params(&ParamSelection::new(USER_CREATE_PARAMS)))
            .build())
    }
}

/// Argument builder for the modify user operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct ModifyUser {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    user: User,
}

impl AdminApi for ModifyUser {
    type AdminResponse = ModifyUserResponse;
}

/// Builder type for ModifyUser
pub type ModifyUserBldr = ModifyUserBuilder<((AdminClient,), (User,))>;

impl ToAdminRequest for ModifyUser {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        require_user_id(&self.user)?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .path(USER_PATH)
            .query_params(self.user.to_params(&ParamSelection::new(USER_MODIFY_PARAMS)))
            .build())
    }
}

/// Argument builder for the remove user operation
///
/// Set `purge_data` on the user to delete its buckets and objects as well.
#[derive(Clone, Debug, TypedBuilder)]
pub struct RemoveUser {
    #[builder(!default)]
    client: AdminClient,
    #[builder(!default)]
    user: User,
}

impl AdminApi for RemoveUser {
    type AdminResponse = RemoveUserResponse;
}

/// Builder type for RemoveUser
pub type RemoveUserBldr = RemoveUserBuilder<((AdminClient,), (User,))>;

impl ToAdminRequest for RemoveUser {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        require_user_id(&self.user)?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path(USER_PATH)
            .query_params(
                self.user
                    .to_params(&ParamSelection::new(&["uid", "purge-data"])),
            )
            .build())
    }
}

/// Argument builder for the list users operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListUsers {
    #[builder(!default)]
    client: AdminClient,
}

impl AdminApi for ListUsers {
    type AdminResponse = ListUsersResponse;
}

/// Builder type for ListUsers
pub type ListUsersBldr = ListUsersBuilder<((AdminClient,),)>;

impl ToAdminRequest for ListUsers {
    fn to_admin_request(self) -> Result<AdminRequest, ValidationErr> {
        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path(USER_METADATA_PATH)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::builders::test_client;

    #[test]
    fn test_get_user_by_access_key() {
        let user = User {
            access_key: "AKIA1".into(),
            generate_stat: Some(true),
            display_name: "ignored".into(),
            ..Default::default()
        };
        let req = GetUser::builder()
            .client(test_client())
            .user(user)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/user");
        assert_eq!(req.query_params.to_query_string(), "access-key=AKIA1&stats=true");
    }

    #[test]
    fn test_get_user_requires_identifier() {
        let err = GetUser::builder()
            .client(test_client())
            .user(User::default())
            .build()
            .to_admin_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::MissingUserIdOrAccessKey));
    }

    #[test]
    fn test_create_user_validation() {
        let err = CreateUser::builder()
            .client(test_client())
            .user(User::with_id("alice"))
            .build()
            .to_admin_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::MissingUserDisplayName));

        let err = CreateUser::builder()
            .client(test_client())
            .user(User {
                display_name: "Alice".into(),
                ..Default::default()
            })
            .build()
            .to_admin_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::MissingUserId));
    }

    #[test]
    fn test_create_user_uses_put() {
        let user = User {
            id: "alice".into(),
            display_name: "Alice Doe".into(),
            max_buckets: Some(10),
            account_id: "RGW1".into(),
            ..Default::default()
        };
        let req = CreateUser::builder()
            .client(test_client())
            .user(user)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(
            req.query_params.to_query_string(),
            "uid=alice&display-name=Alice%20Doe&max-buckets=10&account-id=RGW1"
        );
    }

    #[test]
    fn test_modify_user_does_not_send_account_id() {
        let user = User {
            id: "alice".into(),
            suspended: Some(1),
            account_id: "RGW1".into(),
            ..Default::default()
        };
        let req = ModifyUser::builder()
            .client(test_client())
            .user(user)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.query_params.to_query_string(), "uid=alice&suspended=1");
    }

    #[test]
    fn test_remove_user_with_purge() {
        let user = User {
            id: "alice".into(),
            purge_data: Some(true),
            ..Default::default()
        };
        let req = RemoveUser::builder()
            .client(test_client())
            .user(user)
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.query_params.to_query_string(), "uid=alice&purge-data=true");
    }

    #[test]
    fn test_list_users_path() {
        let req = ListUsers::builder()
            .client(test_client())
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.path, "/metadata/user");
        assert!(req.query_params.is_empty());
    }
}
