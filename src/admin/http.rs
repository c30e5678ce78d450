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

//! HTTP URL definitions

use crate::admin::error::ValidationErr;
use crate::admin::params::ParamSet;
use http::Uri;
use std::fmt;
use std::str::FromStr;

/// Default path prefix of the admin API on a gateway.
pub const DEFAULT_ADMIN_PATH: &str = "/admin";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: ParamSet,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Base URL of a gateway
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// Enables use of [`str::parse`] method to create a [`BaseUrl`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_admin::admin::http::BaseUrl;
    ///
    /// // Get base URL from host name
    /// let base_url: BaseUrl = "rgw.example.com".parse().unwrap();
    /// // Get base URL from host:port
    /// let base_url: BaseUrl = "http://rgw.example.com:8080".parse().unwrap();
    /// // Get base URL from IPv6 address
    /// let base_url: BaseUrl = "http://[::1]:7480".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };
        // http::Uri keeps the brackets of an IPv6 literal; add them when missing
        let host = if host.parse::<std::net::Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            host.to_string()
        };

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl { https, host, port })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let scheme = if self.https { "https" } else { "http" };
        write!(f, "{scheme}://{}", self.host_with_port())
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port, `0` when the scheme default is used
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host_with_port(&self) -> String {
        if self.port > 0 {
            format!("{}:{}", self.host, self.port)
        } else {
            self.host.clone()
        }
    }

    /// Builds the URL of an admin endpoint.
    ///
    /// `admin_path` is the prefix the gateway serves the admin API under and
    /// `path` the resource path, e.g. `/admin` and `/account`.
    pub fn build_url(&self, admin_path: &str, path: &str, query: &ParamSet) -> Url {
        let mut full_path = String::with_capacity(admin_path.len() + path.len() + 1);
        let prefix = admin_path.trim_end_matches('/');
        if !prefix.is_empty() && !prefix.starts_with('/') {
            full_path.push('/');
        }
        full_path.push_str(prefix);
        if !path.starts_with('/') {
            full_path.push('/');
        }
        full_path.push_str(path);

        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: full_path,
            query: query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_host_renders() {
        assert_eq!(Url::default().to_string(), "http:///");

        let url = Url {
            path: "/admin/account".into(),
            ..Default::default()
        };
        assert_eq!(url.to_string(), "http:///admin/account");
    }

    #[test]
    fn test_parse_defaults_to_https() {
        let base: BaseUrl = "rgw.example.com".parse().unwrap();
        assert!(base.https);
        assert_eq!(base.host(), "rgw.example.com");
        assert_eq!(base.port(), 0);
        assert_eq!(base.to_string(), "https://rgw.example.com");
    }

    #[test]
    fn test_parse_collapses_default_port() {
        let base: BaseUrl = "http://rgw.example.com:80/".parse().unwrap();
        assert!(!base.https);
        assert_eq!(base.port(), 0);

        let base: BaseUrl = "http://127.0.0.1:7480".parse().unwrap();
        assert_eq!(base.host_with_port(), "127.0.0.1:7480");
    }

    #[test]
    fn test_parse_ipv6() {
        let base: BaseUrl = "http://[::1]:7480".parse().unwrap();
        assert_eq!(base.host_with_port(), "[::1]:7480");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(matches!(
            "ftp://rgw.example.com".parse::<BaseUrl>(),
            Err(ValidationErr::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            "http://rgw.example.com/admin".parse::<BaseUrl>(),
            Err(ValidationErr::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            "http://rgw.example.com/?x=1".parse::<BaseUrl>(),
            Err(ValidationErr::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_build_url() {
        let base: BaseUrl = "http://localhost:7480".parse().unwrap();
        let mut query = ParamSet::new();
        query.insert("id", "acct1");

        let url = base.build_url(DEFAULT_ADMIN_PATH, "/account", &query);
        assert_eq!(url.path, "/admin/account");
        assert_eq!(url.to_string(), "http://localhost:7480/admin/account?id=acct1");

        let url = base.build_url("admin/", "user", &ParamSet::new());
        assert_eq!(url.to_string(), "http://localhost:7480/admin/user");

        let url = base.build_url("", "/metadata/user", &ParamSet::new());
        assert_eq!(url.path, "/metadata/user");
    }
}
