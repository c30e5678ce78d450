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

//! Parameter encoding for admin requests
//!
//! Every record exchanged with the gateway declares a static field table
//! ([`ToParams::FIELDS`]): one [`FieldSpec`] per parameter, giving the wire name
//! and a function that returns the encoded value when the field is set. An
//! operation picks the fields it sends with a [`ParamSelection`], optionally
//! renaming some of them for that endpoint only, and gets back a [`ParamSet`].
//!
//! ```
//! use rgw_admin::admin::params::{ParamSelection, ToParams};
//! use rgw_admin::admin::types::Account;
//!
//! let account = Account {
//!     id: "acct1".into(),
//!     ..Default::default()
//! };
//! let params = account.to_params(&ParamSelection::new(&["id", "tenant", "name"]));
//! assert_eq!(params.to_query_string(), "id=acct1");
//! ```

use serde::Serialize;
use urlencoding::encode as url_encode;

/// Ordered set of query parameters, at most one value per key.
///
/// A key with an empty value is a flag and is rendered without `=`
/// (for example the `quota` sub-resource).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamSet {
    entries: Vec<(String, String)>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing the value of an existing key in place.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Inserts a value-less flag parameter.
    pub fn insert_flag<K: Into<String>>(&mut self, key: K) {
        self.insert(key, String::new());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Appends all parameters of `other`; its values win on shared keys.
    pub fn extend(&mut self, other: ParamSet) {
        for (k, v) in other.entries {
            self.insert(k, v);
        }
    }

    /// Converts the set to a URL query string, in insertion order.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in &self.entries {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&url_encode(key));
            if !value.is_empty() {
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParamSet::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl IntoIterator for ParamSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// One entry of a record's field table.
pub struct FieldSpec<T> {
    /// Declared wire name
    pub wire: &'static str,
    /// Encoded value, `None` when the field is unset
    pub value: fn(&T) -> Option<String>,
}

/// Records that can be encoded into query parameters.
pub trait ToParams: Sized + 'static {
    const FIELDS: &'static [FieldSpec<Self>];

    fn to_params(&self, selection: &ParamSelection) -> ParamSet {
        encode(self, selection)
    }
}

/// Fields an operation sends, by declared wire name, with per-operation renames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamSelection {
    fields: Vec<&'static str>,
    renames: Vec<(&'static str, &'static str)>,
}

impl ParamSelection {
    pub fn new(fields: &[&'static str]) -> Self {
        Self {
            fields: fields.to_vec(),
            renames: Vec::new(),
        }
    }

    /// Sends the field declared as `declared` under `wire` for this operation.
    pub fn rename(mut self, declared: &'static str, wire: &'static str) -> Self {
        self.renames.retain(|(d, _)| *d != declared);
        self.renames.push((declared, wire));
        self
    }

    pub fn includes(&self, declared: &str) -> bool {
        self.fields.contains(&declared)
    }

    pub fn wire_name(&self, declared: &'static str) -> &'static str {
        self.renames
            .iter()
            .find(|(d, _)| *d == declared)
            .map_or(declared, |(_, w)| *w)
    }
}

/// Encodes the selected, present fields of `record`, in field table order.
pub fn encode<T: ToParams>(record: &T, selection: &ParamSelection) -> ParamSet {
    let mut params = ParamSet::new();
    for field in T::FIELDS {
        if !selection.includes(field.wire) {
            continue;
        }
        if let Some(value) = (field.value)(record) {
            params.insert(selection.wire_name(field.wire), value);
        }
    }
    log::trace!(
        "encoded {} of {} selected parameters",
        params.len(),
        selection.fields.len()
    );
    params
}

// Value helpers used by the field tables.

pub(crate) fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

pub(crate) fn present<V: ToString>(v: &Option<V>) -> Option<String> {
    v.as_ref().map(ToString::to_string)
}

/// Nested records that are sent as one JSON-valued parameter.
pub(crate) trait NestedParam: Serialize {
    fn is_unset(&self) -> bool;
}

pub(crate) fn nested_json<V: NestedParam>(v: &V) -> Option<String> {
    if v.is_unset() {
        return None;
    }
    serde_json::to_string(v).ok()
}
