// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// BodyMap is the parameter set of a single gateway call.
///
/// Keys are kept in ascending byte order, which is the order every gateway
/// expects both for canonical strings and for JSON bodies.
///
/// ```
/// use paysign_core::BodyMap;
///
/// let mut bm = BodyMap::new();
/// bm.set("out_trade_no", "T20240501001").set("total_amt", 100);
///
/// assert_eq!(bm.encode_sign_params(), "out_trade_no=T20240501001&total_amt=100");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyMap(BTreeMap<String, Value>);

impl BodyMap {
    /// Create an empty BodyMap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Get the raw value of a parameter.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a parameter rendered as string.
    ///
    /// Strings are returned as is, `null` and missing keys become an empty
    /// string, everything else is rendered as compact JSON.
    pub fn get_string(&self, key: &str) -> String {
        self.0.get(key).map(value_to_string).unwrap_or_default()
    }

    /// Remove a parameter and return its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns true if the parameter exists, even if its value is empty.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there is no parameter.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Check that every listed key holds a non-empty value.
    ///
    /// The returned error names all missing keys, not only the first one.
    pub fn check_empty(&self, keys: &[&str]) -> Result<()> {
        let missing: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|k| self.get_string(k).is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::request_invalid(format!(
                "missing required parameters: {}",
                missing.join(", ")
            )))
        }
    }

    /// Check that at least one of the listed keys holds a non-empty value.
    pub fn check_any(&self, keys: &[&str]) -> Result<()> {
        if keys.iter().any(|k| !self.get_string(k).is_empty()) {
            Ok(())
        } else {
            Err(Error::request_invalid(format!(
                "one of these parameters is required: {}",
                keys.join(", ")
            )))
        }
    }

    /// Build the canonical `k1=v1&k2=v2` string used as signature input.
    ///
    /// Keys are sorted, empty values are skipped and values are not escaped.
    pub fn encode_sign_params(&self) -> String {
        let mut s = String::new();
        for (k, v) in &self.0 {
            let v = value_to_string(v);
            if v.is_empty() {
                continue;
            }
            if !s.is_empty() {
                s.push('&');
            }
            s.push_str(k);
            s.push('=');
            s.push_str(&v);
        }
        s
    }

    /// Build an `application/x-www-form-urlencoded` string.
    ///
    /// Keys are sorted and empty values are skipped.
    pub fn encode_url_params(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.0 {
            let v = value_to_string(v);
            if v.is_empty() {
                continue;
            }
            serializer.append_pair(k, &v);
        }
        serializer.finish()
    }

    /// Serialize all parameters into a compact JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

fn value_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        v => v.to_string(),
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for BodyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for BodyMap {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
