// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{Type, Value};
use std::collections::BTreeMap;

/// A SQL statement with its parameters.
///
/// GoogleSQL statements refer to parameters by name (`@name`).
/// PostgreSQL-dialect statements use positional parameters (`$1`, `$2`),
/// bound with the names `p1`, `p2`, and so on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statement {
    pub(crate) sql: String,
    pub(crate) params: BTreeMap<String, Value>,
}

impl Statement {
    pub fn new<T: Into<String>>(sql: T) -> Self {
        Self {
            sql: sql.into(),
            params: BTreeMap::new(),
        }
    }

    /// Binds a parameter value.
    pub fn bind<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &BTreeMap<String, Value> {
        &self.params
    }

    pub(crate) fn param_types(&self) -> BTreeMap<&str, Type> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.value_type()))
            .collect()
    }
}

impl<T: Into<String>> From<T> for Statement {
    fn from(sql: T) -> Self {
        Self::new(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind() {
        let stmt = Statement::new("SELECT * FROM Singers WHERE LastName = @lastName")
            .bind("lastName", "Garcia")
            .bind("limit", 10);
        assert_eq!(stmt.sql(), "SELECT * FROM Singers WHERE LastName = @lastName");
        assert_eq!(stmt.params().get("lastName"), Some(&Value::from("Garcia")));
        let types = stmt.param_types();
        assert_eq!(types.get("lastName"), Some(&Type::string()));
        assert_eq!(types.get("limit"), Some(&Type::int64()));
    }

    #[test]
    fn rebind() {
        let stmt = Statement::from("SELECT $1")
            .bind("p1", 1)
            .bind("p1", "replaced");
        assert_eq!(stmt.params().len(), 1);
        assert_eq!(stmt.params().get("p1"), Some(&Value::from("replaced")));
    }
}
