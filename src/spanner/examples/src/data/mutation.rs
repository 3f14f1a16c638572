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

use super::Value;
use serde::Serialize;

/// A set of rows, identified by their primary keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KeySet {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    keys: Vec<Vec<Value>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    all: bool,
}

impl KeySet {
    /// All the rows in the table.
    pub fn all() -> Self {
        Self {
            keys: Vec::new(),
            all: true,
        }
    }

    /// The rows with the given primary keys.
    ///
    /// Each key is the list of values for the primary key columns.
    pub fn keys<T>(keys: T) -> Self
    where
        T: IntoIterator<Item = Vec<Value>>,
    {
        Self {
            keys: keys.into_iter().collect(),
            all: false,
        }
    }

    /// A single row in a table with a single-column primary key.
    pub fn key<V: Into<Value>>(key: V) -> Self {
        Self::keys([vec![key.into()]])
    }
}

/// The payload for insert, update, insert-or-update and replace mutations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Write {
    table: String,
    columns: Vec<String>,
    values: Vec<Vec<Value>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delete {
    table: String,
    key_set: KeySet,
}

/// A change to apply to the database when a transaction commits.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum Mutation {
    Insert(Write),
    Update(Write),
    InsertOrUpdate(Write),
    Replace(Write),
    Delete(Delete),
}

impl Mutation {
    /// Inserts new rows, fails if any of the rows already exists.
    pub fn insert<C, S, R>(table: &str, columns: C, rows: R) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Vec<Value>>,
    {
        Self::Insert(Write::new(table, columns, rows))
    }

    /// Updates existing rows, fails if any of the rows does not exist.
    pub fn update<C, S, R>(table: &str, columns: C, rows: R) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Vec<Value>>,
    {
        Self::Update(Write::new(table, columns, rows))
    }

    /// Inserts new rows or updates the columns of existing rows.
    pub fn insert_or_update<C, S, R>(table: &str, columns: C, rows: R) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Vec<Value>>,
    {
        Self::InsertOrUpdate(Write::new(table, columns, rows))
    }

    /// Inserts new rows or replaces existing rows. Columns not listed are set
    /// to `NULL`.
    pub fn replace<C, S, R>(table: &str, columns: C, rows: R) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Vec<Value>>,
    {
        Self::Replace(Write::new(table, columns, rows))
    }

    pub fn delete(table: &str, key_set: KeySet) -> Self {
        Self::Delete(Delete {
            table: table.to_string(),
            key_set,
        })
    }
}

impl Write {
    fn new<C, S, R>(table: &str, columns: C, rows: R) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = Vec<Value>>,
    {
        Self {
            table: table.to_string(),
            columns: columns.into_iter().map(Into::into).collect(),
            values: rows.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn insert_or_update() -> anyhow::Result<()> {
        let mutation = Mutation::insert_or_update(
            "Albums",
            ["SingerId", "AlbumId", "MarketingBudget"],
            [
                vec![1.into(), 1.into(), 200_000.into()],
                vec![2.into(), 2.into(), 400_000.into()],
            ],
        );
        let got = serde_json::to_value(&mutation)?;
        let want = json!({"insertOrUpdate": {
            "table": "Albums",
            "columns": ["SingerId", "AlbumId", "MarketingBudget"],
            "values": [["1", "1", "200000"], ["2", "2", "400000"]],
        }});
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn delete() -> anyhow::Result<()> {
        let got = serde_json::to_value(Mutation::delete("Singers", KeySet::all()))?;
        assert_eq!(got, json!({"delete": {"table": "Singers", "keySet": {"all": true}}}));

        let got = serde_json::to_value(Mutation::delete(
            "Albums",
            KeySet::keys([vec![1.into(), 2.into()]]),
        ))?;
        assert_eq!(
            got,
            json!({"delete": {"table": "Albums", "keySet": {"keys": [["1", "2"]]}}})
        );
        Ok(())
    }

    #[test]
    fn variants() -> anyhow::Result<()> {
        let rows = || [vec![Value::from(1), Value::from("Marc")]];
        let columns = ["SingerId", "FirstName"];
        for (mutation, tag) in [
            (Mutation::insert("Singers", columns, rows()), "insert"),
            (Mutation::update("Singers", columns, rows()), "update"),
            (Mutation::replace("Singers", columns, rows()), "replace"),
        ] {
            let got = serde_json::to_value(&mutation)?;
            assert!(got.get(tag).is_some(), "{got:?}");
        }
        Ok(())
    }
}
