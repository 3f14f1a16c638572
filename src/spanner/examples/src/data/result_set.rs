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

use super::value::{FromValue, Type, Value};
use super::{Error, Result, wire};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use std::sync::Arc;

/// The name and type of a column in a [ResultSet].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Type,
}

/// Statistics about a query or DML statement.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultSetStats {
    /// The exact number of rows modified by a DML statement.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub row_count_exact: Option<i64>,
    /// A lower bound for the number of rows modified by a partitioned DML
    /// statement.
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub row_count_lower_bound: Option<i64>,
}

/// The rows returned by a query, read, or DML statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    fields: Arc<[Field]>,
    rows: Vec<Row>,
    stats: Option<ResultSetStats>,
}

impl ResultSet {
    pub(crate) fn decode(input: wire::ResultSet) -> Result<Self> {
        let fields: Arc<[Field]> = input.metadata.row_type.fields.into();
        let rows = input
            .rows
            .into_iter()
            .map(|values| Row::decode(fields.clone(), values))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            fields,
            rows,
            stats: input.stats,
        })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn stats(&self) -> Option<&ResultSetStats> {
        self.stats.as_ref()
    }

    /// The number of rows modified by a DML statement.
    ///
    /// Returns the exact count if available, otherwise the lower bound.
    pub fn row_count(&self) -> Option<i64> {
        self.stats
            .as_ref()
            .and_then(|s| s.row_count_exact.or(s.row_count_lower_bound))
    }
}

/// A row in a [ResultSet].
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    fields: Arc<[Field]>,
    values: Vec<Value>,
}

impl Row {
    fn decode(fields: Arc<[Field]>, values: Vec<serde_json::Value>) -> Result<Self> {
        if values.len() != fields.len() {
            return Err(Error::decode(format!(
                "row has {} values, expected {}",
                values.len(),
                fields.len()
            )));
        }
        let values = fields
            .iter()
            .zip(values)
            .map(|(f, v)| Value::decode(&f.field_type, v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fields, values })
    }

    /// Gets the value of the column named `column`.
    ///
    /// PostgreSQL-dialect databases return unquoted identifiers in lower
    /// case, use `row.get::<i64>("singerid")` for those.
    pub fn get<T: FromValue>(&self, column: &str) -> Result<T> {
        let index = self
            .fields
            .iter()
            .position(|f| f.name == column)
            .ok_or_else(|| Error::decode(format!("no column named {column:?}")))?;
        self.get_at(index)
    }

    /// Gets the value at position `index`.
    pub fn get_at<T: FromValue>(&self, index: usize) -> Result<T> {
        let value = self
            .values
            .get(index)
            .ok_or_else(|| Error::decode(format!("no column at index {index}")))?;
        T::from_value(value)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, value)) in self.fields.iter().zip(&self.values).enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {value}", field.name)?;
        }
        Ok(())
    }
}

/// Statistics about a commit.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommitStats {
    /// The number of mutations in the transaction, including the mutations
    /// caused by DML statements and secondary indexes.
    #[serde_as(as = "DisplayFromStr")]
    pub mutation_count: i64,
}

/// The result of a successful commit.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommitResponse {
    pub commit_timestamp: Option<google_cloud_wkt::Timestamp>,
    /// Only present when requested in the [CommitOptions][super::CommitOptions].
    pub commit_stats: Option<CommitStats>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn singers() -> anyhow::Result<ResultSet> {
        let input = json!({
            "metadata": {"rowType": {"fields": [
                {"name": "SingerId", "type": {"code": "INT64"}},
                {"name": "FirstName", "type": {"code": "STRING"}},
                {"name": "Rating", "type": {"code": "NUMERIC", "typeAnnotation": "PG_NUMERIC"}},
            ]}},
            "rows": [["1", "Marc", "4.5"], ["2", null, null]],
        });
        let set = ResultSet::decode(serde_json::from_value(input)?)?;
        Ok(set)
    }

    #[test]
    fn decode() -> anyhow::Result<()> {
        let set = singers()?;
        assert_eq!(set.fields().len(), 3);
        assert_eq!(set.rows().len(), 2);
        assert_eq!(set.row_count(), None);

        let row = &set.rows()[0];
        assert_eq!(row.get::<i64>("SingerId")?, 1);
        assert_eq!(row.get::<String>("FirstName")?, "Marc");
        assert_eq!(row.get_at::<Value>(2)?, Value::pg_numeric("4.5"));

        let row = &set.rows()[1];
        assert_eq!(row.get::<Option<String>>("FirstName")?, None);
        assert!(row.get::<String>("FirstName").is_err());
        Ok(())
    }

    #[test]
    fn missing_columns() -> anyhow::Result<()> {
        let set = singers()?;
        let row = &set.rows()[0];
        let err = row.get::<i64>("AlbumId").unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "{err:?}");
        let err = row.get_at::<i64>(7).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "{err:?}");
        Ok(())
    }

    #[test]
    fn row_length_mismatch() -> anyhow::Result<()> {
        let input = json!({
            "metadata": {"rowType": {"fields": [{"name": "SingerId", "type": {"code": "INT64"}}]}},
            "rows": [["1", "extra"]],
        });
        let err = ResultSet::decode(serde_json::from_value(input)?).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "{err:?}");
        Ok(())
    }

    #[test]
    fn row_count() -> anyhow::Result<()> {
        let input = json!({"stats": {"rowCountExact": "3"}});
        let set = ResultSet::decode(serde_json::from_value(input)?)?;
        assert_eq!(set.row_count(), Some(3));
        assert!(set.rows().is_empty(), "{set:?}");

        let input = json!({"stats": {"rowCountLowerBound": "42"}});
        let set = ResultSet::decode(serde_json::from_value(input)?)?;
        assert_eq!(set.row_count(), Some(42));
        Ok(())
    }

    #[test]
    fn display() -> anyhow::Result<()> {
        let set = singers()?;
        assert_eq!(
            set.rows()[0].to_string(),
            "SingerId: 1, FirstName: Marc, Rating: 4.5"
        );
        assert_eq!(
            set.rows()[1].to_string(),
            "SingerId: 2, FirstName: NULL, Rating: NULL"
        );
        Ok(())
    }

    #[test]
    fn commit_response() -> anyhow::Result<()> {
        let input = json!({
            "commitTimestamp": "2025-01-02T03:04:05.123456Z",
            "commitStats": {"mutationCount": "6"},
        });
        let got = serde_json::from_value::<CommitResponse>(input)?;
        assert!(got.commit_timestamp.is_some(), "{got:?}");
        assert_eq!(got.commit_stats.map(|s| s.mutation_count), Some(6));

        let got = serde_json::from_value::<CommitResponse>(json!({}))?;
        assert_eq!(got, CommitResponse::default());
        Ok(())
    }
}
