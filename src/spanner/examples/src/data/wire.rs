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

//! Request and response payloads for the Spanner REST API.

use super::mutation::Mutation;
use super::options::DirectedReadOptions;
use super::result_set::{Field, ResultSetStats};
use super::value::{Type, Value};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as, skip_serializing_none};
use std::collections::BTreeMap;

#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub session: SessionTemplate,
}

#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTemplate {
    pub creator_role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Session {
    pub name: String,
}

/// The kind of transaction to start.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TransactionMode {
    ReadWrite {},
    ReadOnly {
        strong: bool,
        return_read_timestamp: bool,
    },
    PartitionedDml {},
}

impl TransactionMode {
    pub fn strong_read_only() -> Self {
        Self::ReadOnly {
            strong: true,
            return_read_timestamp: true,
        }
    }
}

/// Selects the transaction used by a query, read or DML statement.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionSelector {
    SingleUse(TransactionMode),
    Id(String),
}

#[skip_serializing_none]
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    pub request_tag: Option<String>,
    pub transaction_tag: Option<String>,
}

impl RequestOptions {
    pub fn new(request_tag: Option<String>, transaction_tag: Option<String>) -> Option<Self> {
        if request_tag.is_none() && transaction_tag.is_none() {
            return None;
        }
        Some(Self {
            request_tag,
            transaction_tag,
        })
    }
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteSqlRequest<'a> {
    pub transaction: Option<TransactionSelector>,
    pub sql: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: &'a BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub param_types: BTreeMap<&'a str, Type>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub seqno: Option<i64>,
    pub request_options: Option<RequestOptions>,
    pub directed_read_options: Option<DirectedReadOptions>,
    pub partition_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatement<'a> {
    pub sql: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: &'a BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub param_types: BTreeMap<&'a str, Type>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteBatchDmlRequest<'a> {
    pub transaction: TransactionSelector,
    pub statements: Vec<BatchStatement<'a>>,
    #[serde_as(as = "DisplayFromStr")]
    pub seqno: i64,
    pub request_options: Option<RequestOptions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExecuteBatchDmlResponse {
    pub result_sets: Vec<ResultSet>,
    /// An OK status is encoded as `{}`, the code defaults to 0.
    pub status: Option<google_cloud_rpc::model::Status>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadRequest<'a> {
    pub transaction: Option<TransactionSelector>,
    pub table: &'a str,
    pub columns: Vec<String>,
    pub key_set: &'a super::KeySet,
    pub request_options: Option<RequestOptions>,
    pub directed_read_options: Option<DirectedReadOptions>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginTransactionRequest {
    pub options: TransactionMode,
    pub request_options: Option<RequestOptions>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest<'a> {
    pub transaction_id: Option<&'a str>,
    pub single_use_transaction: Option<TransactionMode>,
    pub mutations: &'a [Mutation],
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub return_commit_stats: bool,
    pub max_commit_delay: Option<google_cloud_wkt::Duration>,
    pub request_options: Option<RequestOptions>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackRequest<'a> {
    pub transaction_id: &'a str,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionOptions {}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionQueryRequest<'a> {
    pub transaction: TransactionSelector,
    pub sql: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: &'a BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub param_types: BTreeMap<&'a str, Type>,
    pub partition_options: PartitionOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartitionResponse {
    pub partitions: Vec<PartitionToken>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartitionToken {
    pub partition_token: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub read_timestamp: Option<google_cloud_wkt::Timestamp>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructType {
    pub fields: Vec<Field>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultSetMetadata {
    pub row_type: StructType,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultSet {
    pub metadata: ResultSetMetadata,
    pub rows: Vec<Vec<serde_json::Value>>,
    pub stats: Option<ResultSetStats>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn transaction_selector() -> anyhow::Result<()> {
        let got = serde_json::to_value(TransactionSelector::SingleUse(
            TransactionMode::strong_read_only(),
        ))?;
        assert_eq!(
            got,
            json!({"singleUse": {"readOnly": {"strong": true, "returnReadTimestamp": true}}})
        );
        let got = serde_json::to_value(TransactionSelector::Id("dHgtaWQ=".into()))?;
        assert_eq!(got, json!({"id": "dHgtaWQ="}));
        Ok(())
    }

    #[test]
    fn execute_sql_request() -> anyhow::Result<()> {
        let params = BTreeMap::from([("id".to_string(), Value::Int64(7))]);
        let request = ExecuteSqlRequest {
            transaction: Some(TransactionSelector::Id("abc".into())),
            sql: "SELECT @id",
            params: &params,
            param_types: BTreeMap::from([("id", Type::int64())]),
            seqno: Some(3),
            request_options: RequestOptions::new(Some("action=select".into()), None),
            directed_read_options: None,
            partition_token: None,
        };
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "transaction": {"id": "abc"},
            "sql": "SELECT @id",
            "params": {"id": "7"},
            "paramTypes": {"id": {"code": "INT64"}},
            "seqno": "3",
            "requestOptions": {"requestTag": "action=select"},
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn request_options() {
        assert!(RequestOptions::new(None, None).is_none());
        let got = RequestOptions::new(None, Some("app=cart".into()));
        assert!(
            got.as_ref()
                .is_some_and(|o| o.transaction_tag.as_deref() == Some("app=cart")),
            "{got:?}"
        );
    }

    #[test]
    fn result_set() -> anyhow::Result<()> {
        let input = json!({
            "metadata": {
                "rowType": {"fields": [{"name": "SingerId", "type": {"code": "INT64"}}]},
            },
            "rows": [["1"], ["2"]],
            "stats": {"rowCountExact": "2"},
        });
        let got = serde_json::from_value::<ResultSet>(input)?;
        assert_eq!(got.metadata.row_type.fields.len(), 1);
        assert_eq!(got.rows.len(), 2);
        assert_eq!(got.stats.and_then(|s| s.row_count_exact), Some(2));
        Ok(())
    }
}
