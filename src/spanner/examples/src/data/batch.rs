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

use super::client::Client;
use super::result_set::ResultSet;
use super::wire::{
    self, ExecuteSqlRequest, PartitionOptions, PartitionQueryRequest, TransactionSelector,
};
use super::{Result, Statement};

/// A read-only transaction used to partition a query and run the partitions
/// in parallel.
///
/// All partitions read the same snapshot of the database. The transaction
/// can be shared across tasks, for example using an `Arc`.
#[derive(Debug)]
pub struct BatchReadOnlyTransaction {
    client: Client,
    session: String,
    transaction: wire::Transaction,
}

/// A part of a partitioned query.
///
/// Partitions can be sent to other tasks and executed in any order, using
/// the [BatchReadOnlyTransaction] that created them.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    token: String,
    statement: Statement,
}

impl Partition {
    pub fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl BatchReadOnlyTransaction {
    pub(crate) fn new(client: Client, session: String, transaction: wire::Transaction) -> Self {
        Self {
            client,
            session,
            transaction,
        }
    }

    /// The timestamp of the snapshot read by all the partitions.
    pub fn read_timestamp(&self) -> Option<&google_cloud_wkt::Timestamp> {
        self.transaction.read_timestamp.as_ref()
    }

    /// Splits a query into partitions.
    ///
    /// The query must be root-partitionable, that is, the first operator in
    /// its execution plan must be a distributed union.
    pub async fn partition_query<S: Into<Statement>>(&self, statement: S) -> Result<Vec<Partition>> {
        let statement = statement.into();
        let request = PartitionQueryRequest {
            transaction: TransactionSelector::Id(self.transaction.id.clone()),
            sql: &statement.sql,
            params: &statement.params,
            param_types: statement.param_types(),
            partition_options: PartitionOptions::default(),
        };
        let response: wire::PartitionResponse = self
            .client
            .post(&format!("{}:partitionQuery", self.session), &request)
            .await?;
        let partitions = response
            .partitions
            .into_iter()
            .map(|p| Partition {
                token: p.partition_token,
                statement: statement.clone(),
            })
            .collect();
        Ok(partitions)
    }

    /// Runs a partition and returns its rows.
    pub async fn execute_partition(&self, partition: &Partition) -> Result<ResultSet> {
        let statement = &partition.statement;
        let request = ExecuteSqlRequest {
            transaction: Some(TransactionSelector::Id(self.transaction.id.clone())),
            sql: &statement.sql,
            params: &statement.params,
            param_types: statement.param_types(),
            seqno: None,
            request_options: None,
            directed_read_options: None,
            partition_token: Some(partition.token.clone()),
        };
        self.client.execute_sql(&self.session, &request).await
    }

    /// Releases the session used by the transaction.
    pub async fn cleanup(self) {
        self.client.delete_session(self.session).await;
    }
}

#[cfg(test)]
mod tests {
    use crate::data::client::tests::{SESSION, expect_session, test_client};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn partition_and_execute() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:beginTransaction"))),
                request::body(json_decoded(eq(json!({
                    "options": {"readOnly": {"strong": true, "returnReadTimestamp": true}}
                })))),
            ])
            .respond_with(json_encoded(json!({"id": "YmF0Y2g="}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:partitionQuery"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"id": "YmF0Y2g="},
                    "sql": "SELECT SingerId, FirstName, LastName FROM Singers",
                    "partitionOptions": {},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "partitions": [{"partitionToken": "cDE="}, {"partitionToken": "cDI="}],
            }))),
        );
        for (token, count) in [("cDE=", 2), ("cDI=", 1)] {
            let rows = (0..count)
                .map(|i| json!([format!("{i}"), "First", "Last"]))
                .collect::<Vec<_>>();
            server.expect(
                Expectation::matching(all_of![
                    request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                    request::body(json_decoded(eq(json!({
                        "transaction": {"id": "YmF0Y2g="},
                        "sql": "SELECT SingerId, FirstName, LastName FROM Singers",
                        "partitionToken": token,
                    })))),
                ])
                .respond_with(json_encoded(json!({
                    "metadata": {"rowType": {"fields": [
                        {"name": "SingerId", "type": {"code": "INT64"}},
                        {"name": "FirstName", "type": {"code": "STRING"}},
                        {"name": "LastName", "type": {"code": "STRING"}},
                    ]}},
                    "rows": rows,
                }))),
            );
        }

        let client = test_client(&server).await?;
        let tx = client.batch_read_only_transaction().await?;
        let partitions = tx
            .partition_query("SELECT SingerId, FirstName, LastName FROM Singers")
            .await?;
        assert_eq!(partitions.len(), 2);
        let mut total = 0;
        for p in &partitions {
            total += tx.execute_partition(p).await?.rows().len();
        }
        assert_eq!(total, 3);
        tx.cleanup().await;
        Ok(())
    }
}
