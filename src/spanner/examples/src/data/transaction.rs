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

use super::client::{Client, to_duration};
use super::options::{CommitOptions, QueryOptions};
use super::result_set::{CommitResponse, ResultSet};
use super::wire::{
    self, BatchStatement, CommitRequest, ExecuteBatchDmlRequest, ExecuteSqlRequest, ReadRequest,
    RequestOptions, TransactionSelector,
};
use super::{Error, KeySet, Mutation, Result, Statement};
use google_cloud_gax::error::rpc::{Code, Status};

/// A read-write transaction.
///
/// The transaction buffers mutations locally and sends them to the service
/// on [commit][ReadWriteTransaction::commit]. DML statements run on the
/// service as they are issued, and their effects are visible to later
/// statements in the same transaction.
///
/// Dropping the transaction without committing or rolling back leaves the
/// session on the service until it is garbage collected.
#[derive(Debug)]
pub struct ReadWriteTransaction {
    client: Client,
    session: String,
    id: String,
    transaction_tag: Option<String>,
    seqno: i64,
    mutations: Vec<Mutation>,
}

impl ReadWriteTransaction {
    pub(crate) fn new(
        client: Client,
        session: String,
        id: String,
        transaction_tag: Option<String>,
    ) -> Self {
        Self {
            client,
            session,
            id,
            transaction_tag,
            seqno: 0,
            mutations: Vec::new(),
        }
    }

    /// Runs a DML statement and returns the number of modified rows.
    pub async fn execute_update<S: Into<Statement>>(&mut self, statement: S) -> Result<i64> {
        self.execute_update_with(statement, QueryOptions::default())
            .await
    }

    /// Runs a DML statement with request options.
    pub async fn execute_update_with<S: Into<Statement>>(
        &mut self,
        statement: S,
        options: QueryOptions,
    ) -> Result<i64> {
        let result = self.execute_dml(statement.into(), options).await?;
        Ok(result.row_count().unwrap_or_default())
    }

    /// Runs a query, or a DML statement with a `THEN RETURN` (GoogleSQL) or
    /// `RETURNING` (PostgreSQL) clause.
    pub async fn execute_query<S: Into<Statement>>(&mut self, statement: S) -> Result<ResultSet> {
        self.execute_dml(statement.into(), QueryOptions::default())
            .await
    }

    /// Runs a query, or a DML statement returning rows, with request options.
    pub async fn execute_query_with<S: Into<Statement>>(
        &mut self,
        statement: S,
        options: QueryOptions,
    ) -> Result<ResultSet> {
        self.execute_dml(statement.into(), options).await
    }

    /// Runs a batch of DML statements, in order.
    ///
    /// Returns the number of rows modified by each statement. If a statement
    /// fails the service does not run the remaining statements, and the
    /// function returns [Error::BatchUpdate] with the counts for the
    /// statements that succeeded.
    pub async fn batch_update<T>(&mut self, statements: T) -> Result<Vec<i64>>
    where
        T: IntoIterator<Item = Statement>,
    {
        let statements = statements.into_iter().collect::<Vec<_>>();
        self.seqno += 1;
        let request = ExecuteBatchDmlRequest {
            transaction: TransactionSelector::Id(self.id.clone()),
            statements: statements
                .iter()
                .map(|s| BatchStatement {
                    sql: &s.sql,
                    params: &s.params,
                    param_types: s.param_types(),
                })
                .collect(),
            seqno: self.seqno,
            request_options: RequestOptions::new(None, self.transaction_tag.clone()),
        };
        let response: wire::ExecuteBatchDmlResponse = self
            .client
            .post(&format!("{}:executeBatchDml", self.session), &request)
            .await?;
        let row_counts = response
            .result_sets
            .into_iter()
            .map(|rs| {
                rs.stats
                    .and_then(|s| s.row_count_exact)
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();
        match response.status.map(|s| Status::from(&s)) {
            Some(status) if status.code != Code::Ok => Err(Error::BatchUpdate { status, row_counts }),
            _ => Ok(row_counts),
        }
    }

    /// Buffers mutations, the transaction applies them when it commits.
    pub fn buffer_write<T>(&mut self, mutations: T)
    where
        T: IntoIterator<Item = Mutation>,
    {
        self.mutations.extend(mutations);
    }

    /// Commits the transaction.
    pub async fn commit(self) -> Result<CommitResponse> {
        self.commit_with(CommitOptions::default()).await
    }

    /// Commits the transaction with commit options.
    pub async fn commit_with(self, options: CommitOptions) -> Result<CommitResponse> {
        let request = CommitRequest {
            transaction_id: Some(&self.id),
            single_use_transaction: None,
            mutations: &self.mutations,
            return_commit_stats: options.return_commit_stats,
            max_commit_delay: options.max_commit_delay.map(to_duration),
            request_options: RequestOptions::new(None, self.transaction_tag.clone()),
        };
        let result = self.client.commit(&self.session, &request).await;
        self.client.delete_session(self.session).await;
        result
    }

    /// Rolls back the transaction, discarding any buffered mutations.
    pub async fn rollback(self) -> Result<()> {
        let request = wire::RollbackRequest {
            transaction_id: &self.id,
        };
        let result = self
            .client
            .post::<_, serde_json::Value>(&format!("{}:rollback", self.session), &request)
            .await;
        self.client.delete_session(self.session).await;
        result.map(|_| ())
    }

    async fn execute_dml(&mut self, statement: Statement, options: QueryOptions) -> Result<ResultSet> {
        self.seqno += 1;
        let request = ExecuteSqlRequest {
            transaction: Some(TransactionSelector::Id(self.id.clone())),
            sql: &statement.sql,
            params: &statement.params,
            param_types: statement.param_types(),
            seqno: Some(self.seqno),
            request_options: RequestOptions::new(
                options.request_tag,
                self.transaction_tag.clone(),
            ),
            directed_read_options: None,
            partition_token: None,
        };
        self.client.execute_sql(&self.session, &request).await
    }
}

/// A strong, multi-use, read-only transaction.
#[derive(Debug)]
pub struct ReadOnlyTransaction {
    client: Client,
    session: String,
    transaction: wire::Transaction,
}

impl ReadOnlyTransaction {
    pub(crate) fn new(client: Client, session: String, transaction: wire::Transaction) -> Self {
        Self {
            client,
            session,
            transaction,
        }
    }

    /// The timestamp of the snapshot read by this transaction.
    pub fn read_timestamp(&self) -> Option<&google_cloud_wkt::Timestamp> {
        self.transaction.read_timestamp.as_ref()
    }

    pub async fn execute_query<S: Into<Statement>>(&self, statement: S) -> Result<ResultSet> {
        self.execute_query_with(statement, QueryOptions::default())
            .await
    }

    pub async fn execute_query_with<S: Into<Statement>>(
        &self,
        statement: S,
        options: QueryOptions,
    ) -> Result<ResultSet> {
        let statement = statement.into();
        let request = ExecuteSqlRequest {
            transaction: Some(TransactionSelector::Id(self.transaction.id.clone())),
            sql: &statement.sql,
            params: &statement.params,
            param_types: statement.param_types(),
            seqno: None,
            request_options: RequestOptions::new(options.request_tag, None),
            directed_read_options: self.client.directed_reads(options.directed_read_options),
            partition_token: None,
        };
        self.client.execute_sql(&self.session, &request).await
    }

    pub async fn read<C, V>(&self, table: &str, key_set: KeySet, columns: C) -> Result<ResultSet>
    where
        C: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let request = ReadRequest {
            transaction: Some(TransactionSelector::Id(self.transaction.id.clone())),
            table,
            columns: columns.into_iter().map(Into::into).collect(),
            key_set: &key_set,
            request_options: None,
            directed_read_options: self.client.directed_reads(None),
        };
        self.client.read_rows(&self.session, &request).await
    }

    /// Ends the transaction and releases its session.
    pub async fn close(self) {
        self.client.delete_session(self.session).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::client::tests::{SESSION, expect_session, test_client};
    use crate::data::{TransactionOptions, Value};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn expect_begin(server: &Server, options: serde_json::Value) {
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:beginTransaction"))),
                request::body(json_decoded(eq(options))),
            ])
            .respond_with(json_encoded(json!({"id": "dHgx", "readTimestamp": "2025-01-02T03:04:05Z"}))),
        );
    }

    #[tokio::test]
    async fn read_write() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        expect_begin(
            &server,
            json!({"options": {"readWrite": {}}, "requestOptions": {"transactionTag": "app=cart"}}),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"id": "dHgx"},
                    "sql": "UPDATE Venues SET Capacity = CAST(Capacity/4 AS INT64) WHERE OutdoorVenue = false",
                    "seqno": "1",
                    "requestOptions": {"requestTag": "app=cart,action=update", "transactionTag": "app=cart"},
                })))),
            ])
            .respond_with(json_encoded(json!({"stats": {"rowCountExact": "2"}}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"id": "dHgx"},
                    "sql": "SELECT Capacity FROM Venues WHERE VenueId = @id",
                    "params": {"id": "4"},
                    "paramTypes": {"id": {"code": "INT64"}},
                    "seqno": "2",
                    "requestOptions": {"transactionTag": "app=cart"},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "metadata": {"rowType": {"fields": [{"name": "Capacity", "type": {"code": "INT64"}}]}},
                "rows": [["1800"]],
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:commit"))),
                request::body(json_decoded(eq(json!({
                    "transactionId": "dHgx",
                    "mutations": [{"update": {
                        "table": "Venues",
                        "columns": ["VenueId", "Capacity"],
                        "values": [["4", "1801"]],
                    }}],
                    "requestOptions": {"transactionTag": "app=cart"},
                })))),
            ])
            .respond_with(json_encoded(json!({"commitTimestamp": "2025-01-02T03:04:06Z"}))),
        );

        let client = test_client(&server).await?;
        let mut tx = client
            .begin_read_write_with(TransactionOptions::new().set_transaction_tag("app=cart"))
            .await?;
        let count = tx
            .execute_update_with(
                "UPDATE Venues SET Capacity = CAST(Capacity/4 AS INT64) WHERE OutdoorVenue = false",
                QueryOptions::new().set_request_tag("app=cart,action=update"),
            )
            .await?;
        assert_eq!(count, 2);
        let result = tx
            .execute_query(
                Statement::new("SELECT Capacity FROM Venues WHERE VenueId = @id").bind("id", 4),
            )
            .await?;
        let capacity = result.rows()[0].get::<i64>("Capacity")?;
        tx.buffer_write([Mutation::update(
            "Venues",
            ["VenueId", "Capacity"],
            [vec![Value::from(4), Value::from(capacity + 1)]],
        )]);
        let response = tx.commit().await?;
        assert!(response.commit_timestamp.is_some(), "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn batch_update() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        expect_begin(&server, json!({"options": {"readWrite": {}}}));
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:executeBatchDml"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"id": "dHgx"},
                    "statements": [
                        {"sql": "INSERT INTO Albums (SingerId, AlbumId, AlbumTitle) VALUES (1, 3, 'Test Album Title')"},
                        {
                            "sql": "UPDATE Albums SET MarketingBudget = @budget WHERE SingerId = 1 and AlbumId = 3",
                            "params": {"budget": "20000"},
                            "paramTypes": {"budget": {"code": "INT64"}},
                        },
                    ],
                    "seqno": "1",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "resultSets": [
                    {"stats": {"rowCountExact": "1"}},
                    {"stats": {"rowCountExact": "1"}},
                ],
                "status": {},
            }))),
        );
        server.expect(
            Expectation::matching(request::path(eq(format!("/v1/{SESSION}:commit"))))
                .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let mut tx = client.begin_read_write().await?;
        let counts = tx
            .batch_update([
                Statement::new(
                    "INSERT INTO Albums (SingerId, AlbumId, AlbumTitle) VALUES (1, 3, 'Test Album Title')",
                ),
                Statement::new(
                    "UPDATE Albums SET MarketingBudget = @budget WHERE SingerId = 1 and AlbumId = 3",
                )
                .bind("budget", 20_000),
            ])
            .await?;
        assert_eq!(counts, vec![1, 1]);
        tx.commit().await?;
        Ok(())
    }

    #[tokio::test]
    async fn batch_update_error() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        expect_begin(&server, json!({"options": {"readWrite": {}}}));
        server.expect(
            Expectation::matching(request::path(eq(format!("/v1/{SESSION}:executeBatchDml"))))
                .respond_with(json_encoded(json!({
                    "resultSets": [{"stats": {"rowCountExact": "1"}}],
                    "status": {"code": 6, "message": "Row [1,3] already exists"},
                }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:rollback"))),
                request::body(json_decoded(eq(json!({"transactionId": "dHgx"})))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let mut tx = client.begin_read_write().await?;
        let err = tx
            .batch_update([Statement::new("INSERT 1"), Statement::new("INSERT 2")])
            .await
            .unwrap_err();
        match &err {
            Error::BatchUpdate { status, row_counts } => {
                assert_eq!(status.code, Code::AlreadyExists);
                assert_eq!(row_counts, &vec![1]);
            }
            e => panic!("unexpected error {e:?}"),
        }
        tx.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    async fn read_only() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        expect_begin(
            &server,
            json!({"options": {"readOnly": {"strong": true, "returnReadTimestamp": true}}}),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"id": "dHgx"},
                    "sql": "SELECT SingerId, AlbumId, AlbumTitle FROM Albums",
                })))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:read"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"id": "dHgx"},
                    "table": "Albums",
                    "columns": ["SingerId", "AlbumId", "AlbumTitle"],
                    "keySet": {"keys": [["1", "2"]]},
                })))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let tx = client.begin_read_only().await?;
        assert!(tx.read_timestamp().is_some(), "{tx:?}");
        tx.execute_query("SELECT SingerId, AlbumId, AlbumTitle FROM Albums")
            .await?;
        tx.read(
            "Albums",
            KeySet::keys([vec![Value::from(1), Value::from(2)]]),
            ["SingerId", "AlbumId", "AlbumTitle"],
        )
        .await?;
        tx.close().await;
        Ok(())
    }
}
