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

use super::batch::BatchReadOnlyTransaction;
use super::options::{CommitOptions, DirectedReadOptions, QueryOptions, TransactionOptions};
use super::result_set::{CommitResponse, ResultSet};
use super::transaction::{ReadOnlyTransaction, ReadWriteTransaction};
use super::wire::{
    self, CommitRequest, ExecuteSqlRequest, ReadRequest, RequestOptions, TransactionMode,
    TransactionSelector,
};
use super::{DEFAULT_ENDPOINT, Error, KeySet, Mutation, Result, Statement};
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use google_cloud_gax::error::rpc::Status;
use http::Extensions;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A client for a single Spanner database.
///
/// Cloning the client is cheap, all the clones share the same connection
/// pool and credentials.
#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    database: String,
    database_role: Option<String>,
    directed_read_options: Option<DirectedReadOptions>,
}

/// Configures and creates a [Client].
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    database: String,
    endpoint: Option<String>,
    cred: Option<Credentials>,
    database_role: Option<String>,
    directed_read_options: Option<DirectedReadOptions>,
}

impl ClientBuilder {
    /// Sets the endpoint, defaults to [DEFAULT_ENDPOINT].
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the credentials, defaults to the application default credentials.
    pub fn with_credentials<V: Into<Credentials>>(mut self, v: V) -> Self {
        self.cred = Some(v.into());
        self
    }

    /// Creates all sessions with this database role, used for fine-grained
    /// access control.
    pub fn with_database_role<V: Into<String>>(mut self, v: V) -> Self {
        self.database_role = Some(v.into());
        self
    }

    /// The default directed read options for single-use queries and
    /// read-only transactions.
    pub fn with_directed_read_options(mut self, v: DirectedReadOptions) -> Self {
        self.directed_read_options = Some(v);
        self
    }

    pub async fn build(self) -> Result<Client> {
        let cred = match self.cred {
            Some(c) => c,
            None => google_cloud_auth::credentials::Builder::default()
                .build()
                .map_err(Error::Credentials)?,
        };
        Ok(Client {
            inner: reqwest::Client::new(),
            cred,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            database: self.database,
            database_role: self.database_role,
            directed_read_options: self.directed_read_options,
        })
    }
}

impl Client {
    /// Returns a builder for a client connected to `database`.
    ///
    /// The database name has the form
    /// `projects/{project}/instances/{instance}/databases/{database}`.
    pub fn builder<V: Into<String>>(database: V) -> ClientBuilder {
        ClientBuilder {
            database: database.into(),
            endpoint: None,
            cred: None,
            database_role: None,
            directed_read_options: None,
        }
    }

    /// The full name of the database.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Runs a query in a single-use, strong, read-only transaction.
    pub async fn execute_query<S: Into<Statement>>(&self, statement: S) -> Result<ResultSet> {
        self.execute_query_with(statement, QueryOptions::default())
            .await
    }

    /// Runs a query in a single-use, strong, read-only transaction, with
    /// request options.
    pub async fn execute_query_with<S: Into<Statement>>(
        &self,
        statement: S,
        options: QueryOptions,
    ) -> Result<ResultSet> {
        let statement = statement.into();
        let request = ExecuteSqlRequest {
            transaction: Some(TransactionSelector::SingleUse(
                TransactionMode::strong_read_only(),
            )),
            sql: &statement.sql,
            params: &statement.params,
            param_types: statement.param_types(),
            seqno: None,
            request_options: RequestOptions::new(options.request_tag, None),
            directed_read_options: self.directed_reads(options.directed_read_options),
            partition_token: None,
        };
        let session = self.create_session().await?;
        let result = self.execute_sql(&session, &request).await;
        self.delete_session(session).await;
        result
    }

    /// Reads `columns` from the rows in `key_set`, in a single-use, strong,
    /// read-only transaction.
    pub async fn read<C, V>(&self, table: &str, key_set: KeySet, columns: C) -> Result<ResultSet>
    where
        C: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let request = ReadRequest {
            transaction: Some(TransactionSelector::SingleUse(
                TransactionMode::strong_read_only(),
            )),
            table,
            columns: columns.into_iter().map(Into::into).collect(),
            key_set: &key_set,
            request_options: None,
            directed_read_options: self.directed_reads(None),
        };
        let session = self.create_session().await?;
        let result = self.read_rows(&session, &request).await;
        self.delete_session(session).await;
        result
    }

    /// Applies the mutations atomically, in a single-use read-write
    /// transaction.
    pub async fn apply<T>(&self, mutations: T) -> Result<CommitResponse>
    where
        T: IntoIterator<Item = Mutation>,
    {
        self.apply_with(mutations, CommitOptions::default()).await
    }

    /// Applies the mutations atomically, with commit options.
    pub async fn apply_with<T>(&self, mutations: T, options: CommitOptions) -> Result<CommitResponse>
    where
        T: IntoIterator<Item = Mutation>,
    {
        let mutations = mutations.into_iter().collect::<Vec<_>>();
        let request = CommitRequest {
            transaction_id: None,
            single_use_transaction: Some(TransactionMode::ReadWrite {}),
            mutations: &mutations,
            return_commit_stats: options.return_commit_stats,
            max_commit_delay: options.max_commit_delay.map(to_duration),
            request_options: None,
        };
        let session = self.create_session().await?;
        let result = self.commit(&session, &request).await;
        self.delete_session(session).await;
        result
    }

    /// Starts a read-write transaction.
    ///
    /// The transaction holds a session until it is committed or rolled back.
    /// The client does not retry aborted transactions, if the service aborts
    /// the transaction the application receives an error with the `ABORTED`
    /// status code.
    pub async fn begin_read_write(&self) -> Result<ReadWriteTransaction> {
        self.begin_read_write_with(TransactionOptions::default())
            .await
    }

    /// Starts a read-write transaction with options.
    pub async fn begin_read_write_with(
        &self,
        options: TransactionOptions,
    ) -> Result<ReadWriteTransaction> {
        let session = self.create_session().await?;
        let tag = options.transaction_tag;
        match self
            .begin_transaction(&session, TransactionMode::ReadWrite {}, tag.clone())
            .await
        {
            Ok(tx) => Ok(ReadWriteTransaction::new(self.clone(), session, tx.id, tag)),
            Err(e) => {
                self.delete_session(session).await;
                Err(e)
            }
        }
    }

    /// Starts a strong, multi-use, read-only transaction.
    ///
    /// All the reads in the transaction see the same snapshot of the
    /// database.
    pub async fn begin_read_only(&self) -> Result<ReadOnlyTransaction> {
        let session = self.create_session().await?;
        match self
            .begin_transaction(&session, TransactionMode::strong_read_only(), None)
            .await
        {
            Ok(tx) => Ok(ReadOnlyTransaction::new(self.clone(), session, tx)),
            Err(e) => {
                self.delete_session(session).await;
                Err(e)
            }
        }
    }

    /// Runs a DML statement as partitioned DML.
    ///
    /// Returns a lower bound for the number of modified rows.
    pub async fn execute_partitioned_update<S: Into<Statement>>(&self, statement: S) -> Result<i64> {
        let statement = statement.into();
        let session = self.create_session().await?;
        let result = self
            .partitioned_update(&session, &statement)
            .await;
        self.delete_session(session).await;
        result
    }

    /// Starts a read-only transaction to partition and run queries in
    /// parallel.
    pub async fn batch_read_only_transaction(&self) -> Result<BatchReadOnlyTransaction> {
        let session = self.create_session().await?;
        match self
            .begin_transaction(&session, TransactionMode::strong_read_only(), None)
            .await
        {
            Ok(tx) => Ok(BatchReadOnlyTransaction::new(self.clone(), session, tx)),
            Err(e) => {
                self.delete_session(session).await;
                Err(e)
            }
        }
    }

    async fn partitioned_update(&self, session: &str, statement: &Statement) -> Result<i64> {
        let tx = self
            .begin_transaction(session, TransactionMode::PartitionedDml {}, None)
            .await?;
        let request = ExecuteSqlRequest {
            transaction: Some(TransactionSelector::Id(tx.id)),
            sql: &statement.sql,
            params: &statement.params,
            param_types: statement.param_types(),
            seqno: Some(1),
            request_options: None,
            directed_read_options: None,
            partition_token: None,
        };
        let result = self.execute_sql(session, &request).await?;
        Ok(result
            .stats()
            .and_then(|s| s.row_count_lower_bound.or(s.row_count_exact))
            .unwrap_or_default())
    }

    pub(crate) fn directed_reads(
        &self,
        request: Option<DirectedReadOptions>,
    ) -> Option<DirectedReadOptions> {
        request.or_else(|| self.directed_read_options.clone())
    }

    pub(crate) async fn create_session(&self) -> Result<String> {
        let request = wire::CreateSessionRequest {
            session: wire::SessionTemplate {
                creator_role: self.database_role.clone(),
            },
        };
        let session: wire::Session = self
            .post(&format!("{}/sessions", self.database), &request)
            .await?;
        tracing::debug!("created session {}", session.name);
        Ok(session.name)
    }

    /// Deletes a session, ignoring any errors.
    ///
    /// The service garbage collects idle sessions, a failure here only delays
    /// the cleanup.
    pub(crate) async fn delete_session(&self, session: String) {
        let builder = self
            .inner
            .delete(format!("{}/v1/{session}", self.endpoint));
        if let Err(e) = self.execute::<serde_json::Value>(builder).await {
            tracing::warn!("cannot delete session {session}: {e}");
        }
    }

    pub(crate) async fn begin_transaction(
        &self,
        session: &str,
        options: TransactionMode,
        transaction_tag: Option<String>,
    ) -> Result<wire::Transaction> {
        let request = wire::BeginTransactionRequest {
            options,
            request_options: RequestOptions::new(None, transaction_tag),
        };
        self.post(&format!("{session}:beginTransaction"), &request)
            .await
    }

    pub(crate) async fn execute_sql(
        &self,
        session: &str,
        request: &ExecuteSqlRequest<'_>,
    ) -> Result<ResultSet> {
        let response: wire::ResultSet = self
            .post(&format!("{session}:executeSql"), request)
            .await?;
        ResultSet::decode(response)
    }

    pub(crate) async fn read_rows(
        &self,
        session: &str,
        request: &ReadRequest<'_>,
    ) -> Result<ResultSet> {
        let response: wire::ResultSet = self.post(&format!("{session}:read"), request).await?;
        ResultSet::decode(response)
    }

    pub(crate) async fn commit(
        &self,
        session: &str,
        request: &CommitRequest<'_>,
    ) -> Result<CommitResponse> {
        self.post(&format!("{session}:commit"), request).await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: &I) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        let builder = self
            .inner
            .post(format!("{}/v1/{path}", self.endpoint))
            .json(body);
        self.execute(builder).await
    }

    async fn execute<O>(&self, mut builder: reqwest::RequestBuilder) -> Result<O>
    where
        O: DeserializeOwned + Default,
    {
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::Authentication)?;
        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        let response = builder.send().await?;
        if !response.status().is_success() {
            return to_error(response).await;
        }
        let no_content = response.status() == reqwest::StatusCode::NO_CONTENT;
        let body = response.bytes().await?;
        if body.is_empty() && no_content {
            return Ok(O::default());
        }
        Ok(serde_json::from_slice::<O>(&body)?)
    }
}

async fn to_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let payload = response.bytes().await?;
    let error = match Status::try_from(&payload) {
        Ok(status) => Error::Service {
            status,
            http_status_code: status_code,
        },
        Err(_) => Error::Http {
            status_code,
            payload,
        },
    };
    Err(error)
}

pub(crate) fn to_duration(d: std::time::Duration) -> google_cloud_wkt::Duration {
    google_cloud_wkt::Duration::clamp(d.as_secs() as i64, d.subsec_nanos() as i32)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::{ReplicaSelection, ReplicaType, Value};
    use google_cloud_gax::error::rpc::Code;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    pub(crate) const DATABASE: &str = "projects/p/instances/i/databases/d";
    pub(crate) const SESSION: &str = "projects/p/instances/i/databases/d/sessions/s";

    pub(crate) async fn test_client(server: &Server) -> anyhow::Result<Client> {
        let client = Client::builder(DATABASE)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    pub(crate) fn expect_session(server: &Server) {
        expect_sessions(server, 1);
    }

    pub(crate) fn expect_sessions(server: &Server, count: usize) {
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1/{DATABASE}/sessions"))),
            ])
            .times(count)
            .respond_with(json_encoded(json!({"name": SESSION}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(format!("/v1/{SESSION}"))),
            ])
            .times(count)
            .respond_with(json_encoded(json!({}))),
        );
    }

    #[tokio::test]
    async fn execute_query() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"singleUse": {"readOnly": {"strong": true, "returnReadTimestamp": true}}},
                    "sql": "SELECT SingerId, FirstName FROM Singers WHERE LastName = @lastName",
                    "params": {"lastName": "Garcia"},
                    "paramTypes": {"lastName": {"code": "STRING"}},
                    "requestOptions": {"requestTag": "app=concert"},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "metadata": {"rowType": {"fields": [
                    {"name": "SingerId", "type": {"code": "INT64"}},
                    {"name": "FirstName", "type": {"code": "STRING"}},
                ]}},
                "rows": [["12", "Melissa"]],
            }))),
        );

        let client = test_client(&server).await?;
        let statement =
            Statement::new("SELECT SingerId, FirstName FROM Singers WHERE LastName = @lastName")
                .bind("lastName", "Garcia");
        let result = client
            .execute_query_with(statement, QueryOptions::new().set_request_tag("app=concert"))
            .await?;
        assert_eq!(result.rows().len(), 1);
        let row = &result.rows()[0];
        assert_eq!(row.get::<i64>("SingerId")?, 12);
        assert_eq!(row.get::<String>("FirstName")?, "Melissa");
        Ok(())
    }

    #[tokio::test]
    async fn directed_reads() -> anyhow::Result<()> {
        let server = Server::run();
        expect_sessions(&server, 2);
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"singleUse": {"readOnly": {"strong": true, "returnReadTimestamp": true}}},
                    "sql": "SELECT 1",
                    "directedReadOptions": {"includeReplicas": {
                        "replicaSelections": [{"location": "us-east4"}],
                        "autoFailoverDisabled": false,
                    }},
                })))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"singleUse": {"readOnly": {"strong": true, "returnReadTimestamp": true}}},
                    "sql": "SELECT 2",
                    "directedReadOptions": {"includeReplicas": {
                        "replicaSelections": [{"type": "READ_WRITE"}],
                        "autoFailoverDisabled": true,
                    }},
                })))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = Client::builder(DATABASE)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
            .with_directed_read_options(DirectedReadOptions::include_replicas(
                [ReplicaSelection::new().set_location("us-east4")],
                false,
            ))
            .build()
            .await?;
        client.execute_query("SELECT 1").await?;
        let options = QueryOptions::new().set_directed_read_options(
            DirectedReadOptions::include_replicas(
                [ReplicaSelection::new().set_type(ReplicaType::ReadWrite)],
                true,
            ),
        );
        client.execute_query_with("SELECT 2", options).await?;
        Ok(())
    }

    #[tokio::test]
    async fn database_role() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1/{DATABASE}/sessions"))),
                request::body(json_decoded(eq(json!({"session": {"creatorRole": "new_parent"}})))),
            ])
            .respond_with(json_encoded(json!({"name": SESSION}))),
        );
        server.expect(
            Expectation::matching(request::method("DELETE"))
                .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(request::path(eq(format!("/v1/{SESSION}:executeSql"))))
                .respond_with(json_encoded(json!({}))),
        );

        let client = Client::builder(DATABASE)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
            .with_database_role("new_parent")
            .build()
            .await?;
        let result = client.execute_query("SELECT * FROM Singers").await?;
        assert!(result.rows().is_empty(), "{result:?}");
        Ok(())
    }

    #[tokio::test]
    async fn read() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:read"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"singleUse": {"readOnly": {"strong": true, "returnReadTimestamp": true}}},
                    "table": "Albums",
                    "columns": ["SingerId", "AlbumId", "AlbumTitle"],
                    "keySet": {"all": true},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "metadata": {"rowType": {"fields": [
                    {"name": "SingerId", "type": {"code": "INT64"}},
                    {"name": "AlbumId", "type": {"code": "INT64"}},
                    {"name": "AlbumTitle", "type": {"code": "STRING"}},
                ]}},
                "rows": [["1", "1", "Total Junk"], ["1", "2", "Go, Go, Go"]],
            }))),
        );

        let client = test_client(&server).await?;
        let result = client
            .read("Albums", KeySet::all(), ["SingerId", "AlbumId", "AlbumTitle"])
            .await?;
        let titles = result
            .rows()
            .iter()
            .map(|r| r.get::<String>("AlbumTitle"))
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(titles, vec!["Total Junk", "Go, Go, Go"]);
        Ok(())
    }

    #[tokio::test]
    async fn apply_with() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:commit"))),
                request::body(json_decoded(eq(json!({
                    "singleUseTransaction": {"readWrite": {}},
                    "mutations": [{"insertOrUpdate": {
                        "table": "Albums",
                        "columns": ["SingerId", "AlbumId", "MarketingBudget"],
                        "values": [["1", "1", "200000"]],
                    }}],
                    "returnCommitStats": true,
                    "maxCommitDelay": "0.1s",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "commitTimestamp": "2025-01-02T03:04:05Z",
                "commitStats": {"mutationCount": "3"},
            }))),
        );

        let client = test_client(&server).await?;
        let mutation = Mutation::insert_or_update(
            "Albums",
            ["SingerId", "AlbumId", "MarketingBudget"],
            [vec![Value::from(1), Value::from(1), Value::from(200_000)]],
        );
        let options = CommitOptions::new()
            .set_return_commit_stats(true)
            .set_max_commit_delay(std::time::Duration::from_millis(100));
        let response = client.apply_with([mutation], options).await?;
        assert_eq!(response.commit_stats.map(|s| s.mutation_count), Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn partitioned_update() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:beginTransaction"))),
                request::body(json_decoded(eq(json!({"options": {"partitionedDml": {}}})))),
            ])
            .respond_with(json_encoded(json!({"id": "cGR4"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"id": "cGR4"},
                    "sql": "DELETE FROM Singers WHERE SingerId > 10",
                    "seqno": "1",
                })))),
            ])
            .respond_with(json_encoded(json!({"stats": {"rowCountLowerBound": "5"}}))),
        );

        let client = test_client(&server).await?;
        let count = client
            .execute_partitioned_update("DELETE FROM Singers WHERE SingerId > 10")
            .await?;
        assert_eq!(count, 5);
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        server.expect(
            Expectation::matching(request::path(eq(format!("/v1/{SESSION}:executeSql"))))
                .respond_with(status_code(404).body(
                    json!({"error": {
                        "code": 404,
                        "message": "Table not found: Missing",
                        "status": "NOT_FOUND",
                    }})
                    .to_string(),
                )),
        );

        let client = test_client(&server).await?;
        let err = client
            .execute_query("SELECT * FROM Missing")
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert!(
            matches!(err, Error::Service { http_status_code: 404, .. }),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path(eq(format!("/v1/{DATABASE}/sessions"))))
                .respond_with(status_code(503).body("unavailable")),
        );

        let client = test_client(&server).await?;
        let err = client.execute_query("SELECT 1").await.unwrap_err();
        assert!(
            matches!(err, Error::Http { status_code: 503, ref payload } if payload.as_ref() == b"unavailable"),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn duration() {
        let got = to_duration(std::time::Duration::from_millis(100));
        assert_eq!(got, google_cloud_wkt::Duration::clamp(0, 100_000_000));
    }
}
