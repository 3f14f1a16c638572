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

// [START spanner_batch_client]
use crate::data::{Client, Partition};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The number of rows read from each partition, and the partition count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub partitions: usize,
    pub rows: usize,
}

/// Partitions a query and reads the partitions with `workers` tasks.
pub async fn sample(client: &Client, workers: usize) -> anyhow::Result<BatchSummary> {
    let transaction = Arc::new(client.batch_read_only_transaction().await?);
    let partitions = match transaction
        .partition_query("SELECT SingerId, FirstName, LastName FROM Singers")
        .await
    {
        Ok(p) => p,
        Err(e) => {
            if let Some(tx) = Arc::into_inner(transaction) {
                tx.cleanup().await;
            }
            return Err(e.into());
        }
    };
    let total_partitions = partitions.len();
    let queue: Arc<Mutex<std::vec::IntoIter<Partition>>> =
        Arc::new(Mutex::new(partitions.into_iter()));

    let tasks = (0..workers.max(1))
        .map(|_| {
            let transaction = transaction.clone();
            let queue = queue.clone();
            tokio::spawn(async move {
                let mut rows = 0_usize;
                loop {
                    let Some(partition) = queue.lock().await.next() else {
                        break;
                    };
                    let result = transaction.execute_partition(&partition).await?;
                    rows += result.rows().len();
                }
                crate::data::Result::Ok(rows)
            })
        })
        .collect::<Vec<_>>();

    let total_rows = sum_rows(futures::future::join_all(tasks).await);
    if let Some(tx) = Arc::into_inner(transaction) {
        tx.cleanup().await;
    }
    let total_rows = total_rows?;

    println!("Total Partitions: {total_partitions}");
    println!("Total Records: {total_rows}");
    if total_partitions > 0 {
        println!(
            "Average records per Partition: {}",
            total_rows as f64 / total_partitions as f64
        );
    }
    Ok(BatchSummary {
        partitions: total_partitions,
        rows: total_rows,
    })
}

/// Adds the rows read by each worker, or returns the error of the first
/// worker that failed.
fn sum_rows<I>(results: I) -> anyhow::Result<usize>
where
    I: IntoIterator<Item = Result<crate::data::Result<usize>, tokio::task::JoinError>>,
{
    let mut total_rows = 0;
    let mut failure = None;
    for result in results {
        match result {
            Ok(Ok(rows)) => total_rows += rows,
            Ok(Err(e)) => {
                failure.get_or_insert_with(|| anyhow::Error::from(e));
            }
            Err(e) => {
                failure.get_or_insert_with(|| anyhow::Error::from(e));
            }
        }
    }
    match failure {
        Some(e) => Err(e),
        None => Ok(total_rows),
    }
}
// [END spanner_batch_client]

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    const DATABASE: &str = "projects/p/instances/i/databases/d";
    const SESSION: &str = "projects/p/instances/i/databases/d/sessions/batch";

    #[test]
    fn sum_rows_keeps_first_failure() {
        use crate::data::Error;
        let got = sum_rows([
            Ok(Ok(2)),
            Ok(Err(Error::Decode("first worker".into()))),
            Ok(Ok(3)),
            Ok(Err(Error::Decode("second worker".into()))),
        ]);
        let err = got.unwrap_err().to_string();
        assert!(err.contains("first worker"), "{err}");

        let got = sum_rows([Ok(Ok(2)), Ok(Ok(3))]);
        assert!(matches!(got, Ok(5)), "{got:?}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn every_partition_once() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1/{DATABASE}/sessions"))),
            ])
            .respond_with(json_encoded(json!({"name": SESSION}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(format!("/v1/{SESSION}"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(request::path(eq(format!("/v1/{SESSION}:beginTransaction"))))
                .respond_with(json_encoded(json!({"id": "dHg="}))),
        );
        let tokens = (0..7).map(|i| format!("p{i}")).collect::<Vec<_>>();
        server.expect(
            Expectation::matching(request::path(eq(format!("/v1/{SESSION}:partitionQuery"))))
                .respond_with(json_encoded(json!({
                    "partitions": tokens.iter().map(|t| json!({"partitionToken": t})).collect::<Vec<_>>(),
                }))),
        );
        // Partition `pN` returns N rows, each partition is read exactly once.
        for (n, token) in tokens.iter().enumerate() {
            let rows = (0..n).map(|i| json!([format!("{i}"), "F", "L"])).collect::<Vec<_>>();
            server.expect(
                Expectation::matching(all_of![
                    request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                    request::body(json_decoded(eq(json!({
                        "transaction": {"id": "dHg="},
                        "sql": "SELECT SingerId, FirstName, LastName FROM Singers",
                        "partitionToken": token,
                    })))),
                ])
                .times(1)
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

        let client = Client::builder(DATABASE)
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        let summary = sample(&client, 3).await?;
        assert_eq!(
            summary,
            BatchSummary {
                partitions: 7,
                rows: (0..7).sum()
            }
        );
        Ok(())
    }
}
