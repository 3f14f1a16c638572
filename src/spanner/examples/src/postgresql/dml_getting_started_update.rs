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

// [START spanner_postgresql_dml_getting_started_update]
use crate::data::{Client, Statement, Value};

/// Sets the rating of singer 1 in a read-write transaction.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let mut transaction = client.begin_read_write().await?;
    let count = transaction
        .execute_update(
            Statement::new("UPDATE Singers SET Rating = $1 WHERE SingerId = $2")
                .bind("p1", Value::pg_numeric("4"))
                .bind("p2", 1),
        )
        .await?;
    transaction.commit().await?;
    println!("{count} record(s) updated");
    println!("Transaction complete");
    Ok(())
}
// [END spanner_postgresql_dml_getting_started_update]
