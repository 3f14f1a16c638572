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

// [START spanner_postgresql_batch_dml]
use crate::data::{Client, Statement};

pub async fn sample(client: &Client) -> anyhow::Result<Vec<i64>> {
    let insert = "INSERT INTO Singers (SingerId, FirstName, LastName) VALUES ($1, $2, $3)";
    let mut transaction = client.begin_read_write().await?;
    let counts = transaction
        .batch_update([
            Statement::new(insert)
                .bind("p1", 3)
                .bind("p2", "Olivia")
                .bind("p3", "Garcia"),
            Statement::new(insert)
                .bind("p1", 4)
                .bind("p2", "Alex")
                .bind("p3", "Smith"),
        ])
        .await?;
    transaction.commit().await?;
    println!(
        "Executed {} SQL statements using Batch DML, inserted {} rows",
        counts.len(),
        counts.iter().sum::<i64>()
    );
    Ok(counts)
}
// [END spanner_postgresql_batch_dml]
