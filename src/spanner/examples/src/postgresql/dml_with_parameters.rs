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

// [START spanner_postgresql_dml_with_parameters]
use crate::data::{Client, Statement};

pub async fn sample(client: &Client) -> anyhow::Result<i64> {
    let mut transaction = client.begin_read_write().await?;
    let count = transaction
        .execute_update(
            Statement::new(
                "INSERT INTO Singers (SingerId, FirstName, LastName) VALUES ($1, $2, $3), ($4, $5, $6)",
            )
            .bind("p1", 1)
            .bind("p2", "Alice")
            .bind("p3", "Henderson")
            .bind("p4", 2)
            .bind("p5", "Bruce")
            .bind("p6", "Allison"),
        )
        .await?;
    transaction.commit().await?;
    println!("{count} records inserted");
    Ok(count)
}
// [END spanner_postgresql_dml_with_parameters]
