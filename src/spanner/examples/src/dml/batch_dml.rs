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

// [START spanner_dml_batch_update]
use crate::data::{Client, Statement};

pub async fn sample(client: &Client) -> anyhow::Result<Vec<i64>> {
    let statements = [
        Statement::new(
            "INSERT INTO Albums (SingerId, AlbumId, AlbumTitle) VALUES (1, 3, 'Test Album Title')",
        ),
        Statement::new(
            "UPDATE Albums SET MarketingBudget = MarketingBudget * 2 WHERE SingerId = 1 and AlbumId = 3",
        ),
    ];
    let mut transaction = client.begin_read_write().await?;
    let row_counts = match transaction.batch_update(statements).await {
        Ok(counts) => counts,
        Err(e) => {
            transaction.rollback().await?;
            return Err(e.into());
        }
    };
    transaction.commit().await?;
    println!("Executed {} SQL statements using Batch DML.", row_counts.len());
    Ok(row_counts)
}
// [END spanner_dml_batch_update]
