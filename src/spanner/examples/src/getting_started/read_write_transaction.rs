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

// [START spanner_read_write_transaction]
use crate::data::{Client, Mutation, Statement, Value};

const TRANSFER_AMOUNT: i64 = 200_000;

/// Moves part of the marketing budget of album (2, 2) to album (1, 1).
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let mut transaction = client.begin_read_write().await?;
    let mut budgets = Vec::new();
    for (singer_id, album_id) in [(1, 1), (2, 2)] {
        let statement = Statement::new(
            "SELECT MarketingBudget FROM Albums WHERE SingerId = @singerId AND AlbumId = @albumId",
        )
        .bind("singerId", singer_id)
        .bind("albumId", album_id);
        let result = transaction.execute_query(statement).await?;
        let budget = match result.rows().first() {
            Some(row) => row.get::<Option<i64>>("MarketingBudget")?.unwrap_or_default(),
            None => 0,
        };
        budgets.push(budget);
    }
    let (first_budget, second_budget) = (budgets[0], budgets[1]);
    if second_budget < TRANSFER_AMOUNT {
        transaction.rollback().await?;
        anyhow::bail!("the second album does not have enough funds to transfer");
    }

    transaction.buffer_write([Mutation::update(
        "Albums",
        ["SingerId", "AlbumId", "MarketingBudget"],
        [
            vec![
                Value::from(1),
                Value::from(1),
                Value::from(first_budget + TRANSFER_AMOUNT),
            ],
            vec![
                Value::from(2),
                Value::from(2),
                Value::from(second_budget - TRANSFER_AMOUNT),
            ],
        ],
    )]);
    transaction.commit().await?;
    println!("Transaction complete");
    Ok(())
}
// [END spanner_read_write_transaction]
