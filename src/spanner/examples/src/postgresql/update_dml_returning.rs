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

// [START spanner_postgresql_update_dml_returning]
use crate::data::Client;

pub async fn sample(client: &Client) -> anyhow::Result<Vec<Option<i64>>> {
    let mut transaction = client.begin_read_write().await?;
    let result = transaction
        .execute_query(
            "UPDATE Albums SET MarketingBudget = MarketingBudget * 2 \
             WHERE SingerId = 1 AND AlbumId = 1 \
             RETURNING MarketingBudget",
        )
        .await?;
    transaction.commit().await?;
    let budgets = result
        .rows()
        .iter()
        .map(|row| row.get::<Option<i64>>("marketingbudget"))
        .collect::<Result<Vec<_>, _>>()?;
    for budget in &budgets {
        println!("MarketingBudget: {budget:?}");
    }
    println!("Updated row(s) count: {}", result.row_count().unwrap_or_default());
    Ok(budgets)
}
// [END spanner_postgresql_update_dml_returning]
