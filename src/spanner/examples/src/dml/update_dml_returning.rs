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

// [START spanner_update_dml_returning]
use crate::data::Client;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let mut transaction = client.begin_read_write().await?;
    let result = transaction
        .execute_query(
            "UPDATE Albums SET MarketingBudget = MarketingBudget * 2 WHERE SingerId = 1 and AlbumId = 1 THEN RETURN MarketingBudget",
        )
        .await?;
    for row in result.rows() {
        println!("{}", row.get::<Option<i64>>("MarketingBudget")?.unwrap_or_default());
    }
    transaction.commit().await?;
    println!("Updated row(s) count: {}", result.row_count().unwrap_or_default());
    Ok(())
}
// [END spanner_update_dml_returning]
