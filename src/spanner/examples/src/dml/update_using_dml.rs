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

// [START spanner_dml_standard_update]
use crate::data::Client;

pub async fn sample(client: &Client) -> anyhow::Result<i64> {
    let mut transaction = client.begin_read_write().await?;
    let count = transaction
        .execute_update(
            "UPDATE Albums SET MarketingBudget = MarketingBudget * 2 WHERE SingerId = 1 and AlbumId = 1",
        )
        .await?;
    transaction.commit().await?;
    println!("{count} record updated.");
    Ok(count)
}
// [END spanner_dml_standard_update]
