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

// [START spanner_update_data]
use crate::data::{Client, Mutation, Value};

/// Sets the marketing budget of two albums, requires the `MarketingBudget`
/// column.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let mutation = Mutation::update(
        "Albums",
        ["SingerId", "AlbumId", "MarketingBudget"],
        [
            vec![Value::from(1), Value::from(1), Value::from(100_000)],
            vec![Value::from(2), Value::from(2), Value::from(500_000)],
        ],
    );
    client.apply([mutation]).await?;
    println!("Updated data");
    Ok(())
}
// [END spanner_update_data]
