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

// [START spanner_set_max_commit_delay]
use crate::data::{Client, CommitOptions, Mutation, Value};
use std::time::Duration;

pub async fn sample(client: &Client) -> anyhow::Result<i64> {
    let mutation = Mutation::insert_or_update(
        "Albums",
        ["SingerId", "AlbumId", "MarketingBudget"],
        [
            vec![Value::from(1), Value::from(1), Value::from(200_000)],
            vec![Value::from(2), Value::from(2), Value::from(400_000)],
        ],
    );
    let options = CommitOptions::new()
        .set_return_commit_stats(true)
        .set_max_commit_delay(Duration::from_millis(100));
    let response = client.apply_with([mutation], options).await?;
    let count = response
        .commit_stats
        .map(|s| s.mutation_count)
        .unwrap_or_default();
    println!("Updated data with {count} mutations.");
    Ok(count)
}
// [END spanner_set_max_commit_delay]
