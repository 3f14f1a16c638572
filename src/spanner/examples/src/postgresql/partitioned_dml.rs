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

// [START spanner_postgresql_partitioned_dml]
use crate::data::Client;

pub async fn sample(client: &Client) -> anyhow::Result<i64> {
    let count = client
        .execute_partitioned_update("DELETE FROM Singers WHERE SingerId > 3")
        .await?;
    println!("{count} records deleted");
    Ok(count)
}
// [END spanner_postgresql_partitioned_dml]
