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

// [START spanner_postgresql_functions]
use crate::data::Client;
use chrono::{DateTime, Utc};

pub async fn sample(client: &Client) -> anyhow::Result<Option<DateTime<Utc>>> {
    // Spanner PostgreSQL supports a subset of the PostgreSQL functions,
    // `to_timestamp` converts Unix epoch seconds to a timestamptz value.
    let result = client
        .execute_query("SELECT to_timestamp(1284352323) AS t")
        .await?;
    let mut timestamp = None;
    for row in result.rows() {
        let t = row.get::<DateTime<Utc>>("t")?;
        println!("1284352323 seconds after epoch is {t}");
        timestamp = Some(t);
    }
    Ok(timestamp)
}
// [END spanner_postgresql_functions]
