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

// [START spanner_query_with_json_parameter]
use crate::data::{Client, Statement, Value};
use serde_json::json;

pub async fn sample(client: &Client) -> anyhow::Result<Vec<i64>> {
    let statement = Statement::new(
        "SELECT VenueId, VenueDetails FROM Venues WHERE JSON_VALUE(VenueDetails, '$.rating') = JSON_VALUE(@details, '$.rating')",
    )
    .bind("details", Value::json(&json!({"rating": 9})));
    let result = client.execute_query(statement).await?;
    let mut ids = Vec::new();
    for row in result.rows() {
        let id = row.get::<i64>("VenueId")?;
        let details = row.get::<serde_json::Value>("VenueDetails")?;
        println!("VenueId: {id}, VenueDetails: {details}");
        ids.push(id);
    }
    Ok(ids)
}
// [END spanner_query_with_json_parameter]
