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

// [START spanner_update_data_with_json_column]
use crate::data::{Client, Mutation, Value};
use serde_json::json;

/// Writes `VenueDetails`, requires the `Venues` table and its JSON column.
pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let venues = [
        (1, json!({"rating": 9, "open": true})),
        (
            2,
            json!([
                {"name": "room 1", "open": true},
                {"name": "room 2", "open": false},
            ]),
        ),
        (3, json!({"name": null, "open": {"Monday": true, "Tuesday": false}, "tags": ["large", "airy"]})),
    ];
    let rows = venues.map(|(id, details)| {
        vec![
            Value::from(id),
            Value::json(&details),
            Value::commit_timestamp(),
        ]
    });
    let mutation = Mutation::insert_or_update(
        "Venues",
        ["VenueId", "VenueDetails", "LastUpdateTime"],
        rows,
    );
    client.apply([mutation]).await?;
    println!("Rows are updated.");
    Ok(())
}
// [END spanner_update_data_with_json_column]
