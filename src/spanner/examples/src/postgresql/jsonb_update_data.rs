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

// [START spanner_postgresql_jsonb_update_data]
use crate::data::{Client, Mutation, Value};
use serde_json::json;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let rows = [
        (19, json!({"rating": 9, "open": true})),
        (
            4,
            json!([
                {"name": "room 1", "open": true},
                {"name": "room 2", "open": false}
            ]),
        ),
        (
            42,
            json!({
                "name": null,
                "open": {"Monday": true, "Tuesday": false},
                "tags": ["large", "airy"]
            }),
        ),
    ];
    // Unquoted identifiers are stored in lower case.
    client
        .apply([Mutation::insert_or_update(
            "venues",
            ["venueid", "venuedetails"],
            rows.iter()
                .map(|(id, details)| vec![Value::from(*id), Value::pg_jsonb(details)]),
        )])
        .await?;
    println!("VenueDetails successfully updated");
    Ok(())
}
// [END spanner_postgresql_jsonb_update_data]
