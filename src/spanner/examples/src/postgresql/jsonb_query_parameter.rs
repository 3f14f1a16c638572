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

// [START spanner_postgresql_jsonb_query_parameter]
use crate::data::{Client, Statement};

/// Returns the ids of the venues rated above 2.
pub async fn sample(client: &Client) -> anyhow::Result<Vec<i64>> {
    let statement = Statement::new(
        "SELECT venueid, venuedetails FROM Venues WHERE CAST(venuedetails ->> 'rating' AS INTEGER) > $1",
    )
    .bind("p1", 2);
    let result = client.execute_query(statement).await?;
    let mut venues = Vec::new();
    for row in result.rows() {
        let venue_id = row.get::<i64>("venueid")?;
        let details = row.get::<serde_json::Value>("venuedetails")?;
        println!("VenueId: {venue_id}, VenueDetails: {details}");
        venues.push(venue_id);
    }
    Ok(venues)
}
// [END spanner_postgresql_jsonb_query_parameter]
