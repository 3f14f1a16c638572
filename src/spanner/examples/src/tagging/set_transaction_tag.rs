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

// [START spanner_set_transaction_tag]
use crate::data::{Client, QueryOptions, Statement, TransactionOptions};

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let mut transaction = client
        .begin_read_write_with(TransactionOptions::new().set_transaction_tag("app=cart,env=dev"))
        .await?;

    transaction
        .execute_update_with(
            "UPDATE Venues SET Capacity = CAST(Capacity/4 AS INT64) WHERE OutdoorVenue = false",
            QueryOptions::new().set_request_tag("app=cart,env=dev,action=update"),
        )
        .await?;
    println!("Venue capacities updated.");

    let statement = Statement::new(
        "INSERT INTO Venues (VenueId, VenueName, Capacity, OutdoorVenue, LastUpdateTime) \
         VALUES (@venueId, @venueName, @capacity, @outdoorVenue, PENDING_COMMIT_TIMESTAMP())",
    )
    .bind("venueId", 81)
    .bind("venueName", "Venue 81")
    .bind("capacity", 1440)
    .bind("outdoorVenue", true);
    transaction
        .execute_update_with(
            statement,
            QueryOptions::new().set_request_tag("app=cart,env=dev,action=insert"),
        )
        .await?;
    println!("New venue inserted.");

    transaction.commit().await?;
    Ok(())
}
// [END spanner_set_transaction_tag]
