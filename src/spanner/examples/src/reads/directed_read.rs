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

// [START spanner_directed_read]
use crate::data::{Client, DirectedReadOptions, QueryOptions, ReplicaSelection, ReplicaType};

pub async fn sample(project_id: &str, instance_id: &str, database_id: &str) -> anyhow::Result<()> {
    // All the single-use and read-only queries of this client prefer the
    // replicas in us-east4, and fall back to other replicas if needed.
    let client = Client::builder(format!(
        "projects/{project_id}/instances/{instance_id}/databases/{database_id}"
    ))
    .with_directed_read_options(DirectedReadOptions::include_replicas(
        [ReplicaSelection::new().set_location("us-east4")],
        false,
    ))
    .build()
    .await?;

    // The request-level options replace the client-level options. This
    // query only uses READ_WRITE replicas, and fails if none is available.
    let options = QueryOptions::new().set_directed_read_options(
        DirectedReadOptions::include_replicas(
            [ReplicaSelection::new().set_type(ReplicaType::ReadWrite)],
            true,
        ),
    );
    let result = client
        .execute_query_with("SELECT SingerId, AlbumId, AlbumTitle FROM Albums", options)
        .await?;
    for row in result.rows() {
        println!(
            "SingerId: {}, AlbumId: {}, AlbumTitle: {}",
            row.get::<i64>("SingerId")?,
            row.get::<i64>("AlbumId")?,
            row.get::<String>("AlbumTitle")?
        );
    }
    println!("Successfully executed read-only query with directed read options");
    Ok(())
}
// [END spanner_directed_read]
