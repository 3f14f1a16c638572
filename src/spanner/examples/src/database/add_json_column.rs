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

// [START spanner_add_json_column]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
) -> anyhow::Result<()> {
    client
        .update_database_ddl()
        .set_database(format!(
            "projects/{project_id}/instances/{instance_id}/databases/{database_id}"
        ))
        .set_statements(["ALTER TABLE Venues ADD COLUMN VenueDetails JSON"])
        .poller()
        .until_done()
        .await?;
    println!("Added VenueDetails column to Venues table in database {database_id}");
    Ok(())
}
// [END spanner_add_json_column]
