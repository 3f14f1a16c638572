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

// [START spanner_add_and_drop_database_role]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
) -> anyhow::Result<()> {
    let database = format!("projects/{project_id}/instances/{instance_id}/databases/{database_id}");
    client
        .update_database_ddl()
        .set_database(&database)
        .set_statements([
            "CREATE ROLE new_parent",
            "GRANT SELECT ON TABLE Singers TO ROLE new_parent",
            "CREATE ROLE new_child",
            "GRANT ROLE new_parent TO ROLE new_child",
        ])
        .poller()
        .until_done()
        .await?;
    println!("Created roles new_parent and new_child and granted privileges");

    client
        .update_database_ddl()
        .set_database(&database)
        .set_statements(["REVOKE ROLE new_parent FROM ROLE new_child", "DROP ROLE new_child"])
        .poller()
        .until_done()
        .await?;
    println!("Revoked privileges and dropped role new_child");
    Ok(())
}
// [END spanner_add_and_drop_database_role]
