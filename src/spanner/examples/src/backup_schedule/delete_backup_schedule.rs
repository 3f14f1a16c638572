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

// [START spanner_delete_backup_schedule]
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
    schedule_id: &str,
) -> anyhow::Result<()> {
    let name = format!(
        "projects/{project_id}/instances/{instance_id}/databases/{database_id}/backupSchedules/{schedule_id}"
    );
    client.delete_backup_schedule().set_name(&name).send().await?;
    println!("Deleted backup schedule for {name}");
    Ok(())
}
// [END spanner_delete_backup_schedule]
