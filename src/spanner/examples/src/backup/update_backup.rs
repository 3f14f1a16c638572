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

// [START spanner_update_backup]
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Backup;
use google_cloud_wkt::FieldMask;

/// Extends the expiration time of a backup by 30 days.
pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    backup_id: &str,
) -> anyhow::Result<Backup> {
    let name = format!("projects/{project_id}/instances/{instance_id}/backups/{backup_id}");
    let backup = client.get_backup().set_name(&name).send().await?;
    let current = backup
        .expire_time
        .map(|t| t.seconds())
        .unwrap_or_else(|| chrono::Utc::now().timestamp());
    let expire_time = google_cloud_wkt::Timestamp::clamp(current + 30 * 24 * 60 * 60, 0);

    let backup = client
        .update_backup()
        .set_backup(Backup::new().set_name(name).set_expire_time(expire_time))
        .set_update_mask(FieldMask::default().set_paths(["expire_time"]))
        .send()
        .await?;
    println!(
        "Expiration time of backup {} updated to {:?}",
        backup.name, backup.expire_time
    );
    Ok(backup)
}
// [END spanner_update_backup]
