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

// [START spanner_copy_backup]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Backup;

pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    backup_id: &str,
    source_backup_id: &str,
) -> anyhow::Result<Backup> {
    let expire_time = crate::backup::seconds_from_now(crate::backup::BACKUP_EXPIRATION_SECONDS);
    println!("Copy backup operation in progress");
    let backup = client
        .copy_backup()
        .set_parent(format!("projects/{project_id}/instances/{instance_id}"))
        .set_backup_id(backup_id)
        .set_source_backup(format!(
            "projects/{project_id}/instances/{instance_id}/backups/{source_backup_id}"
        ))
        .set_expire_time(expire_time)
        .poller()
        .until_done()
        .await?;
    println!(
        "Backup {} of size {} bytes was copied at {:?} from {source_backup_id} for version {:?}",
        backup.name, backup.size_bytes, backup.create_time, backup.version_time
    );
    Ok(backup)
}
// [END spanner_copy_backup]
