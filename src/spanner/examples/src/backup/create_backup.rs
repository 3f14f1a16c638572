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

// [START spanner_create_backup]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Backup;
use google_cloud_wkt::Timestamp;

pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
    backup_id: &str,
    version_time: Timestamp,
) -> anyhow::Result<Backup> {
    let expire_time = crate::backup::seconds_from_now(crate::backup::BACKUP_EXPIRATION_SECONDS);
    println!("Backup operation in progress");
    let backup = client
        .create_backup()
        .set_parent(format!("projects/{project_id}/instances/{instance_id}"))
        .set_backup_id(backup_id)
        .set_backup(
            Backup::new()
                .set_database(format!(
                    "projects/{project_id}/instances/{instance_id}/databases/{database_id}"
                ))
                .set_expire_time(expire_time)
                .set_version_time(version_time),
        )
        .poller()
        .until_done()
        .await?;
    println!(
        "Backup {} of size {} bytes was created at {:?} for version of database at {:?}",
        backup.name, backup.size_bytes, backup.create_time, backup.version_time
    );
    Ok(backup)
}
// [END spanner_create_backup]
