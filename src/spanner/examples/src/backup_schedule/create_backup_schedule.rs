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

// [START spanner_create_backup_schedule]
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::{
    BackupSchedule, BackupScheduleSpec, CreateBackupEncryptionConfig, CrontabSpec,
    IncrementalBackupSpec, create_backup_encryption_config::EncryptionType,
};
use google_cloud_wkt::Duration;

/// Creates a schedule for incremental backups, every day at 12:30 UTC.
pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
    schedule_id: &str,
) -> anyhow::Result<BackupSchedule> {
    let schedule = client
        .create_backup_schedule()
        .set_parent(format!(
            "projects/{project_id}/instances/{instance_id}/databases/{database_id}"
        ))
        .set_backup_schedule_id(schedule_id)
        .set_backup_schedule(
            BackupSchedule::new()
                .set_spec(BackupScheduleSpec::new().set_cron_spec(CrontabSpec::new().set_text("30 12 * * *")))
                .set_retention_duration(Duration::clamp(24 * 60 * 60, 0))
                .set_encryption_config(
                    CreateBackupEncryptionConfig::new()
                        .set_encryption_type(EncryptionType::UseDatabaseEncryption),
                )
                .set_incremental_backup_spec(IncrementalBackupSpec::new()),
        )
        .send()
        .await?;
    println!("Created backup schedule for {}", schedule.name);
    Ok(schedule)
}
// [END spanner_create_backup_schedule]
