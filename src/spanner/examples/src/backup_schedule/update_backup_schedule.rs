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

// [START spanner_update_backup_schedule]
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::{
    BackupSchedule, BackupScheduleSpec, CreateBackupEncryptionConfig, CrontabSpec,
    create_backup_encryption_config::EncryptionType,
};
use google_cloud_wkt::{Duration, FieldMask};

/// Moves the schedule to 10:45 UTC, keeps the backups for two days, and
/// switches to Google default encryption.
pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
    schedule_id: &str,
) -> anyhow::Result<BackupSchedule> {
    let schedule = client
        .update_backup_schedule()
        .set_backup_schedule(
            BackupSchedule::new()
                .set_name(format!(
                    "projects/{project_id}/instances/{instance_id}/databases/{database_id}/backupSchedules/{schedule_id}"
                ))
                .set_spec(BackupScheduleSpec::new().set_cron_spec(CrontabSpec::new().set_text("45 10 * * *")))
                .set_retention_duration(Duration::clamp(2 * 24 * 60 * 60, 0))
                .set_encryption_config(
                    CreateBackupEncryptionConfig::new()
                        .set_encryption_type(EncryptionType::GoogleDefaultEncryption),
                ),
        )
        .set_update_mask(FieldMask::default().set_paths([
            "retention_duration",
            "spec.cron_spec.text",
            "encryption_config",
        ]))
        .send()
        .await?;
    println!("Updated backup schedule for {}", schedule.name);
    Ok(schedule)
}
// [END spanner_update_backup_schedule]
