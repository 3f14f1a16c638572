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

// [START spanner_create_backup_with_encryption_key]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::{
    Backup, CreateBackupEncryptionConfig, create_backup_encryption_config::EncryptionType,
};

/// Creates a backup with an explicit encryption configuration.
///
/// Set `kms_key_name` to use a customer-managed key, or leave it empty to
/// use Google default encryption.
pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
    backup_id: &str,
    kms_key_name: Option<&str>,
) -> anyhow::Result<Backup> {
    let encryption_config = match kms_key_name {
        Some(key) => CreateBackupEncryptionConfig::new()
            .set_encryption_type(EncryptionType::CustomerManagedEncryption)
            .set_kms_key_name(key),
        None => CreateBackupEncryptionConfig::new()
            .set_encryption_type(EncryptionType::GoogleDefaultEncryption),
    };
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
                .set_expire_time(expire_time),
        )
        .set_encryption_config(encryption_config)
        .poller()
        .until_done()
        .await?;
    println!(
        "Backup {} of size {} bytes was created at {:?} using encryption {:?}",
        backup.name, backup.size_bytes, backup.create_time, backup.encryption_info
    );
    Ok(backup)
}
// [END spanner_create_backup_with_encryption_key]
