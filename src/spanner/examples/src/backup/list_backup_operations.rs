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

// [START spanner_list_backup_operations]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::{CopyBackupMetadata, CreateBackupMetadata};

pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
    backup_id: &str,
) -> anyhow::Result<()> {
    let parent = format!("projects/{project_id}/instances/{instance_id}");
    let mut items = client
        .list_backup_operations()
        .set_parent(&parent)
        .set_filter(format!(
            "(metadata.@type:type.googleapis.com/google.spanner.admin.database.v1.CreateBackupMetadata) AND (metadata.database:{database_id})"
        ))
        .by_item();
    while let Some(operation) = items.next().await.transpose()? {
        let Some(metadata) = operation.metadata.as_ref() else {
            continue;
        };
        let metadata = metadata.to_msg::<CreateBackupMetadata>()?;
        let percent = metadata
            .progress
            .as_ref()
            .map(|p| p.progress_percent)
            .unwrap_or_default();
        println!(
            "Backup {} on database {} is {percent}% complete",
            metadata.name, metadata.database
        );
    }

    let mut items = client
        .list_backup_operations()
        .set_parent(&parent)
        .set_filter(format!(
            "(metadata.@type:type.googleapis.com/google.spanner.admin.database.v1.CopyBackupMetadata) AND (metadata.source_backup:{backup_id})"
        ))
        .by_item();
    while let Some(operation) = items.next().await.transpose()? {
        let Some(metadata) = operation.metadata.as_ref() else {
            continue;
        };
        let metadata = metadata.to_msg::<CopyBackupMetadata>()?;
        let percent = metadata
            .progress
            .as_ref()
            .map(|p| p.progress_percent)
            .unwrap_or_default();
        println!(
            "Backup {} copied from {} is {percent}% complete",
            metadata.name, metadata.source_backup
        );
    }
    Ok(())
}
// [END spanner_list_backup_operations]
