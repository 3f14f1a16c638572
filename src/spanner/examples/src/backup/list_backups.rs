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

// [START spanner_list_backups]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

/// Lists the backups of `database_id`, or all the backups in the instance if
/// `database_id` is `None`.
pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: Option<&str>,
) -> anyhow::Result<Vec<String>> {
    let filter = database_id
        .map(|id| format!("database:{id}"))
        .unwrap_or_default();
    let mut items = client
        .list_backups()
        .set_parent(format!("projects/{project_id}/instances/{instance_id}"))
        .set_filter(filter)
        .by_item();
    let mut names = Vec::new();
    while let Some(backup) = items.next().await.transpose()? {
        println!("{}", backup.name);
        names.push(backup.name);
    }
    Ok(names)
}
// [END spanner_list_backups]
