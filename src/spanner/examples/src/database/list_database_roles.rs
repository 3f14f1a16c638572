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

// [START spanner_list_database_roles]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
) -> anyhow::Result<Vec<String>> {
    let mut items = client
        .list_database_roles()
        .set_parent(format!(
            "projects/{project_id}/instances/{instance_id}/databases/{database_id}"
        ))
        .by_item();
    let mut roles = Vec::new();
    println!("List of Database roles:");
    while let Some(role) = items.next().await.transpose()? {
        println!("{}", role.name);
        roles.push(role.name);
    }
    Ok(roles)
}
// [END spanner_list_database_roles]
