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

// [START spanner_list_instance_config_operations]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;
use google_cloud_spanner_admin_instance_v1::model::CreateInstanceConfigMetadata;

pub async fn sample(client: &InstanceAdmin, project_id: &str) -> anyhow::Result<()> {
    let mut items = client
        .list_instance_config_operations()
        .set_parent(format!("projects/{project_id}"))
        .set_filter("(metadata.@type=type.googleapis.com/google.spanner.admin.instance.v1.CreateInstanceConfigMetadata)")
        .by_item();
    while let Some(operation) = items.next().await.transpose()? {
        let Some(metadata) = operation.metadata.as_ref() else {
            continue;
        };
        let metadata = metadata.to_msg::<CreateInstanceConfigMetadata>()?;
        let name = metadata
            .instance_config
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or_default();
        let percent = metadata
            .progress
            .as_ref()
            .map(|p| p.progress_percent)
            .unwrap_or_default();
        println!("List instance config operations {name} is {percent}% complete.");
    }
    Ok(())
}
// [END spanner_list_instance_config_operations]
