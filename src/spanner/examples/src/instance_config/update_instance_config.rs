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

// [START spanner_update_instance_config]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;
use google_cloud_spanner_admin_instance_v1::model::InstanceConfig;
use google_cloud_wkt::FieldMask;

pub async fn sample(client: &InstanceAdmin, project_id: &str, config_id: &str) -> anyhow::Result<()> {
    let config = client
        .update_instance_config()
        .set_instance_config(
            InstanceConfig::new()
                .set_name(format!("projects/{project_id}/instanceConfigs/{config_id}"))
                .set_display_name("updated custom instance config")
                .set_labels([("cloud_spanner_samples", "true"), ("updated", "true")]),
        )
        .set_update_mask(FieldMask::default().set_paths(["display_name", "labels"]))
        .poller()
        .until_done()
        .await?;
    println!("Updated instance configuration {}", config.name);
    Ok(())
}
// [END spanner_update_instance_config]
