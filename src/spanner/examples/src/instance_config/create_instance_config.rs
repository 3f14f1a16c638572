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

// [START spanner_create_instance_config]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;
use google_cloud_spanner_admin_instance_v1::model::{InstanceConfig, instance_config};

/// Creates a user-managed configuration from `base_config_id`, adding its
/// first optional replica.
pub async fn sample(
    client: &InstanceAdmin,
    project_id: &str,
    config_id: &str,
    base_config_id: &str,
) -> anyhow::Result<InstanceConfig> {
    let base_config = client
        .get_instance_config()
        .set_name(format!("projects/{project_id}/instanceConfigs/{base_config_id}"))
        .send()
        .await?;
    let replicas = base_config
        .replicas
        .iter()
        .chain(base_config.optional_replicas.first())
        .cloned()
        .collect::<Vec<_>>();

    let config = client
        .create_instance_config()
        .set_parent(format!("projects/{project_id}"))
        .set_instance_config_id(config_id)
        .set_instance_config(
            InstanceConfig::new()
                .set_name(format!("projects/{project_id}/instanceConfigs/{config_id}"))
                .set_display_name("custom-rust-samples")
                .set_config_type(instance_config::Type::UserManaged)
                .set_replicas(replicas)
                .set_base_config(base_config.name)
                .set_labels([("cloud_spanner_samples", "true")]),
        )
        .poller()
        .until_done()
        .await?;
    println!("Created instance configuration {}", config.name);
    Ok(config)
}
// [END spanner_create_instance_config]
