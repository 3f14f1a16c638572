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

// [START spanner_create_instance_partition]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;
use google_cloud_spanner_admin_instance_v1::model::InstancePartition;

pub async fn sample(
    client: &InstanceAdmin,
    project_id: &str,
    instance_id: &str,
    partition_id: &str,
) -> anyhow::Result<InstancePartition> {
    let partition = client
        .create_instance_partition()
        .set_parent(format!("projects/{project_id}/instances/{instance_id}"))
        .set_instance_partition_id(partition_id)
        .set_instance_partition(
            InstancePartition::new()
                .set_display_name("Test Instance Partition")
                .set_config(format!("projects/{project_id}/instanceConfigs/nam3"))
                .set_node_count(1),
        )
        .poller()
        .until_done()
        .await?;
    println!("Created instance partition {}", partition.name);
    Ok(partition)
}
// [END spanner_create_instance_partition]
