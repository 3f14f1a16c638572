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

// [START spanner_get_instance]
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;

pub async fn sample(client: &InstanceAdmin, project_id: &str, instance_id: &str) -> anyhow::Result<()> {
    let instance = client
        .get_instance()
        .set_name(format!("projects/{project_id}/instances/{instance_id}"))
        .send()
        .await?;
    println!(
        "Instance {} has display name {} and {} node(s)",
        instance.name, instance.display_name, instance.node_count
    );
    Ok(())
}
// [END spanner_get_instance]
