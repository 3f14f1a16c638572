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

// [START spanner_enable_fine_grained_access]
use google_cloud_iam_v1::model::{Binding, GetPolicyOptions};
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_type::model::Expr;

/// Grants `iam_member` access to the database role `database_role`.
///
/// The `iam_member` must have the form `user:{email}`,
/// `serviceAccount:{email}`, or `group:{email}`.
pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
    iam_member: &str,
    database_role: &str,
    title: &str,
) -> anyhow::Result<()> {
    let database = format!("projects/{project_id}/instances/{instance_id}/databases/{database_id}");
    let mut policy = client
        .get_iam_policy()
        .set_resource(&database)
        .set_options(GetPolicyOptions::new().set_requested_policy_version(3))
        .send()
        .await?;

    // IAM conditions require policy version 3.
    policy.version = 3;
    policy.bindings.push(
        Binding::new()
            .set_role("roles/spanner.fineGrainedAccessUser")
            .set_members([iam_member])
            .set_condition(
                Expr::new()
                    .set_title(title)
                    .set_expression(format!(
                        "resource.name.endsWith('/databaseRoles/{database_role}')"
                    )),
            ),
    );
    client
        .set_iam_policy()
        .set_resource(&database)
        .set_policy(policy)
        .send()
        .await?;
    println!("Enabled fine-grained access in IAM.");
    Ok(())
}
// [END spanner_enable_fine_grained_access]
