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

// [START spanner_create_database]
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Database;

pub async fn sample(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
) -> anyhow::Result<Database> {
    println!("Waiting for create database operation to complete");
    let database = client
        .create_database()
        .set_parent(format!("projects/{project_id}/instances/{instance_id}"))
        .set_create_statement(format!("CREATE DATABASE `{database_id}`"))
        .set_extra_statements(crate::database::SINGERS_AND_ALBUMS)
        .poller()
        .until_done()
        .await?;
    println!("Created database {database_id} on instance {instance_id}");
    Ok(database)
}
// [END spanner_create_database]
