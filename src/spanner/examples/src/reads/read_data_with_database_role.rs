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

// [START spanner_read_data_with_database_role]
use crate::data::Client;

pub async fn sample(
    project_id: &str,
    instance_id: &str,
    database_id: &str,
    database_role: &str,
) -> anyhow::Result<()> {
    let client = Client::builder(format!(
        "projects/{project_id}/instances/{instance_id}/databases/{database_id}"
    ))
    .with_database_role(database_role)
    .build()
    .await?;
    let result = client.execute_query("SELECT * FROM Singers").await?;
    for row in result.rows() {
        println!("{row}");
    }
    Ok(())
}
// [END spanner_read_data_with_database_role]
