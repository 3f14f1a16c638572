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

// [START spanner_query_information_schema_database_options]
use crate::data::Client;

pub async fn sample(client: &Client) -> anyhow::Result<Option<String>> {
    let result = client
        .execute_query(
            "SELECT s.OPTION_NAME, s.OPTION_VALUE \
             FROM INFORMATION_SCHEMA.DATABASE_OPTIONS s \
             WHERE s.OPTION_NAME = 'default_leader'",
        )
        .await?;
    let leader = match result.rows().first() {
        Some(row) => Some(row.get::<String>("OPTION_VALUE")?),
        None => None,
    };
    match &leader {
        Some(l) => println!("The default_leader for {} is {l}", client.database()),
        None => println!("Database {} does not have a default leader", client.database()),
    }
    Ok(leader)
}
// [END spanner_query_information_schema_database_options]
