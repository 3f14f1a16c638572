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

// [START spanner_postgresql_information_schema]
use crate::data::Client;

/// Lists the user tables in the database.
pub async fn sample(client: &Client) -> anyhow::Result<Vec<String>> {
    // The column names of information_schema tables are lower case, and
    // the PostgreSQL dialect adds columns such as `user_defined_type_name`.
    let result = client
        .execute_query(
            "SELECT table_schema, table_name, user_defined_type_catalog, \
             user_defined_type_schema, user_defined_type_name \
             FROM INFORMATION_SCHEMA.tables \
             WHERE table_schema = 'public'",
        )
        .await?;
    let mut tables = Vec::new();
    for row in result.rows() {
        let schema = row.get::<String>("table_schema")?;
        let name = row.get::<String>("table_name")?;
        let user_defined_type = match row.get::<Option<String>>("user_defined_type_name")? {
            None => "undefined".to_string(),
            Some(type_name) => format!(
                "{}.{}.{type_name}",
                row.get::<Option<String>>("user_defined_type_catalog")?
                    .unwrap_or_default(),
                row.get::<Option<String>>("user_defined_type_schema")?
                    .unwrap_or_default()
            ),
        };
        println!("Table: {schema}.{name} (User defined type: {user_defined_type})");
        tables.push(name);
    }
    Ok(tables)
}
// [END spanner_postgresql_information_schema]
