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

// [START spanner_postgresql_insert_dml_returning]
use crate::data::Client;

/// Inserts four singers and returns their generated full names.
pub async fn sample(client: &Client) -> anyhow::Result<Vec<String>> {
    let mut transaction = client.begin_read_write().await?;
    let result = transaction
        .execute_query(
            "INSERT INTO Singers (SingerId, FirstName, LastName) VALUES \
             (12, 'Melissa', 'Garcia'), \
             (13, 'Russell', 'Morales'), \
             (14, 'Jacqueline', 'Long'), \
             (15, 'Dylan', 'Shaw') \
             RETURNING FullName",
        )
        .await?;
    transaction.commit().await?;
    let names = result
        .rows()
        .iter()
        .map(|row| row.get::<String>("fullname"))
        .collect::<Result<Vec<_>, _>>()?;
    for name in &names {
        println!("{name}");
    }
    println!("Inserted row(s) count: {}", result.row_count().unwrap_or_default());
    Ok(names)
}
// [END spanner_postgresql_insert_dml_returning]
