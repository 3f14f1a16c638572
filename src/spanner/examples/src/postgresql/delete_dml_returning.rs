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

// [START spanner_postgresql_delete_dml_returning]
use crate::data::Client;

pub async fn sample(client: &Client) -> anyhow::Result<Vec<(i64, String)>> {
    let mut transaction = client.begin_read_write().await?;
    let result = transaction
        .execute_query("DELETE FROM Singers WHERE FirstName = 'Alice' RETURNING SingerId, FullName")
        .await?;
    transaction.commit().await?;
    let mut deleted = Vec::new();
    for row in result.rows() {
        let singer = (row.get::<i64>("singerid")?, row.get::<String>("fullname")?);
        println!("{} {}", singer.0, singer.1);
        deleted.push(singer);
    }
    println!("Deleted row(s) count: {}", result.row_count().unwrap_or_default());
    Ok(deleted)
}
// [END spanner_postgresql_delete_dml_returning]
