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

// [START spanner_postgresql_order_nulls]
use crate::data::{Client, Statement, Type, Value};

pub async fn sample(client: &Client) -> anyhow::Result<Vec<Vec<Option<String>>>> {
    let insert = "INSERT INTO Singers (SingerId, FirstName) VALUES ($1, $2)";
    let mut transaction = client.begin_read_write().await?;
    transaction
        .batch_update([
            Statement::new(insert).bind("p1", 51).bind("p2", "Alice"),
            Statement::new(insert).bind("p1", 52).bind("p2", "Bruce"),
            Statement::new(insert)
                .bind("p1", 53)
                .bind("p2", Value::Null(Type::string())),
        ])
        .await?;
    transaction.commit().await?;

    // PostgreSQL sorts NULL values last in ascending order, and first in
    // descending order, unless the query says otherwise.
    let queries = [
        "SELECT FirstName FROM Singers WHERE SingerId BETWEEN 51 AND 53 ORDER BY FirstName",
        "SELECT FirstName FROM Singers WHERE SingerId BETWEEN 51 AND 53 ORDER BY FirstName DESC",
        "SELECT FirstName FROM Singers WHERE SingerId BETWEEN 51 AND 53 ORDER BY FirstName NULLS FIRST",
        "SELECT FirstName FROM Singers WHERE SingerId BETWEEN 51 AND 53 ORDER BY FirstName DESC NULLS LAST",
    ];
    let mut orders = Vec::new();
    for query in queries {
        let result = client.execute_query(query).await?;
        let names = result
            .rows()
            .iter()
            .map(|row| row.get::<Option<String>>("firstname"))
            .collect::<Result<Vec<_>, _>>()?;
        let display = names
            .iter()
            .map(|n| n.as_deref().unwrap_or("NULL"))
            .collect::<Vec<_>>();
        println!("{}", display.join(", "));
        orders.push(names);
    }
    Ok(orders)
}
// [END spanner_postgresql_order_nulls]
