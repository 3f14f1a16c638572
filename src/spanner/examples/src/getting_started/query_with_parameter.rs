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

// [START spanner_query_with_parameter]
use crate::data::{Client, Statement};

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let statement = Statement::new(
        "SELECT SingerId, FirstName, LastName FROM Singers WHERE LastName = @lastName",
    )
    .bind("lastName", "Garcia");
    let result = client.execute_query(statement).await?;
    for row in result.rows() {
        println!(
            "{} {} {}",
            row.get::<i64>("SingerId")?,
            row.get::<String>("FirstName")?,
            row.get::<String>("LastName")?
        );
    }
    Ok(())
}
// [END spanner_query_with_parameter]
