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

// [START spanner_postgresql_numeric_data_type]
use crate::data::{Client, Statement, Value};

/// Queries the singers with a rating above 3, using a `numeric` parameter.
pub async fn sample(client: &Client) -> anyhow::Result<Vec<i64>> {
    let statement = Statement::new("SELECT SingerId, Rating FROM Singers WHERE Rating > $1")
        .bind("p1", Value::pg_numeric("3"));
    let result = client.execute_query(statement).await?;
    let mut singers = Vec::new();
    for row in result.rows() {
        let singer_id = row.get::<i64>("singerid")?;
        println!("SingerId: {singer_id}, Rating: {}", row.get::<String>("rating")?);
        singers.push(singer_id);
    }
    Ok(singers)
}
// [END spanner_postgresql_numeric_data_type]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::client::tests::{SESSION, expect_session, test_client};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    #[tokio::test]
    async fn pg_numeric_parameter() -> anyhow::Result<()> {
        let server = Server::run();
        expect_session(&server);
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v1/{SESSION}:executeSql"))),
                request::body(json_decoded(eq(json!({
                    "transaction": {"singleUse": {"readOnly": {"strong": true, "returnReadTimestamp": true}}},
                    "sql": "SELECT SingerId, Rating FROM Singers WHERE Rating > $1",
                    "params": {"p1": "3"},
                    "paramTypes": {"p1": {"code": "NUMERIC", "typeAnnotation": "PG_NUMERIC"}},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "metadata": {"rowType": {"fields": [
                    {"name": "singerid", "type": {"code": "INT64"}},
                    {"name": "rating", "type": {"code": "NUMERIC", "typeAnnotation": "PG_NUMERIC"}},
                ]}},
                "rows": [["1", "4"], ["7", "3.5"]],
            }))),
        );

        let client = test_client(&server).await?;
        let got = sample(&client).await?;
        assert_eq!(got, vec![1, 7]);
        Ok(())
    }
}
