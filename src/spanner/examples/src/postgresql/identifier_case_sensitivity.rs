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

// [START spanner_postgresql_identifier_case_sensitivity]
use crate::data::{Client, Mutation, Statement, Value};
use chrono::{TimeZone, Utc};
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;

pub async fn sample(
    admin: &DatabaseAdmin,
    client: &Client,
    project_id: &str,
    instance_id: &str,
    database_id: &str,
) -> anyhow::Result<()> {
    // Quoted identifiers keep their case, unquoted identifiers are folded
    // to lower case.
    admin
        .update_database_ddl()
        .set_database(format!(
            "projects/{project_id}/instances/{instance_id}/databases/{database_id}"
        ))
        .set_statements([r#"CREATE TABLE Concerts (
            ConcertId  bigint NOT NULL PRIMARY KEY,
            "Location" varchar(1024) NOT NULL,
            "Time"     timestamptz NOT NULL
        )"#])
        .poller()
        .until_done()
        .await?;
    println!("Created table with quoted identifiers in database {database_id}");

    let time = Utc.with_ymd_and_hms(2022, 3, 11, 0, 0, 0).single();
    let time = time.ok_or_else(|| anyhow::anyhow!("invalid concert time"))?;
    // Mutations must use the column names as stored: lower case for
    // unquoted identifiers, the exact case for quoted identifiers.
    client
        .apply([Mutation::insert(
            "concerts",
            ["concertid", "Location", "Time"],
            [vec![Value::from(1), Value::from("Venue 1"), Value::from(time)]],
        )])
        .await?;

    let result = client.execute_query("SELECT * FROM Concerts").await?;
    for row in result.rows() {
        // The column names in the result are also case-sensitive.
        println!(
            "ConcertId: {}, Location: {}, Time: {}",
            row.get::<i64>("concertid")?,
            row.get::<String>("Location")?,
            row.get::<Value>("Time")?
        );
    }

    // Aliases are also identifiers, and quoted aliases keep their case.
    let result = client
        .execute_query(r#"SELECT concertid AS "ConcertId", "Location" AS "venue", "Time" FROM Concerts"#)
        .await?;
    for row in result.rows() {
        println!(
            "ConcertId: {}, Venue: {}, Time: {}",
            row.get::<i64>("ConcertId")?,
            row.get::<String>("venue")?,
            row.get::<Value>("Time")?
        );
    }

    let mut transaction = client.begin_read_write().await?;
    let count = transaction
        .execute_update(
            Statement::new(r#"INSERT INTO Concerts (ConcertId, "Location", "Time") VALUES ($1, $2, $3)"#)
                .bind("p1", 2)
                .bind("p2", "Venue 2")
                .bind("p3", time),
        )
        .await?;
    transaction.commit().await?;
    println!("Inserted {count} row(s)");
    Ok(())
}
// [END spanner_postgresql_identifier_case_sensitivity]
