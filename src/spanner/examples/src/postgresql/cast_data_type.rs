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

// [START spanner_postgresql_cast_data_type]
use crate::data::Client;
use chrono::{DateTime, Utc};

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    // The `::` operator casts a value to a different type.
    let result = client
        .execute_query(
            "SELECT 1::varchar AS str, '2'::int AS int, 3::decimal AS dec, \
             '4'::bytea AS bytes, 5::float AS float, 'true'::bool AS bool, \
             '2021-11-03T09:35:01UTC'::timestamptz AS timestamp",
        )
        .await?;
    for row in result.rows() {
        println!("String: {}", row.get::<String>("str")?);
        println!("Int: {}", row.get::<i64>("int")?);
        println!("Decimal: {}", row.get::<String>("dec")?);
        println!("Bytes: {:?}", row.get::<bytes::Bytes>("bytes")?);
        println!("Float: {}", row.get::<f64>("float")?);
        println!("Bool: {}", row.get::<bool>("bool")?);
        println!("Timestamp: {}", row.get::<DateTime<Utc>>("timestamp")?);
    }
    Ok(())
}
// [END spanner_postgresql_cast_data_type]
