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

// [START spanner_query_data]
use crate::data::Client;

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let result = client
        .execute_query("SELECT SingerId, AlbumId, AlbumTitle FROM Albums")
        .await?;
    for row in result.rows() {
        println!(
            "{} {} {}",
            row.get::<i64>("SingerId")?,
            row.get::<i64>("AlbumId")?,
            row.get::<String>("AlbumTitle")?
        );
    }
    Ok(())
}
// [END spanner_query_data]
