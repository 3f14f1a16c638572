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

// [START spanner_insert_data]
use crate::data::{Client, Mutation, Value};

pub async fn sample(client: &Client) -> anyhow::Result<()> {
    let singers = [
        (1, "Marc", "Richards"),
        (2, "Catalina", "Smith"),
        (3, "Alice", "Trentor"),
        (4, "Lea", "Martin"),
        (5, "David", "Lomond"),
    ];
    let albums = [
        (1, 1, "Total Junk"),
        (1, 2, "Go, Go, Go"),
        (2, 1, "Green"),
        (2, 2, "Forever Hold Your Peace"),
        (2, 3, "Terrified"),
    ];
    let mutations = [
        Mutation::insert(
            "Singers",
            ["SingerId", "FirstName", "LastName"],
            singers
                .map(|(id, first, last)| vec![Value::from(id), Value::from(first), Value::from(last)]),
        ),
        Mutation::insert(
            "Albums",
            ["SingerId", "AlbumId", "AlbumTitle"],
            albums.map(|(singer, album, title)| {
                vec![Value::from(singer), Value::from(album), Value::from(title)]
            }),
        ),
    ];
    client.apply(mutations).await?;
    println!("Inserted data");
    Ok(())
}
// [END spanner_insert_data]
