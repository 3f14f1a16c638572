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

pub mod add_and_drop_database_role;
pub mod add_column;
pub mod add_json_column;
pub mod alter_table_with_foreign_key_delete_cascade;
pub mod create_database;
pub mod create_database_with_default_leader;
pub mod create_table_with_foreign_key_delete_cascade;
pub mod create_venues_table;
pub mod drop_database;
pub mod drop_foreign_key_constraint_delete_cascade;
pub mod enable_fine_grained_access;
pub mod get_database_ddl;
pub mod list_database_operations;
pub mod list_database_roles;
pub mod list_databases;
pub mod update_database;
pub mod update_database_with_default_leader;

/// The tables used by most of the samples.
pub const SINGERS_AND_ALBUMS: [&str; 2] = [
    "CREATE TABLE Singers (
        SingerId   INT64 NOT NULL,
        FirstName  STRING(1024),
        LastName   STRING(1024),
        SingerInfo BYTES(MAX),
        FullName   STRING(2048) AS (ARRAY_TO_STRING([FirstName, LastName], \" \")) STORED
    ) PRIMARY KEY (SingerId)",
    "CREATE TABLE Albums (
        SingerId     INT64 NOT NULL,
        AlbumId      INT64 NOT NULL,
        AlbumTitle   STRING(MAX)
    ) PRIMARY KEY (SingerId, AlbumId),
    INTERLEAVE IN PARENT Singers ON DELETE CASCADE",
];
