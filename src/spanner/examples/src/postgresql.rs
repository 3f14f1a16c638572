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

//! Samples for PostgreSQL-dialect databases.
//!
//! PostgreSQL-dialect statements use positional parameters (`$1`, `$2`),
//! bound with the names `p1`, `p2`. Unquoted identifiers are case-folded
//! to lower case, including the column names in query results.

pub mod add_column;
pub mod batch_dml;
pub mod cast_data_type;
pub mod connect;
pub mod create_database;
pub mod create_sequence;
pub mod create_storing_index;
pub mod create_table;
pub mod delete_dml_returning;
pub mod dml_getting_started_update;
pub mod dml_with_parameters;
pub mod functions;
pub mod identifier_case_sensitivity;
pub mod information_schema;
pub mod insert_dml_returning;
pub mod interleaved_table;
pub mod jsonb_add_column;
pub mod jsonb_query_parameter;
pub mod jsonb_update_data;
pub mod numeric_data_type;
pub mod order_nulls;
pub mod partitioned_dml;
pub mod query_parameter;
pub mod update_dml_returning;
