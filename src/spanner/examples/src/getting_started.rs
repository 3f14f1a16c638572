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

pub mod insert_data;
pub mod query_data;
pub mod query_data_with_new_column;
pub mod query_with_parameter;
pub mod quickstart;
pub mod read_data;
pub mod read_only_transaction;
pub mod read_write_transaction;
pub mod set_max_commit_delay;
pub mod update_data;
