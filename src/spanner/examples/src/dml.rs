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

pub mod batch_dml;
pub mod delete_dml_returning;
pub mod delete_using_dml;
pub mod dml_with_parameters;
pub mod insert_dml_returning;
pub mod partitioned_dml;
pub mod update_dml_returning;
pub mod update_using_dml;
pub mod write_using_dml;
