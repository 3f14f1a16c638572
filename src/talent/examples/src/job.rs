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

pub mod batch_create_jobs;
pub mod batch_delete_jobs;
pub mod batch_delete_jobs_by_filter;
pub mod batch_update_jobs;
pub mod create_featured_job;
pub mod create_job;
pub mod create_job_with_custom_attributes;
pub mod delete_job;
pub mod get_job;
pub mod list_jobs;
pub mod update_job;
pub mod update_job_with_field_mask;

use google_cloud_talent_v4::model::JobResult;

/// Prints the outcome of each job in a batch operation.
pub(crate) fn print_job_results(results: &[JobResult]) {
    for result in results {
        if let Some(job) = &result.job {
            println!("Job name: {}", job.name);
            println!("Job title: {}", job.title);
        }
        if let Some(status) = &result.status {
            println!("Status code: {}", status.code);
            println!("Status message: {}", status.message);
        }
    }
}
