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

// [START job_search_batch_create_jobs]
use google_cloud_lro::Poller;
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{Job, job};

/// Creates two jobs in a single long-running operation.
///
/// Returns the names of the jobs created successfully.
pub async fn sample(
    client: &JobService,
    project_id: &str,
    tenant_id: &str,
    company_name: &str,
    requisition_ids: [&str; 2],
) -> anyhow::Result<Vec<String>> {
    let [first, second] = requisition_ids;
    let application_info =
        job::ApplicationInfo::new().set_uris(["https://www.example.org/job-posting/123"]);
    let software_engineer = Job::new()
        .set_company(company_name)
        .set_requisition_id(first)
        .set_title("Software Engineer")
        .set_description("This is a description of this <i>wonderful</i> job!")
        .set_application_info(application_info.clone())
        .set_addresses(["1600 Amphitheatre Parkway, Mountain View, CA 94043"])
        .set_language_code("en-US");
    let quality_assurance = Job::new()
        .set_company(company_name)
        .set_requisition_id(second)
        .set_title("Quality Assurance")
        .set_description("This is a description of this <i>wonderful</i> job!")
        .set_application_info(application_info)
        .set_addresses(["111 8th Avenue, New York, NY 10011"])
        .set_language_code("en-US");

    let response = client
        .batch_create_jobs()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_jobs([software_engineer, quality_assurance])
        .poller()
        .until_done()
        .await?;

    println!("Batch create jobs completed");
    crate::job::print_job_results(&response.job_results);
    let names = response
        .job_results
        .into_iter()
        .filter_map(|r| r.job)
        .map(|j| j.name)
        .collect();
    Ok(names)
}
// [END job_search_batch_create_jobs]
