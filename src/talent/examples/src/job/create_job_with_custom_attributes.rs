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

// [START job_search_create_job_custom_attributes]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{CustomAttribute, Job, job};

pub async fn sample(
    client: &JobService,
    project_id: &str,
    tenant_id: &str,
    company_name: &str,
    requisition_id: &str,
) -> anyhow::Result<Job> {
    let job = Job::new()
        .set_company(company_name)
        .set_requisition_id(requisition_id)
        .set_title("Software Engineer")
        .set_description("This is a description of this <i>wonderful</i> job!")
        .set_application_info(
            job::ApplicationInfo::new().set_uris(["https://www.example.org/job-posting/123"]),
        )
        .set_language_code("en-US")
        .set_custom_attributes([
            (
                "someFieldName1",
                CustomAttribute::new()
                    .set_string_values(["value1"])
                    .set_filterable(true),
            ),
            (
                "someFieldName2",
                CustomAttribute::new()
                    .set_long_values([256_i64])
                    .set_filterable(true),
            ),
            (
                "someFieldLong",
                CustomAttribute::new()
                    .set_long_values([100_i64])
                    .set_filterable(true),
            ),
        ]);

    let job = client
        .create_job()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_job(job)
        .send()
        .await?;

    println!("Created job: {}", job.name);
    Ok(job)
}
// [END job_search_create_job_custom_attributes]
