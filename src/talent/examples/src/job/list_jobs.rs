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

// [START job_search_list_jobs]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_talent_v4::client::JobService;

pub async fn sample(
    client: &JobService,
    project_id: &str,
    tenant_id: &str,
    company_name: &str,
) -> anyhow::Result<()> {
    let mut jobs = client
        .list_jobs()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_filter(format!("companyName=\"{company_name}\""))
        .by_item();

    while let Some(job) = jobs.next().await.transpose()? {
        println!("Job name: {}", job.name);
        println!("Job requisition ID: {}", job.requisition_id);
        println!("Job title: {}", job.title);
        println!("Job description: {}", job.description);
    }
    Ok(())
}
// [END job_search_list_jobs]
