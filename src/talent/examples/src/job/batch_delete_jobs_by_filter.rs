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

// [START job_search_batch_delete_job_by_filter]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_lro::Poller;
use google_cloud_talent_v4::client::JobService;

/// Deletes all the jobs matching `filter`.
///
/// The filter uses the `list_jobs()` syntax, for example:
/// `companyName = "projects/p/tenants/t/companies/c" AND requisitionId = "req-1"`.
pub async fn sample(
    client: &JobService,
    project_id: &str,
    tenant_id: &str,
    filter: &str,
) -> anyhow::Result<()> {
    let parent = format!("projects/{project_id}/tenants/{tenant_id}");
    let mut jobs = client
        .list_jobs()
        .set_parent(&parent)
        .set_filter(filter)
        .by_item();
    let mut names = Vec::new();
    while let Some(job) = jobs.next().await.transpose()? {
        names.push(job.name);
    }
    if names.is_empty() {
        println!("No jobs match the filter");
        return Ok(());
    }

    client
        .batch_delete_jobs()
        .set_parent(parent)
        .set_names(&names)
        .poller()
        .until_done()
        .await?;

    println!("Batch deleted jobs from filter");
    Ok(())
}
// [END job_search_batch_delete_job_by_filter]
