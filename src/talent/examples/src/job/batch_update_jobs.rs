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

// [START job_search_batch_update_jobs]
use google_cloud_lro::Poller;
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::Job;
use google_cloud_wkt::FieldMask;

pub async fn sample(
    client: &JobService,
    project_id: &str,
    tenant_id: &str,
    job_names: &[String],
) -> anyhow::Result<()> {
    let jobs = job_names.iter().map(|name| {
        Job::new()
            .set_name(name)
            .set_description("This job was updated in a batch")
    });

    let response = client
        .batch_update_jobs()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_jobs(jobs)
        .set_update_mask(FieldMask::default().set_paths(["description"]))
        .poller()
        .until_done()
        .await?;

    println!("Batch update jobs completed");
    crate::job::print_job_results(&response.job_results);
    Ok(())
}
// [END job_search_batch_update_jobs]
