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

// [START job_search_update_job_with_field_mask]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::Job;
use google_cloud_wkt::FieldMask;

pub async fn sample(client: &JobService, job_name: &str) -> anyhow::Result<()> {
    let updated = client
        .update_job()
        .set_job(
            Job::new()
                .set_name(job_name)
                .set_title("Software Engineer (updated)"),
        )
        .set_update_mask(FieldMask::default().set_paths(["title"]))
        .send()
        .await?;

    println!("Job updated: {}", updated.name);
    println!("Title: {}", updated.title);
    Ok(())
}
// [END job_search_update_job_with_field_mask]
