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

// [START job_search_get_job]
use crate::names::JobName;
use google_cloud_gax::error::rpc::Code;
use google_cloud_talent_v4::client::JobService;

pub async fn sample(client: &JobService, job_name: &str) -> anyhow::Result<()> {
    let name = match job_name.parse::<JobName>() {
        Ok(name) => name,
        Err(e) => {
            println!("Invalid jobName format: {e}");
            return Ok(());
        }
    };

    let job = match client.get_job().set_name(name.to_string()).send().await {
        Ok(job) => job,
        Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => {
            println!("Job {} doesn't exist", name.job);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Job name: {}", job.name);
    println!("Requisition ID: {}", job.requisition_id);
    println!("Title: {}", job.title);
    println!("Description: {}", job.description);
    println!("Posting language: {}", job.language_code);
    for address in &job.addresses {
        println!("Address: {address}");
    }
    if let Some(info) = &job.application_info {
        for email in &info.emails {
            println!("Email: {email}");
        }
        for uri in &info.uris {
            println!("Website: {uri}");
        }
    }
    Ok(())
}
// [END job_search_get_job]
