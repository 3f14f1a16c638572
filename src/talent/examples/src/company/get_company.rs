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

// [START job_search_get_company]
use crate::names::CompanyName;
use google_cloud_gax::error::rpc::Code;
use google_cloud_talent_v4::client::CompanyService;

pub async fn sample(client: &CompanyService, company_name: &str) -> anyhow::Result<()> {
    let name = match company_name.parse::<CompanyName>() {
        Ok(name) => name,
        Err(e) => {
            println!("Invalid companyName format: {e}");
            return Ok(());
        }
    };

    let company = match client.get_company().set_name(name.to_string()).send().await {
        Ok(company) => company,
        Err(e) if e.status().is_some_and(|s| s.code == Code::NotFound) => {
            println!("Company {} doesn't exist", name.company);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Company name: {}", company.name);
    println!("Display name: {}", company.display_name);
    Ok(())
}
// [END job_search_get_company]
