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

// [START job_search_update_company]
use google_cloud_talent_v4::client::CompanyService;
use google_cloud_talent_v4::model::Company;

/// Replaces all the fields in a company.
///
/// Fields not set in `company` are cleared. Prefer
/// [update_company_with_field_mask][super::update_company_with_field_mask]
/// to change only some fields.
pub async fn sample(client: &CompanyService, company_name: &str) -> anyhow::Result<()> {
    let current = client.get_company().set_name(company_name).send().await?;

    let updated = client
        .update_company()
        .set_company(
            Company::new()
                .set_name(company_name)
                .set_external_id(current.external_id)
                .set_display_name("Updated name")
                .set_website_uri("https://www.example.com"),
        )
        .send()
        .await?;

    println!("Company updated: {}", updated.name);
    println!("Display name: {}", updated.display_name);
    println!("Website: {}", updated.website_uri);
    Ok(())
}
// [END job_search_update_company]
