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

pub mod basic_location_search;
pub mod category_search;
pub mod city_location_search;
pub mod commute_search;
pub mod commute_search_driving;
pub mod company_display_name_search;
pub mod custom_attribute_filter_search;
pub mod custom_attribute_not_empty_search;
pub mod custom_ranking_search;
pub mod date_range_search;
pub mod email_alert_search;
pub mod employment_type_search;
pub mod featured_job_search;
pub mod histogram_search;
pub mod keyword_location_search;
pub mod keyword_search;
pub mod language_code_search;
pub mod multi_location_search;
pub mod request_options;

use google_cloud_talent_v4::model::SearchJobsResponse;

/// Sends a search once per page, starting with an empty page token, and
/// prints the matching jobs in each page.
///
/// Returns the responses in page order.
pub(crate) async fn print_all_pages<F, Fut>(mut send: F) -> anyhow::Result<Vec<SearchJobsResponse>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = google_cloud_gax::Result<SearchJobsResponse>>,
{
    let mut responses = Vec::new();
    let mut page_token = String::new();
    loop {
        let response = send(page_token).await?;
        print_matching_jobs(&response);
        page_token = response.next_page_token.clone();
        responses.push(response);
        if page_token.is_empty() {
            return Ok(responses);
        }
    }
}

fn print_matching_jobs(response: &SearchJobsResponse) {
    for matching_job in &response.matching_jobs {
        println!("Job summary: {}", matching_job.job_summary);
        println!("Job title snippet: {}", matching_job.job_title_snippet);
        if let Some(job) = &matching_job.job {
            println!("Job name: {}", job.name);
            println!("Job title: {}", job.title);
        }
    }
}
