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

// [START job_search_commute_search_driving]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{
    CommuteFilter, CommuteMethod, JobQuery, RequestMetadata, commute_filter,
};
use google_cloud_type::model::LatLng;
use google_cloud_wkt::Duration;

pub async fn sample(client: &JobService, project_id: &str, tenant_id: &str) -> anyhow::Result<()> {
    let commute_filter = CommuteFilter::new()
        .set_commute_method(CommuteMethod::Driving)
        .set_travel_duration(Duration::clamp(1000, 0))
        .set_road_traffic(commute_filter::RoadTraffic::TrafficFree)
        .set_start_coordinates(
            LatLng::new()
                .set_latitude(37.422408)
                .set_longitude(-122.084068),
        );

    let request = client
        .search_jobs()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_request_metadata(
            RequestMetadata::new()
                .set_domain("www.example.com")
                .set_session_id("Hashed session identifier")
                .set_user_id("Hashed user identifier"),
        )
        .set_job_query(JobQuery::new().set_commute_filter(commute_filter));

    let responses =
        super::print_all_pages(|token| request.clone().set_page_token(token).send()).await?;
    for matching_job in responses.iter().flat_map(|r| &r.matching_jobs) {
        if let Some(info) = &matching_job.commute_info {
            println!("Travel duration: {:?}", info.travel_duration);
        }
    }
    Ok(())
}
// [END job_search_commute_search_driving]
