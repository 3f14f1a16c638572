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

// [START vision_product_search_purge_orphan_products]
use google_cloud_lro::Poller;
use google_cloud_vision_v1::client::ProductSearch;

/// Deletes all the products in `location_id` that are not in a product set.
///
/// The operation is a dry run unless `force` is set.
pub async fn sample(
    client: &ProductSearch,
    project_id: &str,
    location_id: &str,
    force: bool,
) -> anyhow::Result<()> {
    client
        .purge_products()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_delete_orphan_products(true)
        .set_force(force)
        .poller()
        .until_done()
        .await?;
    if force {
        println!("Orphan products deleted.");
    } else {
        println!("Dry run finished, no orphan products were deleted.");
    }
    Ok(())
}
// [END vision_product_search_purge_orphan_products]
