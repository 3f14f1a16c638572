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

// [START vision_product_search_purge_products_in_product_set]
use google_cloud_lro::Poller;
use google_cloud_vision_v1::client::ProductSearch;
use google_cloud_vision_v1::model::ProductSetPurgeConfig;

/// Deletes all the products in a product set, including products that are
/// also in other product sets.
///
/// The operation is a dry run unless `force` is set.
pub async fn sample(
    client: &ProductSearch,
    project_id: &str,
    location_id: &str,
    product_set_id: &str,
    force: bool,
) -> anyhow::Result<()> {
    client
        .purge_products()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_product_set_purge_config(ProductSetPurgeConfig::new().set_product_set_id(product_set_id))
        .set_force(force)
        .poller()
        .until_done()
        .await?;
    if force {
        println!("Products in product set {product_set_id} deleted.");
    } else {
        println!("Dry run finished, no products in product set {product_set_id} were deleted.");
    }
    Ok(())
}
// [END vision_product_search_purge_products_in_product_set]
