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

// [START vision_product_search_delete_product_set]
use google_cloud_vision_v1::client::ProductSearch;

/// Deletes a product set, the products in the set are not deleted.
pub async fn sample(
    client: &ProductSearch,
    project_id: &str,
    location_id: &str,
    product_set_id: &str,
) -> anyhow::Result<()> {
    client
        .delete_product_set()
        .set_name(format!(
            "projects/{project_id}/locations/{location_id}/productSets/{product_set_id}"
        ))
        .send()
        .await?;
    println!("Product set deleted.");
    Ok(())
}
// [END vision_product_search_delete_product_set]
