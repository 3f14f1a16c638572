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

// [START vision_product_search_list_reference_images]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_vision_v1::client::ProductSearch;

/// Returns the URIs of the reference images of a product.
pub async fn sample(
    client: &ProductSearch,
    project_id: &str,
    location_id: &str,
    product_id: &str,
) -> anyhow::Result<Vec<String>> {
    let mut items = client
        .list_reference_images()
        .set_parent(format!(
            "projects/{project_id}/locations/{location_id}/products/{product_id}"
        ))
        .by_item();
    let mut uris = Vec::new();
    while let Some(image) = items.next().await.transpose()? {
        println!("Reference image name: {}", image.name);
        println!("Reference image uri: {}", image.uri);
        uris.push(image.uri);
    }
    Ok(uris)
}
// [END vision_product_search_list_reference_images]
