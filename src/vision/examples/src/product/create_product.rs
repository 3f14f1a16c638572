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

// [START vision_product_search_create_product]
use google_cloud_vision_v1::client::ProductSearch;
use google_cloud_vision_v1::model::Product;

/// Creates a product, `category` must be one of `homegoods-v2`,
/// `apparel-v2`, `toys-v2`, `packagedgoods-v1` or `general-v1`. The legacy
/// `apparel` category is also accepted.
pub async fn sample(
    client: &ProductSearch,
    project_id: &str,
    location_id: &str,
    product_id: &str,
    display_name: &str,
    category: &str,
) -> anyhow::Result<Product> {
    let product = client
        .create_product()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_product_id(product_id)
        .set_product(
            Product::new()
                .set_display_name(display_name)
                .set_product_category(category),
        )
        .send()
        .await?;
    println!("Product name: {}", product.name);
    Ok(product)
}
// [END vision_product_search_create_product]
