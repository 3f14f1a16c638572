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

// [START vision_product_search_update_product_labels]
use google_cloud_vision_v1::client::ProductSearch;
use google_cloud_vision_v1::model::{Product, product::KeyValue};
use google_cloud_wkt::FieldMask;

/// Replaces the labels of a product with a single `key=value` label.
pub async fn sample(
    client: &ProductSearch,
    project_id: &str,
    location_id: &str,
    product_id: &str,
    key: &str,
    value: &str,
) -> anyhow::Result<Product> {
    // Only the fields in the update mask are changed.
    let product = client
        .update_product()
        .set_product(
            Product::new()
                .set_name(format!(
                    "projects/{project_id}/locations/{location_id}/products/{product_id}"
                ))
                .set_product_labels([KeyValue::new().set_key(key).set_value(value)]),
        )
        .set_update_mask(FieldMask::default().set_paths(["product_labels"]))
        .send()
        .await?;
    println!("Product name: {}", product.name);
    println!("Updated product labels: {}", crate::product::format_labels(&product));
    Ok(product)
}
// [END vision_product_search_update_product_labels]
