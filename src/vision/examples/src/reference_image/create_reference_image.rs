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

// [START vision_product_search_create_reference_image]
use google_cloud_vision_v1::client::ProductSearch;
use google_cloud_vision_v1::model::ReferenceImage;

/// Adds the image at `gcs_uri` to a product.
pub async fn sample(
    client: &ProductSearch,
    project_id: &str,
    location_id: &str,
    product_id: &str,
    reference_image_id: &str,
    gcs_uri: &str,
) -> anyhow::Result<ReferenceImage> {
    let image = client
        .create_reference_image()
        .set_parent(format!(
            "projects/{project_id}/locations/{location_id}/products/{product_id}"
        ))
        .set_reference_image_id(reference_image_id)
        .set_reference_image(ReferenceImage::new().set_uri(gcs_uri))
        .send()
        .await?;
    println!("Added reference image to {product_id}.");
    println!("Reference image name: {}", image.name);
    println!("Reference image uri: {}", image.uri);
    Ok(image)
}
// [END vision_product_search_create_reference_image]
