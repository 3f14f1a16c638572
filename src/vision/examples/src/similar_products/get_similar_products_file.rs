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

// [START vision_product_search_get_similar_products]
use google_cloud_vision_v1::client::ImageAnnotator;
use google_cloud_vision_v1::model::{
    AnnotateImageRequest, Feature, Image, ImageContext, ProductSearchParams, feature,
};

/// Searches a product set for products similar to a local image.
///
/// The `filter` is a boolean expression on the product labels, for example
/// `style = womens` or `(color = red OR color = blue) AND style = kids`.
pub async fn sample(
    client: &ImageAnnotator,
    project_id: &str,
    location_id: &str,
    product_set_id: &str,
    product_category: &str,
    file_path: &str,
    filter: &str,
) -> anyhow::Result<Vec<String>> {
    let content = tokio::fs::read(file_path).await?;
    let params = ProductSearchParams::new()
        .set_product_set(format!(
            "projects/{project_id}/locations/{location_id}/productSets/{product_set_id}"
        ))
        .set_product_categories([product_category])
        .set_filter(filter);
    let request = AnnotateImageRequest::new()
        .set_image(Image::new().set_content(bytes::Bytes::from(content)))
        .set_features([Feature::new().set_type(feature::Type::ProductSearch)])
        .set_image_context(ImageContext::new().set_product_search_params(params));

    let response = client
        .batch_annotate_images()
        .set_requests([request])
        .send()
        .await?;
    crate::similar_products::print_similar_products(response)
}
// [END vision_product_search_get_similar_products]
