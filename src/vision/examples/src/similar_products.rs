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

//! Samples to find products similar to an image.

pub mod get_similar_products_file;
pub mod get_similar_products_uri;

use google_cloud_vision_v1::model::BatchAnnotateImagesResponse;

/// Prints the product search results and returns the matching product
/// names.
///
/// Returns an empty list when the product set has not been indexed.
pub(crate) fn print_similar_products(
    response: BatchAnnotateImagesResponse,
) -> anyhow::Result<Vec<String>> {
    let Some(response) = response.responses.into_iter().next() else {
        anyhow::bail!("the service returned no annotations");
    };
    if let Some(status) = response.error {
        anyhow::bail!("error annotating image: {status:?}");
    }
    let Some(results) = response.product_search_results else {
        println!("Product set has not been indexed.");
        return Ok(Vec::new());
    };
    let Some(index_time) = results.index_time else {
        println!("Product set has not been indexed.");
        return Ok(Vec::new());
    };
    println!("Product set index time: {index_time:?}");
    println!("Search results:");
    let mut names = Vec::new();
    for result in results.results {
        let product = result.product.unwrap_or_default();
        println!("Score(Confidence): {}", result.score);
        println!("Image name: {}", result.image);
        println!("Product name: {}", product.name);
        println!("Product display name: {}", product.display_name);
        println!("Product description: {}", product.description);
        println!("Product labels: {}", crate::product::format_labels(&product));
        names.push(product.name);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_vision_v1::model::{
        AnnotateImageResponse, Product, ProductSearchResults, product_search_results,
    };

    #[test]
    fn not_indexed() -> anyhow::Result<()> {
        let response = BatchAnnotateImagesResponse::new().set_responses([
            AnnotateImageResponse::new().set_product_search_results(ProductSearchResults::new()),
        ]);
        let got = print_similar_products(response)?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn indexed() -> anyhow::Result<()> {
        let results = ProductSearchResults::new()
            .set_index_time(google_cloud_wkt::Timestamp::clamp(1_700_000_000, 0))
            .set_results([product_search_results::Result::new()
                .set_product(Product::new().set_name("projects/p/locations/l/products/shoes_1"))
                .set_score(0.75)]);
        let response = BatchAnnotateImagesResponse::new().set_responses([
            AnnotateImageResponse::new().set_product_search_results(results),
        ]);
        let got = print_similar_products(response)?;
        assert_eq!(got, vec!["projects/p/locations/l/products/shoes_1".to_string()]);
        Ok(())
    }

    #[test]
    fn empty_response() {
        let got = print_similar_products(BatchAnnotateImagesResponse::new());
        assert!(got.is_err(), "{got:?}");
    }
}
