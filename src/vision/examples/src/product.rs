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

//! Samples to manage products.

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod purge_orphan_products;
pub mod update_product_labels;

use google_cloud_vision_v1::model::Product;

pub(crate) fn print_product(product: &Product) {
    println!("Product name: {}", product.name);
    println!("Product id: {}", product.name.rsplit('/').next().unwrap_or_default());
    println!("Product display name: {}", product.display_name);
    println!("Product description: {}", product.description);
    println!("Product category: {}", product.product_category);
    println!("Product labels: {}", format_labels(product));
}

pub(crate) fn format_labels(product: &Product) -> String {
    product
        .product_labels
        .iter()
        .map(|l| format!("{}={}", l.key, l.value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_vision_v1::model::product::KeyValue;

    #[test]
    fn labels() {
        let product = Product::new().set_product_labels([
            KeyValue::new().set_key("color").set_value("blue"),
            KeyValue::new().set_key("style").set_value("womens"),
        ]);
        assert_eq!(format_labels(&product), "color=blue, style=womens");
        assert_eq!(format_labels(&Product::new()), "");
    }
}
