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

//! Samples to manage product sets and their products.

pub mod add_product_to_product_set;
pub mod create_product_set;
pub mod delete_product_set;
pub mod get_product_set;
pub mod list_product_sets;
pub mod list_products_in_product_set;
pub mod purge_products_in_product_set;
pub mod remove_product_from_product_set;

use google_cloud_vision_v1::model::ProductSet;

pub(crate) fn print_product_set(product_set: &ProductSet) {
    println!("Product set name: {}", product_set.name);
    println!("Product set display name: {}", product_set.display_name);
    match product_set.index_time.as_ref() {
        Some(t) => println!("Product set index time: {t:?}"),
        None => println!("Product set has not been indexed."),
    }
}
