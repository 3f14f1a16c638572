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

//! Samples to manage the reference images of a product.

pub mod create_reference_image;
pub mod delete_reference_image;
pub mod get_reference_image;
pub mod list_reference_images;

/// The reference image used when no other image is given.
pub const DEFAULT_IMAGE_URI: &str = "gs://cloud-samples-data/vision/product_search/shoes_1.jpg";
