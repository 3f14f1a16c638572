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

//! Cloud Vision product search samples.

pub mod import_product_sets;
pub mod product;
pub mod product_set;
pub mod reference_image;
pub mod similar_products;

use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_test_utils::resource_names::{
    external_id_create_time, random_external_id, random_product_id, random_product_set_id,
    random_reference_image_id,
};
use google_cloud_test_utils::runtime_config::{project_id, vision_location};
use google_cloud_vision_v1::client::{ImageAnnotator, ProductSearch};

/// Products and product sets older than this are removed by
/// [cleanup_stale_resources].
pub const STALE_RESOURCE_SECONDS: i64 = 48 * 60 * 60;

pub const PRODUCT_CATEGORY: &str = "apparel";
pub const FILTER: &str = "style = womens";

/// A CSV file listing product sets that are already indexed.
pub const INDEXED_PRODUCT_SETS_CSV: &str =
    "gs://cloud-samples-data/vision/product_search/indexed_product_sets.csv";
pub const INDEXED_PRODUCT_SET_ID: &str = "indexed_product_set_id_for_testing";

/// A CSV file with one product set and two products.
pub const PRODUCT_SETS_CSV: &str = "gs://cloud-samples-data/vision/product_search/product_sets.csv";
pub const IMPORTED_PRODUCT_SET_ID: &str = "fake_product_set_id_for_testing";

/// The display names record the creation time, the service does not.
fn random_display_name() -> String {
    random_external_id(chrono::Utc::now().timestamp())
}

pub async fn run_product_examples(resources: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let location = vision_location();
    let client = ProductSearch::builder().build().await?;
    let (project, location) = (project_id.as_str(), location.as_str());

    let product_id = random_product_id();
    tracing::info!("running product::create_product example");
    let product = product::create_product::sample(
        &client,
        project,
        location,
        &product_id,
        &random_display_name(),
        PRODUCT_CATEGORY,
    )
    .await?;
    resources.push(product.name.clone());
    tracing::info!("running product::get_product example");
    product::get_product::sample(&client, project, location, &product_id).await?;
    tracing::info!("running product::list_products example");
    product::list_products::sample(&client, project, location).await?;
    tracing::info!("running product::update_product_labels example");
    product::update_product_labels::sample(&client, project, location, &product_id, "color", "blue")
        .await?;

    let image_id = random_reference_image_id();
    tracing::info!("running reference_image::create_reference_image example");
    reference_image::create_reference_image::sample(
        &client,
        project,
        location,
        &product_id,
        &image_id,
        reference_image::DEFAULT_IMAGE_URI,
    )
    .await?;
    tracing::info!("running reference_image::get_reference_image example");
    reference_image::get_reference_image::sample(&client, project, location, &product_id, &image_id)
        .await?;
    tracing::info!("running reference_image::list_reference_images example");
    reference_image::list_reference_images::sample(&client, project, location, &product_id).await?;
    tracing::info!("running reference_image::delete_reference_image example");
    reference_image::delete_reference_image::sample(
        &client,
        project,
        location,
        &product_id,
        &image_id,
    )
    .await?;

    tracing::info!("running product::delete_product example");
    product::delete_product::sample(&client, project, location, &product_id).await?;
    Ok(())
}

pub async fn run_product_set_examples(resources: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let location = vision_location();
    let client = ProductSearch::builder().build().await?;
    let (project, location) = (project_id.as_str(), location.as_str());

    let product_set_id = random_product_set_id();
    tracing::info!("running product_set::create_product_set example");
    let product_set = product_set::create_product_set::sample(
        &client,
        project,
        location,
        &product_set_id,
        &random_display_name(),
    )
    .await?;
    resources.push(product_set.name.clone());
    tracing::info!("running product_set::get_product_set example");
    product_set::get_product_set::sample(&client, project, location, &product_set_id).await?;
    tracing::info!("running product_set::list_product_sets example");
    product_set::list_product_sets::sample(&client, project, location).await?;

    let product_id = random_product_id();
    let product = product::create_product::sample(
        &client,
        project,
        location,
        &product_id,
        &random_display_name(),
        PRODUCT_CATEGORY,
    )
    .await?;
    resources.push(product.name.clone());
    tracing::info!("running product_set::add_product_to_product_set example");
    product_set::add_product_to_product_set::sample(
        &client,
        project,
        location,
        &product_id,
        &product_set_id,
    )
    .await?;
    tracing::info!("running product_set::list_products_in_product_set example");
    product_set::list_products_in_product_set::sample(&client, project, location, &product_set_id)
        .await?;
    tracing::info!("running product_set::remove_product_from_product_set example");
    product_set::remove_product_from_product_set::sample(
        &client,
        project,
        location,
        &product_id,
        &product_set_id,
    )
    .await?;

    product_set::add_product_to_product_set::sample(
        &client,
        project,
        location,
        &product_id,
        &product_set_id,
    )
    .await?;
    tracing::info!("running product_set::purge_products_in_product_set example");
    product_set::purge_products_in_product_set::sample(
        &client,
        project,
        location,
        &product_set_id,
        true,
    )
    .await?;

    tracing::info!("running product_set::delete_product_set example");
    product_set::delete_product_set::sample(&client, project, location, &product_set_id).await?;
    Ok(())
}

pub async fn run_search_examples(resources: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let location = vision_location();
    let client = ProductSearch::builder().build().await?;
    let annotator = ImageAnnotator::builder().build().await?;
    let (project, location) = (project_id.as_str(), location.as_str());

    tracing::info!("running import_product_sets example");
    import_product_sets::sample(&client, project, location, PRODUCT_SETS_CSV).await?;
    resources.push(format!(
        "projects/{project}/locations/{location}/productSets/{IMPORTED_PRODUCT_SET_ID}"
    ));
    import_product_sets::sample(&client, project, location, INDEXED_PRODUCT_SETS_CSV).await?;

    // A new product set is not indexed, the sample reports that and returns
    // no results.
    let product_set_id = random_product_set_id();
    let product_set = product_set::create_product_set::sample(
        &client,
        project,
        location,
        &product_set_id,
        &random_display_name(),
    )
    .await?;
    resources.push(product_set.name.clone());
    tracing::info!("running similar_products::get_similar_products_uri example");
    similar_products::get_similar_products_uri::sample(
        &annotator,
        project,
        location,
        &product_set_id,
        PRODUCT_CATEGORY,
        reference_image::DEFAULT_IMAGE_URI,
        FILTER,
    )
    .await?;

    tracing::info!("running similar_products::get_similar_products_uri example with an indexed product set");
    similar_products::get_similar_products_uri::sample(
        &annotator,
        project,
        location,
        INDEXED_PRODUCT_SET_ID,
        PRODUCT_CATEGORY,
        reference_image::DEFAULT_IMAGE_URI,
        FILTER,
    )
    .await?;

    tracing::info!("running product::purge_orphan_products example");
    product::purge_orphan_products::sample(&client, project, location, false).await?;
    Ok(())
}

/// Deletes a product or a product set created by the drivers.
pub async fn cleanup_test_resource(name: String) -> anyhow::Result<()> {
    let client = ProductSearch::builder().build().await?;
    if name.contains("/productSets/") {
        client.delete_product_set().set_name(&name).send().await?;
    } else {
        client.delete_product().set_name(&name).send().await?;
    }
    Ok(())
}

/// Removes the products and product sets created by previous test runs
/// more than [STALE_RESOURCE_SECONDS] ago.
pub async fn cleanup_stale_resources(project_id: &str, location_id: &str) -> anyhow::Result<()> {
    let client = ProductSearch::builder().build().await?;
    let parent = format!("projects/{project_id}/locations/{location_id}");
    let stale_deadline = chrono::Utc::now().timestamp() - STALE_RESOURCE_SECONDS;
    let is_stale = |display_name: &str| {
        external_id_create_time(display_name).is_some_and(|t| t < stale_deadline)
    };

    let mut pending = Vec::new();
    let mut products = client.list_products().set_parent(&parent).by_item();
    while let Some(product) = products.next().await.transpose()? {
        if is_stale(&product.display_name) {
            tracing::info!("deleting stale product {}", product.name);
            pending.push(tokio::spawn(cleanup_test_resource(product.name)));
        }
    }
    let mut product_sets = client.list_product_sets().set_parent(&parent).by_item();
    while let Some(product_set) = product_sets.next().await.transpose()? {
        if is_stale(&product_set.display_name) {
            tracing::info!("deleting stale product set {}", product_set.name);
            pending.push(tokio::spawn(cleanup_test_resource(product_set.name)));
        }
    }

    let results = futures::future::join_all(pending)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    for (i, result) in results.into_iter().enumerate() {
        if let Err(e) = result {
            tracing::error!("error deleting stale resource #{i}: {e:?}");
        }
    }
    Ok(())
}
