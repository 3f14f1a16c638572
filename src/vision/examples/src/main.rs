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

//! Runs a single product search sample from the command line.

use clap::{ArgAction, Parser, Subcommand};
use google_cloud_vision_v1::client::{ImageAnnotator, ProductSearch};
use vision_samples::{
    FILTER, PRODUCT_CATEGORY, import_product_sets, product, product_set, reference_image,
    similar_products,
};

const DESCRIPTION: &str = concat!(
    "Runs the Cloud Vision product search samples.",
    " Each subcommand calls one sample with the values given on the command line."
);

#[derive(Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
struct Args {
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,

    /// Product search is only available in some locations.
    #[arg(long, env = "GOOGLE_CLOUD_VISION_LOCATION", default_value = "us-west1")]
    location_id: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    CreateProduct {
        #[arg(long)]
        product_id: String,
        #[arg(long)]
        display_name: String,
        #[arg(long, default_value = PRODUCT_CATEGORY)]
        category: String,
    },
    GetProduct {
        #[arg(long)]
        product_id: String,
    },
    ListProducts,
    UpdateProductLabels {
        #[arg(long)]
        product_id: String,
        #[arg(long, default_value = "color")]
        key: String,
        #[arg(long, default_value = "blue")]
        value: String,
    },
    DeleteProduct {
        #[arg(long)]
        product_id: String,
    },
    PurgeOrphanProducts {
        /// Without `--force=true` the operation only reports what it would
        /// delete.
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        force: bool,
    },
    CreateProductSet {
        #[arg(long)]
        product_set_id: String,
        #[arg(long)]
        display_name: String,
    },
    GetProductSet {
        #[arg(long)]
        product_set_id: String,
    },
    ListProductSets,
    DeleteProductSet {
        #[arg(long)]
        product_set_id: String,
    },
    AddProductToProductSet {
        #[arg(long)]
        product_id: String,
        #[arg(long)]
        product_set_id: String,
    },
    RemoveProductFromProductSet {
        #[arg(long)]
        product_id: String,
        #[arg(long)]
        product_set_id: String,
    },
    ListProductsInProductSet {
        #[arg(long)]
        product_set_id: String,
    },
    PurgeProductsInProductSet {
        #[arg(long)]
        product_set_id: String,
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        force: bool,
    },
    CreateReferenceImage {
        #[arg(long)]
        product_id: String,
        #[arg(long)]
        reference_image_id: String,
        #[arg(long, default_value = reference_image::DEFAULT_IMAGE_URI)]
        gcs_uri: String,
    },
    GetReferenceImage {
        #[arg(long)]
        product_id: String,
        #[arg(long)]
        reference_image_id: String,
    },
    ListReferenceImages {
        #[arg(long)]
        product_id: String,
    },
    DeleteReferenceImage {
        #[arg(long)]
        product_id: String,
        #[arg(long)]
        reference_image_id: String,
    },
    ImportProductSets {
        #[arg(long, default_value = vision_samples::PRODUCT_SETS_CSV)]
        gcs_uri: String,
    },
    GetSimilarProductsFile {
        #[arg(long)]
        product_set_id: String,
        #[arg(long)]
        file_path: String,
        #[arg(long, default_value = PRODUCT_CATEGORY)]
        category: String,
        #[arg(long, default_value = FILTER)]
        filter: String,
    },
    GetSimilarProductsUri {
        #[arg(long)]
        product_set_id: String,
        #[arg(long, default_value = reference_image::DEFAULT_IMAGE_URI)]
        image_uri: String,
        #[arg(long, default_value = PRODUCT_CATEGORY)]
        category: String,
        #[arg(long, default_value = FILTER)]
        filter: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    google_cloud_test_utils::tracing::init_global()?;
    let args = Args::parse();
    tracing::info!("Configuration: {args:?}");
    run(&args.project_id, &args.location_id, args.command).await
}

async fn run(project: &str, location: &str, command: Command) -> anyhow::Result<()> {
    match command {
        Command::GetSimilarProductsFile {
            product_set_id,
            file_path,
            category,
            filter,
        } => {
            let client = ImageAnnotator::builder().build().await?;
            similar_products::get_similar_products_file::sample(
                &client,
                project,
                location,
                &product_set_id,
                &category,
                &file_path,
                &filter,
            )
            .await?;
            return Ok(());
        }
        Command::GetSimilarProductsUri {
            product_set_id,
            image_uri,
            category,
            filter,
        } => {
            let client = ImageAnnotator::builder().build().await?;
            similar_products::get_similar_products_uri::sample(
                &client,
                project,
                location,
                &product_set_id,
                &category,
                &image_uri,
                &filter,
            )
            .await?;
            return Ok(());
        }
        command => run_product_search(project, location, command).await,
    }
}

async fn run_product_search(project: &str, location: &str, command: Command) -> anyhow::Result<()> {
    let client = ProductSearch::builder().build().await?;
    match command {
        Command::CreateProduct {
            product_id,
            display_name,
            category,
        } => {
            product::create_product::sample(
                &client,
                project,
                location,
                &product_id,
                &display_name,
                &category,
            )
            .await?;
        }
        Command::GetProduct { product_id } => {
            product::get_product::sample(&client, project, location, &product_id).await?;
        }
        Command::ListProducts => {
            product::list_products::sample(&client, project, location).await?;
        }
        Command::UpdateProductLabels {
            product_id,
            key,
            value,
        } => {
            product::update_product_labels::sample(
                &client,
                project,
                location,
                &product_id,
                &key,
                &value,
            )
            .await?;
        }
        Command::DeleteProduct { product_id } => {
            product::delete_product::sample(&client, project, location, &product_id).await?
        }
        Command::PurgeOrphanProducts { force } => {
            product::purge_orphan_products::sample(&client, project, location, force).await?
        }
        Command::CreateProductSet {
            product_set_id,
            display_name,
        } => {
            product_set::create_product_set::sample(
                &client,
                project,
                location,
                &product_set_id,
                &display_name,
            )
            .await?;
        }
        Command::GetProductSet { product_set_id } => {
            product_set::get_product_set::sample(&client, project, location, &product_set_id)
                .await?;
        }
        Command::ListProductSets => {
            product_set::list_product_sets::sample(&client, project, location).await?;
        }
        Command::DeleteProductSet { product_set_id } => {
            product_set::delete_product_set::sample(&client, project, location, &product_set_id)
                .await?
        }
        Command::AddProductToProductSet {
            product_id,
            product_set_id,
        } => {
            product_set::add_product_to_product_set::sample(
                &client,
                project,
                location,
                &product_id,
                &product_set_id,
            )
            .await?
        }
        Command::RemoveProductFromProductSet {
            product_id,
            product_set_id,
        } => {
            product_set::remove_product_from_product_set::sample(
                &client,
                project,
                location,
                &product_id,
                &product_set_id,
            )
            .await?
        }
        Command::ListProductsInProductSet { product_set_id } => {
            product_set::list_products_in_product_set::sample(
                &client,
                project,
                location,
                &product_set_id,
            )
            .await?;
        }
        Command::PurgeProductsInProductSet {
            product_set_id,
            force,
        } => {
            product_set::purge_products_in_product_set::sample(
                &client,
                project,
                location,
                &product_set_id,
                force,
            )
            .await?
        }
        Command::CreateReferenceImage {
            product_id,
            reference_image_id,
            gcs_uri,
        } => {
            reference_image::create_reference_image::sample(
                &client,
                project,
                location,
                &product_id,
                &reference_image_id,
                &gcs_uri,
            )
            .await?;
        }
        Command::GetReferenceImage {
            product_id,
            reference_image_id,
        } => {
            reference_image::get_reference_image::sample(
                &client,
                project,
                location,
                &product_id,
                &reference_image_id,
            )
            .await?;
        }
        Command::ListReferenceImages { product_id } => {
            reference_image::list_reference_images::sample(&client, project, location, &product_id)
                .await?;
        }
        Command::DeleteReferenceImage {
            product_id,
            reference_image_id,
        } => {
            reference_image::delete_reference_image::sample(
                &client,
                project,
                location,
                &product_id,
                &reference_image_id,
            )
            .await?
        }
        Command::ImportProductSets { gcs_uri } => {
            import_product_sets::sample(&client, project, location, &gcs_uri).await?;
        }
        Command::GetSimilarProductsFile { .. } | Command::GetSimilarProductsUri { .. } => {
            anyhow::bail!("similarity searches use the image annotator client")
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parse_defaults() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=p",
            "--location-id=us-east1",
            "get-similar-products-uri",
            "--product-set-id=s",
        ])?;
        assert_eq!(args.location_id, "us-east1");
        match args.command {
            Command::GetSimilarProductsUri {
                product_set_id,
                image_uri,
                category,
                filter,
            } => {
                assert_eq!(product_set_id, "s");
                assert_eq!(image_uri, reference_image::DEFAULT_IMAGE_URI);
                assert_eq!(category, "apparel");
                assert_eq!(filter, "style = womens");
            }
            command => panic!("unexpected command {command:?}"),
        }
        Ok(())
    }

    #[test_case(&["program", "--project-id=p", "purge-orphan-products"], true)]
    #[test_case(&["program", "--project-id=p", "purge-orphan-products", "--force=false"], false)]
    fn parse_force(input: &[&str], want: bool) -> anyhow::Result<()> {
        let args = Args::try_parse_from(input)?;
        assert!(
            matches!(args.command, Command::PurgeOrphanProducts { force } if force == want),
            "{args:?}"
        );
        Ok(())
    }

    #[test_case(&["program", "--project-id=p", "get-product"]; "missing product id")]
    #[test_case(&["program", "--project-id=p", "no-such-sample"]; "unknown sample")]
    fn parse_errors(input: &[&str]) {
        let got = Args::try_parse_from(input);
        assert!(got.is_err(), "{got:?}");
    }
}
