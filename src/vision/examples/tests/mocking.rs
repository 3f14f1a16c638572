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

//! Offline tests for the product search samples.

#[cfg(test)]
mod tests {
    use gax::response::Response;
    use google_cloud_gax as gax;
    use google_cloud_longrunning::model::Operation;
    use google_cloud_longrunning::model::operation::Result as OperationResult;
    use google_cloud_rpc::model::Status;
    use google_cloud_vision_v1 as vision;
    use google_cloud_wkt as wkt;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use vision::model::*;
    use vision_samples::{import_product_sets, product, product_set, similar_products};

    const PARENT: &str = "projects/my-project/locations/us-west1";
    const PRODUCT: &str = "projects/my-project/locations/us-west1/products/my-product";

    mockall::mock! {
        #[derive(Debug)]
        ProductSearch {}
        impl vision::stub::ProductSearch for ProductSearch {
            async fn create_product(&self, req: CreateProductRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Product>>;
            async fn update_product(&self, req: UpdateProductRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Product>>;
            async fn purge_products(&self, req: PurgeProductsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
            async fn import_product_sets(&self, req: ImportProductSetsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        ImageAnnotator {}
        impl vision::stub::ImageAnnotator for ImageAnnotator {
            async fn batch_annotate_images(&self, req: BatchAnnotateImagesRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<BatchAnnotateImagesResponse>>;
        }
    }

    fn finished_operation(any: wkt::Any) -> gax::Result<Response<Operation>> {
        let operation = Operation::new()
            .set_name("operations/123")
            .set_done(true)
            .set_result(OperationResult::Response(any.into()));
        Ok(Response::from(operation))
    }

    fn finished_purge() -> gax::Result<Response<Operation>> {
        let any = wkt::Any::from_msg(&wkt::Empty::default()).expect("test message should succeed");
        finished_operation(any)
    }

    #[tokio::test]
    async fn create_product() -> anyhow::Result<()> {
        let mut mock = MockProductSearch::new();
        mock.expect_create_product()
            .withf(|r, _| {
                let product = r.product.clone().unwrap_or_default();
                r.parent == PARENT
                    && r.product_id == "my-product"
                    && product.display_name == "My Product"
                    && product.product_category == "apparel"
            })
            .return_once(|r, _| {
                let product = r.product.unwrap_or_default().set_name(PRODUCT);
                Ok(Response::from(product))
            });
        let client = vision::client::ProductSearch::from_stub(mock);

        let got = product::create_product::sample(
            &client,
            "my-project",
            "us-west1",
            "my-product",
            "My Product",
            "apparel",
        )
        .await?;
        assert_eq!(got.name, PRODUCT);
        Ok(())
    }

    #[tokio::test]
    async fn update_product_labels() -> anyhow::Result<()> {
        let mut mock = MockProductSearch::new();
        mock.expect_update_product()
            .withf(|r, _| {
                let product = r.product.clone().unwrap_or_default();
                let mask = r.update_mask.clone().unwrap_or_default();
                product.name == PRODUCT
                    && product.product_labels
                        == [vision::model::product::KeyValue::new().set_key("color").set_value("blue")]
                    && mask.paths == ["product_labels"]
            })
            .return_once(|r, _| Ok(Response::from(r.product.unwrap_or_default())));
        let client = vision::client::ProductSearch::from_stub(mock);

        let got = product::update_product_labels::sample(
            &client,
            "my-project",
            "us-west1",
            "my-product",
            "color",
            "blue",
        )
        .await?;
        assert_eq!(got.product_labels.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn purge_orphan_products() -> anyhow::Result<()> {
        let mut mock = MockProductSearch::new();
        mock.expect_purge_products()
            .withf(|r, _| {
                r.parent == PARENT
                    && r.delete_orphan_products() == Some(&true)
                    && r.product_set_purge_config().is_none()
                    && r.force
            })
            .return_once(|_, _| finished_purge());
        let client = vision::client::ProductSearch::from_stub(mock);

        product::purge_orphan_products::sample(&client, "my-project", "us-west1", true).await?;
        Ok(())
    }

    #[tokio::test]
    async fn purge_orphan_products_dry_run() -> anyhow::Result<()> {
        let mut mock = MockProductSearch::new();
        mock.expect_purge_products()
            .withf(|r, _| r.delete_orphan_products() == Some(&true) && !r.force)
            .return_once(|_, _| finished_purge());
        let client = vision::client::ProductSearch::from_stub(mock);

        product::purge_orphan_products::sample(&client, "my-project", "us-west1", false).await?;
        Ok(())
    }

    #[tokio::test]
    async fn purge_products_in_product_set_dry_run() -> anyhow::Result<()> {
        let mut mock = MockProductSearch::new();
        mock.expect_purge_products()
            .withf(|r, _| {
                r.product_set_purge_config()
                    .is_some_and(|c| c.product_set_id == "my-set")
                    && !r.force
            })
            .return_once(|_, _| finished_purge());
        let client = vision::client::ProductSearch::from_stub(mock);

        product_set::purge_products_in_product_set::sample(
            &client,
            "my-project",
            "us-west1",
            "my-set",
            false,
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn import_product_sets_skips_failed_lines() -> anyhow::Result<()> {
        let mut mock = MockProductSearch::new();
        mock.expect_import_product_sets()
            .withf(|r, _| {
                let uri = r
                    .input_config
                    .as_ref()
                    .and_then(|c| c.gcs_source())
                    .map(|s| s.csv_file_uri.clone());
                r.parent == PARENT && uri.as_deref() == Some("gs://bucket/sets.csv")
            })
            .return_once(|_, _| {
                let response = ImportProductSetsResponse::new()
                    .set_statuses([
                        Status::default(),
                        Status::default().set_code(3).set_message("bad line"),
                    ])
                    .set_reference_images([ReferenceImage::new()
                        .set_name(format!("{PRODUCT}/referenceImages/img-1"))
                        .set_uri("gs://bucket/shoes_1.jpg")]);
                let any = wkt::Any::from_msg(&response).expect("test message should succeed");
                finished_operation(any)
            });
        let client = vision::client::ProductSearch::from_stub(mock);

        let got = import_product_sets::sample(
            &client,
            "my-project",
            "us-west1",
            "gs://bucket/sets.csv",
        )
        .await?;
        assert_eq!(got, vec!["gs://bucket/shoes_1.jpg".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn get_similar_products_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"not really a jpeg")?;
        let path = file.path().to_string_lossy().to_string();

        let mut mock = MockImageAnnotator::new();
        mock.expect_batch_annotate_images()
            .withf(|r, _| {
                let Some(request) = r.requests.first() else {
                    return false;
                };
                let content = request.image.as_ref().map(|i| i.content.clone());
                let params = request
                    .image_context
                    .as_ref()
                    .and_then(|c| c.product_search_params.clone())
                    .unwrap_or_default();
                content.as_deref() == Some(b"not really a jpeg".as_slice())
                    && request.features.len() == 1
                    && request.features[0].r#type == feature::Type::ProductSearch
                    && params.product_set == format!("{PARENT}/productSets/my-set")
                    && params.product_categories == ["apparel"]
                    && params.filter == "style = womens"
            })
            .return_once(|_, _| {
                let results = ProductSearchResults::new()
                    .set_index_time(wkt::Timestamp::clamp(1_700_000_000, 0))
                    .set_results([product_search_results::Result::new()
                        .set_product(Product::new().set_name(PRODUCT))
                        .set_score(0.9)]);
                let response = BatchAnnotateImagesResponse::new().set_responses([
                    AnnotateImageResponse::new().set_product_search_results(results),
                ]);
                Ok(Response::from(response))
            });
        let client = vision::client::ImageAnnotator::from_stub(mock);

        let got = similar_products::get_similar_products_file::sample(
            &client,
            "my-project",
            "us-west1",
            "my-set",
            "apparel",
            &path,
            "style = womens",
        )
        .await?;
        assert_eq!(got, vec![PRODUCT.to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn get_similar_products_uri_reports_errors() -> anyhow::Result<()> {
        let mut mock = MockImageAnnotator::new();
        mock.expect_batch_annotate_images()
            .withf(|r, _| {
                r.requests
                    .first()
                    .and_then(|r| r.image.as_ref())
                    .and_then(|i| i.source.as_ref())
                    .is_some_and(|s| s.image_uri == "gs://bucket/missing.jpg")
            })
            .return_once(|_, _| {
                let response = BatchAnnotateImagesResponse::new().set_responses([
                    AnnotateImageResponse::new()
                        .set_error(Status::default().set_code(5).set_message("not found")),
                ]);
                Ok(Response::from(response))
            });
        let client = vision::client::ImageAnnotator::from_stub(mock);

        let got = similar_products::get_similar_products_uri::sample(
            &client,
            "my-project",
            "us-west1",
            "my-set",
            "apparel",
            "gs://bucket/missing.jpg",
            "",
        )
        .await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }
}
