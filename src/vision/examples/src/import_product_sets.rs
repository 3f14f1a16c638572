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

// [START vision_product_search_import_product_images]
use google_cloud_lro::Poller;
use google_cloud_vision_v1::client::ProductSearch;
use google_cloud_vision_v1::model::{
    ImportProductSetsGcsSource, ImportProductSetsInputConfig, ImportProductSetsResponse,
};

/// Imports the product sets, products and reference images listed in a CSV
/// file stored in Cloud Storage.
///
/// Returns the URIs of the reference images imported successfully.
pub async fn sample(
    client: &ProductSearch,
    project_id: &str,
    location_id: &str,
    gcs_uri: &str,
) -> anyhow::Result<Vec<String>> {
    println!("Processing operation name: import_product_sets");
    let response = client
        .import_product_sets()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_input_config(
            ImportProductSetsInputConfig::new()
                .set_gcs_source(ImportProductSetsGcsSource::new().set_csv_file_uri(gcs_uri)),
        )
        .poller()
        .until_done()
        .await?;
    println!("Processing done.");
    Ok(print_import_results(&response))
}

/// The statuses are in the same order as the lines in the CSV file.
fn print_import_results(response: &ImportProductSetsResponse) -> Vec<String> {
    // Only the lines imported successfully have a reference image.
    let mut images = response.reference_images.iter();
    let mut uris = Vec::new();
    for (line, status) in response.statuses.iter().enumerate() {
        println!("Status of processing line {line} of the csv: {status:?}");
        if status.code != 0 {
            println!("Status code not OK: {}", status.message);
            continue;
        }
        if let Some(image) = images.next() {
            println!("Reference image name: {}", image.name);
            println!("Reference image uri: {}", image.uri);
            uris.push(image.uri.clone());
        }
    }
    uris
}
// [END vision_product_search_import_product_images]

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_rpc::model::Status;
    use google_cloud_vision_v1::model::ReferenceImage;
    use pretty_assertions::assert_eq;

    #[test]
    fn failed_line_before_imported_line() {
        let response = ImportProductSetsResponse::new()
            .set_statuses([
                Status::default().set_code(3).set_message("bad line"),
                Status::default(),
            ])
            .set_reference_images([ReferenceImage::new()
                .set_name("projects/p/locations/l/products/shoes/referenceImages/line1")
                .set_uri("gs://bucket/line1.jpg")]);
        let got = print_import_results(&response);
        assert_eq!(got, vec!["gs://bucket/line1.jpg".to_string()]);
    }

    #[test]
    fn all_lines_imported() {
        let response = ImportProductSetsResponse::new()
            .set_statuses([Status::default(), Status::default()])
            .set_reference_images([
                ReferenceImage::new().set_uri("gs://bucket/line0.jpg"),
                ReferenceImage::new().set_uri("gs://bucket/line1.jpg"),
            ]);
        let got = print_import_results(&response);
        assert_eq!(
            got,
            vec![
                "gs://bucket/line0.jpg".to_string(),
                "gs://bucket/line1.jpg".to_string()
            ]
        );
    }
}
