//! Integration tests for the full metadata mapping workflow
//!
//! These tests go through the public API the way the request layer does:
//! deserialize metadata JSON, map it with the shared keyword set, render DDL.

use dataset_publisher::error::PublisherError;
use dataset_publisher::publisher::{
    IDENTIFIER_MAX_LEN, Metadata, MetadataMapper, RestrictedKeywords, is_valid_identifier,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn metadata_json(title: &str, sample: &str) -> String {
    serde_json::json!({
        "orgUUID": "8a1b2c3d-org",
        "title": title,
        "dataSample": sample,
        "targetUri": "hdfs://nameservice1/org/8a1b2c3d/brokers/userspace/5f1d/000000_1",
        "isPublic": true,
    })
    .to_string()
}

#[test]
fn test_json_to_ddl() {
    let metadata = Metadata::from_json(&metadata_json(
        "Consumer Complaints (2015)",
        "Complaint ID,Product,Sub-product,Date received,ZIP code,Location\n1,Mortgage,,2015-01-01,10001,NY",
    ))
    .expect("Metadata should parse");

    let mapper = MetadataMapper::new(RestrictedKeywords::hive());
    let table = mapper
        .map(&metadata, &metadata.org_uuid)
        .expect("Mapping should succeed");

    assert_eq!(table.database_name, "8a1b2c3d-org");
    assert_eq!(table.table_name, "consumer_complaints__2015_");
    assert_eq!(
        table.fields,
        vec![
            "complaint_id",
            "product",
            "sub_product",
            "date_received",
            "zip_code",
            "location_"
        ]
    );
    assert_eq!(table.location, "/org/8a1b2c3d/brokers/userspace/5f1d");

    let ddl = table.create_table_statement();
    assert!(ddl.starts_with(
        "CREATE EXTERNAL TABLE IF NOT EXISTS `8a1b2c3d-org`.`consumer_complaints__2015_` (`complaint_id` STRING,"
    ));
    assert!(ddl.contains("LOCATION '/org/8a1b2c3d/brokers/userspace/5f1d'"));
}

#[test]
fn test_every_generated_name_is_valid() {
    let titles = [
        "2016 Census: Population",
        "SELECT * FROM table",
        "   ",
        "données météo",
        "table",
    ];
    let mapper = MetadataMapper::new(RestrictedKeywords::hive());
    let keywords = RestrictedKeywords::hive();

    for title in titles {
        let metadata = Metadata::from_json(&metadata_json(title, "Id,Name,Value,Comment"))
            .expect("Metadata should parse");
        let table = mapper.map(&metadata, "db").expect("Mapping should succeed");

        for name in std::iter::once(&table.table_name).chain(&table.fields) {
            assert!(
                is_valid_identifier(name, IDENTIFIER_MAX_LEN),
                "{name:?} from {title:?} is not a valid identifier"
            );
            assert!(
                !keywords.contains(name),
                "{name:?} from {title:?} is a reserved word"
            );
        }
    }
}

#[test]
fn test_sanitization_collision_reported_as_columns() {
    let metadata = Metadata::from_json(&metadata_json("t", "Price ($),Price (€),Price"))
        .expect("Metadata should parse");
    let mapper = MetadataMapper::new(RestrictedKeywords::hive());

    let err = mapper.map(&metadata, "db").expect_err("Mapping should fail");

    assert!(matches!(err, PublisherError::DuplicateColumns(_)));
    assert_eq!(err.to_string(), "Duplicated columns in table: price____");
    assert!(err.is_user_correctable());
}

#[test]
fn test_concurrent_mapping_shares_keywords() {
    let mapper = Arc::new(MetadataMapper::new(Arc::new(RestrictedKeywords::hive())));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let mapper = Arc::clone(&mapper);
            thread::spawn(move || {
                let metadata =
                    Metadata::from_json(&metadata_json(&format!("Dataset {i}"), "Date,Value"))
                        .expect("Metadata should parse");
                mapper.map(&metadata, "db").expect("Mapping should succeed")
            })
        })
        .collect();

    let tables: HashSet<String> = handles
        .into_iter()
        .map(|h| {
            let table = h.join().expect("Thread should not panic");
            assert_eq!(table.fields, vec!["date_", "value"]);
            table.table_name
        })
        .collect();

    assert_eq!(tables.len(), 8);
    assert!(tables.contains("dataset_0"));
}
