use std::fs;

use cinedex::catalog::{source, Catalog};
use cinedex::error::LoadError;
use cinedex::resource::Resource;
use tempfile::TempDir;

use crate::integration::support::{movie, movies_json};

#[test]
fn catalog_loads_from_file_in_source_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.json");
    let records = vec![
        movie(5, "Fifth", "Drama"),
        movie(2, "Second", "Comedy"),
        movie(9, "Ninth", "Action/Crime"),
    ];
    fs::write(&path, movies_json(&records)).unwrap();

    let catalog = Catalog::load(&Resource::File(path));
    let ids: Vec<_> = catalog.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![5, 2, 9]);
    assert_eq!(catalog.get_all(), records.as_slice());
}

#[test]
fn missing_file_yields_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&Resource::File(temp_dir.path().join("missing.json")));
    assert!(catalog.is_empty());
    assert!(catalog.get_all().is_empty());
}

#[test]
fn malformed_file_yields_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.json");
    fs::write(&path, r#"[{"id": 1, "movieName": "Half a record"}]"#).unwrap();

    assert!(Catalog::load(&Resource::File(path.clone())).is_empty());
    assert!(matches!(
        source::try_load(&Resource::File(path)),
        Err(LoadError::Parse(_))
    ));
}

#[test]
fn try_load_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");
    match source::try_load(&Resource::File(path.clone())) {
        Err(LoadError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn bundled_catalog_matches_known_records() {
    let catalog = Catalog::bundled();
    let prison = catalog.get_by_id(Some(1)).unwrap();
    assert_eq!(prison.name, "The Prison Escape");
    assert_eq!(prison.genre, "Drama");

    let boss = catalog.get_by_id(Some(2)).unwrap();
    assert_eq!(boss.name, "The Family Boss");
    assert!(boss.genre.contains("Crime"));

    assert!(catalog.get_by_id(Some(999)).is_none());
}
