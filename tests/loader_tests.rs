//! Integration tests for loading movie data.
//!
//! Tests cover:
//! - Loading from a file, keeping document order
//! - Missing and malformed data files
//! - Degrading to an empty collection with a failure status
//! - The bundled sample data

use cinespace::core::engine::{list_by_category, search};
use cinespace::core::loader::{load_collection, load_or_empty, DataSource};
use cinespace::models::catalog::LoadStatus;
use cinespace::models::movie::{Category, MovieId};
use cinespace::Error;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE: &str = r#"{
    "movies": {
        "2": {
            "id": 2,
            "title": "奥本海默",
            "year": 2023,
            "rating": 8.6,
            "category": "剧情片",
            "description": "原子弹之父的传记片。",
            "director": "克里斯托弗·诺兰",
            "cast": "基里安·墨菲, 艾米莉·布朗特",
            "genres": "剧情, 传记, 历史",
            "duration": "180分钟",
            "releaseDate": "2023-08-30",
            "country": "美国",
            "plot": "二战期间的曼哈顿计划。",
            "poster": "drama1.svg"
        },
        "1": {
            "id": "1",
            "title": "流浪地球2",
            "year": 2023,
            "rating": 8.3,
            "category": "科幻片",
            "cast": ["吴京", "刘德华"],
            "genres": ["科幻", "冒险"]
        }
    }
}"#;

fn write_data(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_load_collection_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_data(&dir, "movies.json", SAMPLE);

    let collection = load_collection(&DataSource::File(path)).await.unwrap();
    assert_eq!(collection.len(), 2);

    // Document order, not key order
    let titles: Vec<&str> = collection.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["奥本海默", "流浪地球2"]);

    let oppenheimer = collection.get(&MovieId::from(2)).unwrap();
    assert_eq!(oppenheimer.category, Category::Drama);
    assert_eq!(oppenheimer.release_date, "2023-08-30");

    let wandering = collection.get(&MovieId::from("1")).unwrap();
    assert_eq!(wandering.cast, vec!["吴京".to_string(), "刘德华".to_string()]);
    assert!(wandering.director.is_empty());
}

#[tokio::test]
async fn test_loaded_collection_is_searchable() {
    let dir = TempDir::new().unwrap();
    let path = write_data(&dir, "movies.json", SAMPLE);
    let collection = load_collection(&DataSource::File(path)).await.unwrap();

    let results = search(&collection, "诺兰").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].movie_id, MovieId::from("2"));
    assert_eq!(results[0].score, 50);

    // Category label, cast and genres
    let results = search(&collection, "刘德华").unwrap();
    assert_eq!(results[0].score, 40);
    let results = search(&collection, "科幻").unwrap();
    assert_eq!(results[0].movie_id, MovieId::from("1"));
    assert_eq!(results[0].score, 30 + 25);

    assert_eq!(list_by_category(&collection, "drama").len(), 1);
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let source = DataSource::File(dir.path().join("missing.json"));

    let err = load_collection(&source).await.unwrap_err();
    assert!(matches!(err, Error::DataSourceNotFound(_)));
}

#[tokio::test]
async fn test_load_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = write_data(&dir, "movies.json", "{ \"movies\": { \"1\": ");

    let err = load_collection(&DataSource::File(path)).await.unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[tokio::test]
async fn test_load_skips_invalid_records() {
    let dir = TempDir::new().unwrap();
    let path = write_data(
        &dir,
        "movies.json",
        r#"{ "movies": {
            "1": { "title": "X", "category": "恐怖片", "year": 2020, "rating": 6.0 },
            "2": { "title": "Tenet", "category": "动作片", "year": 2020, "rating": 7.8 },
            "3": { "title": 5, "category": "动作片", "year": 2020, "rating": 7.0 }
        } }"#,
    );

    let collection = load_collection(&DataSource::File(path)).await.unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(&MovieId::from("2")).unwrap().title, "Tenet");

    let action = list_by_category(&collection, "action");
    assert_eq!(action.len(), 1);
}

#[tokio::test]
async fn test_load_or_empty_failure() {
    let dir = TempDir::new().unwrap();
    let source = DataSource::File(dir.path().join("missing.json"));

    let catalog = load_or_empty(&source).await;
    assert!(!catalog.is_loaded());
    assert!(matches!(catalog.status, LoadStatus::Failed(_)));
    assert!(catalog.collection.is_empty());

    // Queries on the empty collection still work
    assert!(search(&catalog.collection, "anything").unwrap().is_empty());
}

#[tokio::test]
async fn test_load_or_empty_with_no_movies() {
    let dir = TempDir::new().unwrap();
    let path = write_data(&dir, "movies.json", r#"{ "movies": {} }"#);

    let catalog = load_or_empty(&DataSource::File(path)).await;
    assert!(catalog.is_loaded());
    assert!(catalog.collection.is_empty());
}

#[tokio::test]
async fn test_bundled_sample_data() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/movies.json");
    let collection = load_collection(&DataSource::File(path)).await.unwrap();

    assert_eq!(collection.len(), 18);
    for category in Category::ALL {
        assert!(
            !list_by_category(&collection, category.key()).is_empty(),
            "{} should have movies",
            category.key()
        );
    }

    let results = search(&collection, "诺兰").unwrap();
    let found: Vec<&str> = results.iter().map(|r| r.movie_id.as_str()).collect();
    assert_eq!(found, vec!["6", "13"]);
}
