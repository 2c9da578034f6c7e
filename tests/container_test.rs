//! Integration tests for container loading and asset resolution.

mod common;

use std::sync::Arc;

use common::{pattern_shape, two_boards, Container, SHARED_RESOURCES, SHARED_RESOURCES_ENTRY};
use unxd::{Error, ParseOptions, ResourceCache, Unxd, XdFile, XdParser};

fn load(data: &[u8], cache: &ResourceCache) -> unxd::Result<XdFile> {
    XdParser::from_bytes(data)?.parse(cache)
}

#[test]
fn test_artboards_follow_manifest_order() {
    let file = load(&two_boards(), &ResourceCache::new()).unwrap();

    let names: Vec<_> = file.iter().map(|a| a.name()).collect();
    assert_eq!(names, [Some("Home"), Some("About")]);
    assert_eq!(file.artboards()[0].path(), Some("board1"));
    assert_eq!(file.artboards()[1].path(), Some("board2"));
    assert_eq!(file.manifest().name.as_deref(), Some("Design"));
}

#[test]
fn test_shared_resources_decoded_once() {
    let cache = ResourceCache::new();
    let file = load(&two_boards(), &cache).unwrap();

    let [first, second] = file.artboards() else {
        panic!("expected two artboards");
    };
    assert!(Arc::ptr_eq(first.resources_arc(), second.resources_arc()));
    assert_eq!(file.archive().read_count(SHARED_RESOURCES_ENTRY), 1);
    assert_eq!(file.stats().resources_decoded, 1);
    assert_eq!(file.stats().cache_hits, 1);
    assert_eq!(cache.len(), 1);
    assert!(cache.contains(SHARED_RESOURCES));
}

#[test]
fn test_artboard_bounds_from_resources() {
    let file = load(&two_boards(), &ResourceCache::new()).unwrap();
    let home = file.artboard_by_name("Home").unwrap();
    let bounds = home.bounds().unwrap();
    assert_eq!(bounds.width, 375.0);
    assert_eq!(bounds.height, 812.0);
}

#[test]
fn test_pattern_asset_resolution() {
    let file = load(&two_boards(), &ResourceCache::new()).unwrap();
    let shape = &file.artboards()[0].objects()[0];
    let meta = shape
        .style
        .as_ref()
        .and_then(|s| s.pattern())
        .and_then(|p| p.meta.as_ref());

    let first = file.resource_bytes(meta).unwrap().unwrap();
    let second = file.resource_bytes(meta).unwrap().unwrap();
    assert!(first.starts_with(b"\x89PNG"));
    assert_eq!(first, second);
    assert_eq!(file.archive().read_count("resources/img-1"), 2);

    let modified = meta.unwrap().ux.as_ref().unwrap().href_modified_at().unwrap();
    assert_eq!(modified.timestamp(), 1_600_000_000);
}

#[test]
fn test_absent_and_dangling_assets() {
    let data = Container::new()
        .manifest(&[("a", "A")])
        .artboard(
            "a",
            SHARED_RESOURCES,
            serde_json::json!([pattern_shape("blank", "   "), pattern_shape("gone", "nope")]),
        )
        .resources(SHARED_RESOURCES_ENTRY, &[])
        .build();
    let file = load(&data, &ResourceCache::new()).unwrap();
    let objects = file.artboards()[0].objects();

    let blank = objects[0].style.as_ref().unwrap();
    assert_eq!(file.pattern_bytes(blank).unwrap(), None);

    let gone = objects[1].style.as_ref().unwrap();
    match file.pattern_bytes(gone) {
        Err(Error::ResourceMissing(uid)) => assert_eq!(uid, "nope"),
        other => panic!("expected ResourceMissing, got {:?}", other),
    }

    assert_eq!(file.resource_bytes(None).unwrap(), None);
}

#[test]
fn test_missing_artwork_leaves_cache_untouched() {
    let data = Container::new()
        .entry("manifest", r#"{"children":[{"path":"resources"}]}"#)
        .resources(SHARED_RESOURCES_ENTRY, &[])
        .build();
    let cache = ResourceCache::new();

    let err = load(&data, &cache).unwrap_err();
    assert!(matches!(err, Error::Format { ref path, .. } if path == "manifest"));
    assert!(cache.is_empty());
}

#[test]
fn test_missing_artboard_document_names_it() {
    let data = Container::new()
        .manifest(&[("board1", "Home"), ("board2", "About")])
        .artboard("board1", SHARED_RESOURCES, serde_json::json!([]))
        .resources(SHARED_RESOURCES_ENTRY, &[])
        .build();

    let err = load(&data, &ResourceCache::new()).unwrap_err();
    assert!(
        matches!(err, Error::Format { ref path, .. } if path == "artwork/board2/graphics/graphicContent.agc")
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let names: Vec<String> = (0..24).map(|i| format!("board{}", i)).collect();
    let descriptors: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), n.as_str())).collect();

    let mut container = Container::new().manifest(&descriptors);
    for (i, name) in names.iter().enumerate() {
        // Alternate between two resources documents.
        let href = if i % 2 == 0 {
            SHARED_RESOURCES
        } else {
            "/resources/other.agc"
        };
        container = container.artboard(name, href, serde_json::json!([]));
    }
    let data = container
        .resources(SHARED_RESOURCES_ENTRY, &[])
        .resources("resources/other.agc", &[])
        .build();

    let sequential = load(&data, &ResourceCache::new()).unwrap();
    let parallel = XdParser::from_bytes_with_options(&data, ParseOptions::new().parallel())
        .unwrap()
        .parse(&ResourceCache::new())
        .unwrap();

    let order = |file: &XdFile| -> Vec<String> {
        file.iter()
            .filter_map(|a| a.path().map(str::to_string))
            .collect()
    };
    assert_eq!(order(&parallel), names);
    assert_eq!(order(&sequential), order(&parallel));
    assert_eq!(parallel.stats().resources_decoded, 2);
    assert_eq!(parallel.stats().cache_hits, 22);
    assert_eq!(parallel.archive().read_count(SHARED_RESOURCES_ENTRY), 1);
    assert_eq!(parallel.archive().read_count("resources/other.agc"), 1);
}

#[test]
fn test_parallel_reports_first_failure_in_manifest_order() {
    let data = Container::new()
        .manifest(&[("ok", "Ok"), ("bad1", "Bad1"), ("bad2", "Bad2")])
        .artboard("ok", SHARED_RESOURCES, serde_json::json!([]))
        .resources(SHARED_RESOURCES_ENTRY, &[])
        .build();

    let err = XdParser::from_bytes_with_options(&data, ParseOptions::new().parallel())
        .unwrap()
        .parse(&ResourceCache::new())
        .unwrap_err();
    assert!(
        matches!(err, Error::Format { ref path, .. } if path == "artwork/bad1/graphics/graphicContent.agc")
    );
}

#[test]
fn test_cache_shared_across_containers() {
    let cache = Arc::new(ResourceCache::new());
    let data = two_boards();

    let first = Unxd::new()
        .with_cache(Arc::clone(&cache))
        .parse_bytes(&data)
        .unwrap();
    let second = Unxd::new()
        .with_cache(Arc::clone(&cache))
        .parse_bytes(&data)
        .unwrap();

    assert_eq!(first.stats().resources_decoded + second.stats().resources_decoded, 1);
    assert_eq!(second.archive().read_count(SHARED_RESOURCES_ENTRY), 0);
    assert!(Arc::ptr_eq(
        first.artboards()[0].resources_arc(),
        second.artboards()[0].resources_arc()
    ));
}

#[test]
fn test_mime_check() {
    let options = ParseOptions::new().with_mime_check(true);
    assert!(unxd::parse_bytes_with_options(&two_boards(), options).is_ok());

    let wrong = Container::new()
        .entry("mimetype", "application/epub+zip")
        .manifest(&[])
        .build();
    let err = unxd::parse_bytes_with_options(&wrong, options).unwrap_err();
    assert!(matches!(err, Error::UnsupportedMimeType(ref m) if m == "application/epub+zip"));
}

#[test]
fn test_on_disk_container() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.xd");
    std::fs::write(&path, two_boards()).unwrap();

    assert!(unxd::is_xd(&path));
    let file = unxd::parse_file(&path).unwrap();
    assert_eq!(file.artboard_count(), 2);
    assert_eq!(file.archive().source(), Some(path.as_path()));

    let json = unxd::to_json(&path, unxd::JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["artboards"][0]["name"], "Home");
}

#[test]
fn test_not_a_container() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "plain text").unwrap();

    assert!(!unxd::is_xd(&path));
    assert!(matches!(unxd::parse_file(&path), Err(Error::UnknownFormat)));
    assert!(matches!(
        unxd::parse_file(dir.path().join("missing.xd")),
        Err(Error::Io(_))
    ));
}
