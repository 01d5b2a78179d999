use brawldex_catalog::{CatalogError, DataDir, load_records, write_records_atomic};
use brawldex_core::{BrawlerRecord, MapRecord};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn brawler(name: &str, rarity: &str) -> BrawlerRecord {
    BrawlerRecord {
        name: name.to_string(),
        rarity: rarity.to_string(),
        role: "Damage Dealer".to_string(),
        class: "Damage Dealer".to_string(),
        best_build: String::new(),
        best_modes: Vec::new(),
        description: String::new(),
        image: format!("{}.png", brawldex_core::slugify(name)),
        extra: Default::default(),
    }
}

#[test]
fn load_maps_from_json() {
    let tmp = TempDir::new().unwrap();
    write_json(
        tmp.path(),
        "maps.json",
        r#"
[
  {"name": "Hard Rock Mine", "mode": "Gem Grab", "image": "hard-rock-mine.png"},
  {"name": "Backyard Bowl", "mode": "Brawl Ball"}
]
"#,
    );

    let maps = DataDir::new(tmp.path()).load_maps().unwrap();
    assert_eq!(maps.len(), 2);
    assert_eq!(maps[0].name, "Hard Rock Mine");
    assert_eq!(maps[0].extra["image"], "hard-rock-mine.png");
    assert_eq!(maps[1].mode, "Brawl Ball");
}

#[test]
fn load_brawlers_from_json() {
    let tmp = TempDir::new().unwrap();
    write_json(
        tmp.path(),
        "brawlers.json",
        r#"
[
  {
    "name": "Şhelly",
    "rarity": "Starting Brawler",
    "role": "Damage Dealer",
    "class": "Damage Dealer",
    "best_build": "",
    "best_modes": ["Gem Grab"],
    "description": "",
    "image": "shelly.png"
  }
]
"#,
    );

    let brawlers = DataDir::new(tmp.path()).load_brawlers().unwrap();
    assert_eq!(brawlers.len(), 1);
    assert_eq!(brawlers[0].name, "Şhelly");
    assert_eq!(brawlers[0].best_modes, vec!["Gem Grab"]);
}

#[test]
fn null_placeholders_load_as_empty() {
    let tmp = TempDir::new().unwrap();
    write_json(
        tmp.path(),
        "brawlers.json",
        r#"[{"name": "Shelly", "rarity": "Rare", "best_build": null, "best_modes": null, "description": null}]"#,
    );
    let brawlers = DataDir::new(tmp.path()).load_brawlers().unwrap();
    assert_eq!(brawlers.len(), 1);
    assert_eq!(brawlers[0].rarity, "Rare");
    assert_eq!(brawlers[0].best_build, "");
    assert!(brawlers[0].best_modes.is_empty());
    assert_eq!(brawlers[0].description, "");
}

#[test]
fn empty_array_is_empty_list() {
    let tmp = TempDir::new().unwrap();
    write_json(tmp.path(), "maps.json", "[]");
    assert!(DataDir::new(tmp.path()).load_maps().unwrap().is_empty());
}

#[test]
fn missing_document_is_unavailable_not_empty() {
    let tmp = TempDir::new().unwrap();
    let err = DataDir::new(tmp.path()).load_maps().unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.is_data_unavailable());
}

#[test]
fn malformed_document_is_unavailable() {
    let tmp = TempDir::new().unwrap();
    write_json(tmp.path(), "maps.json", r#"[{"name": "Hard Rock Mine","#);
    let err = DataDir::new(tmp.path()).load_maps().unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.is_data_unavailable());
    assert!(err.to_string().contains("maps.json"));
}

#[test]
fn object_root_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    write_json(tmp.path(), "maps.json", r#"{"name": "Hard Rock Mine"}"#);
    let result: Result<Vec<MapRecord>, _> = load_records(&tmp.path().join("maps.json"));
    assert!(matches!(result, Err(CatalogError::Parse { .. })));
}

#[test]
fn record_without_name_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    write_json(tmp.path(), "maps.json", r#"[{"mode": "Heist"}]"#);
    assert!(DataDir::new(tmp.path()).load_maps().is_err());
}

#[test]
fn atomic_write_round_trips() {
    let tmp = TempDir::new().unwrap();
    let data = DataDir::new(tmp.path().join("nested").join("data"));
    let records = vec![brawler("El Primo", "Rare"), brawler("8-Bit", "Super Rare")];

    let path = data.write_brawlers(&records).unwrap();
    assert_eq!(path, data.brawlers_path());
    assert_eq!(data.load_brawlers().unwrap(), records);

    // Only the document itself remains in the directory.
    let entries: Vec<_> = fs::read_dir(data.root()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn atomic_write_replaces_existing_document() {
    let tmp = TempDir::new().unwrap();
    let data = DataDir::new(tmp.path());
    data.write_brawlers(&[brawler("Shelly", "Starting Brawler")]).unwrap();
    data.write_brawlers(&[brawler("Colt", "Rare"), brawler("Bull", "Rare")])
        .unwrap();

    let names: Vec<String> = data
        .load_brawlers()
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["Colt", "Bull"]);
}

#[test]
fn written_document_is_pretty_and_keeps_unicode() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("brawlers.json");
    write_records_atomic(&path, &[brawler("Çılgın", "Epic")]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Çılgın"));
    assert!(text.starts_with("[\n  {\n    \"name\""));
    assert!(text.ends_with("]\n"));
}
