use deck_convert::{convert_master, convert_units, ConvertConfig, Error, NormalizeOptions};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Test fixtures - sample question banks

fn health_concepts_csv() -> String {
    "\u{feff}id,deck_id,unit_id,question,choice1,choice2,choice3,choice4,answer_index,explanation,tags,importance,difficulty\n\
     1,deck_health01,unit_health_concepts,健康とは何か,身体,心,社会,すべて,4,WHO の定義,\"health,who\",3,\n\
     2,deck_health01,unit_health_concepts,,A,B,C,D,1,,,,\n\
     3,deck_health01,unit_health_concepts,Q3,A,,,,1,,,,\n\
     4,deck_health01,unit_health_concepts,Q4,A,B,,,9,,,,1\n\
     5,,,Q5,A,B,C,,0,,,,\n\
     6,deck_health01,unit_health_concepts,Q6,A,B,C,D,2,,,x,x\n"
        .to_string()
}

fn numbered_csv(count: usize) -> String {
    let mut content = "id,question,choice1,choice2,answer_index,stable_id\n".to_string();
    for i in 1..=count {
        content.push_str(&format!("{i},Question {i},Yes,No,1,q-{i}\n"));
    }
    content
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn config_in(dir: &Path) -> ConvertConfig {
    ConvertConfig {
        outdir: dir.join("decks"),
        ..Default::default()
    }
}

// Explicit-units mode

#[test]
fn units_mode_writes_deck_json() {
    let dir = TempDir::new().unwrap();
    let concepts = write(dir.path(), "concepts.csv", &health_concepts_csv());
    let status = write(dir.path(), "status.csv", &numbered_csv(10));
    let raw_units = vec![
        format!("unit_health_concepts:健康の考え方:{}", concepts.display()),
        format!("unit_health_status:私たちの健康:{}", status.display()),
    ];

    let summary = convert_units(
        "deck_health01",
        "現代社会と健康",
        &raw_units,
        &config_in(dir.path()),
    )
    .unwrap();

    let expected_path = dir.path().join("decks").join("deck_health01.json");
    assert_eq!(summary.path, expected_path);
    assert_eq!(summary.units, 2);
    assert_eq!(summary.cards, 14);

    let text = fs::read_to_string(&expected_path).unwrap();
    assert!(text.contains("現代社会と健康"));

    let deck = read_json(&expected_path);
    assert_eq!(deck["id"], "deck_health01");
    assert_eq!(deck["isPurchased"], false);

    let concepts = &deck["units"][0];
    assert_eq!(concepts["id"], "unit_health_concepts");
    let cards = concepts["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 4);

    assert_eq!(cards[0]["stableId"], "deck_health01:unit_health_concepts:1");
    assert_eq!(cards[0]["answerIndex"], 3);
    assert_eq!(cards[0]["tags"], serde_json::json!(["health", "who"]));
    assert_eq!(cards[0]["importance"], 3);
    assert_eq!(cards[0]["isPremium"], false);

    // answer_index 9 with two choices clamps to the last one
    assert_eq!(cards[1]["question"], "Q4");
    assert_eq!(cards[1]["answerIndex"], 1);
    assert_eq!(cards[1]["importance"], 1);
    assert_eq!(cards[1]["isPremium"], true);

    // only the row's own id is available
    assert_eq!(cards[2]["stableId"], "5");
    assert_eq!(cards[2]["answerIndex"], 0);

    assert_eq!(cards[3]["importance"], 2);
    assert_eq!(cards[3]["explanation"], "");

    let status_cards = deck["units"][1]["cards"].as_array().unwrap();
    let free: Vec<bool> = status_cards
        .iter()
        .map(|c| !c["isPremium"].as_bool().unwrap())
        .collect();
    assert_eq!(free.iter().filter(|f| **f).count(), 2);
    assert!(free[0] && free[1] && !free[2]);
    assert_eq!(status_cards[0]["stableId"], "q-1");
}

#[test]
fn units_mode_honours_explicit_out_path() {
    let dir = TempDir::new().unwrap();
    let src = write(dir.path(), "u.csv", &numbered_csv(3));
    let out = dir.path().join("custom").join("deck.json");
    let config = ConvertConfig {
        out_path: Some(out.clone()),
        ..config_in(dir.path())
    };

    let summary = convert_units("d1", "Deck", &[format!("u1:U1:{}", src.display())], &config)
        .unwrap();

    assert_eq!(summary.path, out);
    assert!(out.exists());
    assert!(!dir.path().join("decks").exists());
}

#[test]
fn units_mode_rejects_malformed_spec() {
    let dir = TempDir::new().unwrap();
    let result = convert_units("d1", "Deck", &["u1-no-colons"], &config_in(dir.path()));
    assert!(matches!(result, Err(Error::MalformedUnitSpec(ref s)) if s == "u1-no-colons"));
}

#[test]
fn units_mode_fails_on_unit_without_cards_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let good = write(dir.path(), "good.csv", &numbered_csv(2));
    let empty = write(dir.path(), "empty.csv", "question,choice1,choice2\n,A,B\nQ,A,\n");
    let raw_units = vec![
        format!("good:Good:{}", good.display()),
        format!("empty_unit:Empty:{}", empty.display()),
    ];

    let err = convert_units("d1", "Deck", &raw_units, &config_in(dir.path())).unwrap_err();

    assert!(err.to_string().contains("empty_unit"));
    assert!(!dir.path().join("decks").join("d1.json").exists());
}

#[test]
fn units_mode_rejects_bad_free_ratio() {
    let dir = TempDir::new().unwrap();
    let config = ConvertConfig {
        free_ratio: 1.5,
        ..config_in(dir.path())
    };
    let result = convert_units("d1", "Deck", &["u:U:u.csv"], &config);
    assert!(matches!(result, Err(Error::InvalidFreeRatio(_))));
}

#[test]
fn zero_free_ratio_makes_everything_premium() {
    let dir = TempDir::new().unwrap();
    let src = write(dir.path(), "u.csv", &numbered_csv(4));
    let config = ConvertConfig {
        free_ratio: 0.0,
        ..config_in(dir.path())
    };

    let summary =
        convert_units("d1", "Deck", &[format!("u:U:{}", src.display())], &config).unwrap();

    let deck = read_json(&summary.path);
    let cards = deck["units"][0]["cards"].as_array().unwrap();
    assert!(cards.iter().all(|c| c["isPremium"] == true));
}

// Master-index mode

fn master_csv(rows: &[String]) -> String {
    let mut content =
        "deck_id,deck_title,unit_no,unit_id,unit_title,assets_deck_path,assets_src_csv,status\n"
            .to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

#[test]
fn master_mode_collects_and_orders_units() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a.csv", &numbered_csv(5));
    let b = write(dir.path(), "b.csv", &numbered_csv(10));
    let c = write(dir.path(), "c.csv", &numbered_csv(1));
    let deck_path = dir.path().join("assets").join("decks").join("X.json");
    let master = write(
        dir.path(),
        "master.csv",
        &master_csv(&[
            format!("X,Deck X,2,unit_b,B,{},{},ok", deck_path.display(), b.display()),
            format!("X,Deck X,bad,unit_c,C,,{},ok", c.display()),
            format!("X,Deck X,1,unit_a,A,,{},ok", a.display()),
            format!("Y,Deck Y,1,unit_y,Y,,{},ok", a.display()),
        ]),
    );

    let summary = convert_master(&master, "X", &config_in(dir.path())).unwrap();

    assert_eq!(summary.path, deck_path);
    assert_eq!(summary.units, 3);
    assert_eq!(summary.cards, 16);

    let deck = read_json(&deck_path);
    assert_eq!(deck["title"], "Deck X");
    let ids: Vec<&str> = deck["units"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["unit_a", "unit_b", "unit_c"]);

    let b_cards = deck["units"][1]["cards"].as_array().unwrap();
    let free = b_cards.iter().filter(|c| c["isPremium"] == false).count();
    assert_eq!(free, 2);
}

#[test]
fn master_mode_without_matching_deck_fails() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a.csv", &numbered_csv(1));
    let master = write(
        dir.path(),
        "master.csv",
        &master_csv(&[format!("X,Deck X,1,unit_a,A,,{},ok", a.display())]),
    );

    let err = convert_master(&master, "Y", &config_in(dir.path())).unwrap_err();
    assert!(matches!(err, Error::NoMatchingRows { .. }));
    assert!(err.to_string().contains("Y"));
}

#[test]
fn master_mode_missing_index_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = convert_master(
        &dir.path().join("nope.csv"),
        "X",
        &config_in(dir.path()),
    );
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn legacy_schema_changes_importance_fallback() {
    let dir = TempDir::new().unwrap();
    let src = write(
        dir.path(),
        "u.csv",
        "question,choice1,choice2,importance,difficulty\nQ,A,B,,3\n",
    );
    let raw = [format!("u:U:{}", src.display())];

    let current = convert_units("current", "Deck", &raw, &config_in(dir.path())).unwrap();
    let legacy_config = ConvertConfig {
        options: NormalizeOptions {
            legacy_schema: true,
        },
        ..config_in(dir.path())
    };
    let legacy = convert_units("legacy", "Deck", &raw, &legacy_config).unwrap();

    assert_eq!(read_json(&current.path)["units"][0]["cards"][0]["importance"], 3);
    assert_eq!(read_json(&legacy.path)["units"][0]["cards"][0]["importance"], 2);
}
