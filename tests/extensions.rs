use fined::{find, find_value, test_helper::p, Extension, Extensions, Found, RawOptions};
use serde_json::{json, Value};
use std::path::PathBuf;

fn should_found(found: Option<Found>, expected_path: PathBuf, expected_ext: &str) {
    match found {
        Some(found) => {
            assert_eq!(found.path, expected_path);
            assert_eq!(found.extension.key(), expected_ext);
        }
        None => unreachable!("expected {}", expected_path.display()),
    }
}

fn should_mapped(found: Option<Found>, expected_path: PathBuf, expected_meta: Value) {
    match found {
        Some(Found {
            path,
            extension: Extension::Mapped { value, .. },
        }) => {
            assert_eq!(path, expected_path);
            assert_eq!(value, expected_meta);
        }
        other => unreachable!("{other:?}"),
    }
}

fn in_extensions() -> RawOptions {
    RawOptions::default().with_cwd(p(vec!["extensions"]))
}

#[test]
fn bare_path_test() {
    let bare = p(vec!["extensions", "bare"]);
    should_found(find(bare.as_path(), ()), bare.clone(), "");
    // without extensions only the exact path matches
    assert!(find(p(vec!["extensions", "config"]).as_path(), ()).is_none());
    assert!(find(in_extensions().with_path("only"), ()).is_none());
}

#[test]
fn first_listed_extension_wins_test() {
    should_found(
        find(in_extensions().with_path("config").with_extensions([".yml", ".json"]), ()),
        p(vec!["extensions", "config.yml"]),
        ".yml",
    );
    should_found(
        find(in_extensions().with_path("config").with_extensions([".json", ".yml"]), ()),
        p(vec!["extensions", "config.json"]),
        ".json",
    );
    should_found(
        find(in_extensions().with_path("only").with_extensions([".json", ".yml"]), ()),
        p(vec!["extensions", "only.yml"]),
        ".yml",
    );
}

#[test]
fn single_extension_test() {
    should_found(
        find(in_extensions().with_path("config").with_extensions(".json"), ()),
        p(vec!["extensions", "config.json"]),
        ".json",
    );
    // appended verbatim, no dot implied
    should_found(
        find(in_extensions().with_path("config").with_extensions("rc"), ()),
        p(vec!["extensions", "configrc"]),
        "rc",
    );
    assert!(find(in_extensions().with_path("config").with_extensions(".toml"), ()).is_none());
}

#[test]
fn non_string_list_items_are_ignored_test() {
    let options = in_extensions()
        .with_path("only")
        .with_extensions(json!([1, null, ".yml", { ".json": true }]));
    should_found(find(options, ()), p(vec!["extensions", "only.yml"]), ".yml");

    // nothing usable left means the bare path
    let options = in_extensions().with_path("bare").with_extensions(json!([1, 2]));
    should_found(find(options, ()), p(vec!["extensions", "bare"]), "");
}

#[test]
fn extension_map_test() {
    let extensions = Extensions::from_pairs([(".json", "json"), (".yml", "yaml")]);
    should_mapped(
        find(in_extensions().with_path("only").with_extensions(extensions.clone()), ()),
        p(vec!["extensions", "only.yml"]),
        json!("yaml"),
    );
    should_mapped(
        find(in_extensions().with_path("config").with_extensions(extensions), ()),
        p(vec!["extensions", "config.json"]),
        json!("json"),
    );

    let metadata = json!({ "module": "yaml-loader", "register": true });
    should_mapped(
        find(
            in_extensions()
                .with_path("only")
                .with_extensions(Extensions::from_pairs([(".yml", metadata.clone())])),
            (),
        ),
        p(vec!["extensions", "only.yml"]),
        metadata,
    );
}

#[test]
fn empty_extension_map_test() {
    let options = in_extensions().with_path("bare").with_extensions(json!({}));
    should_mapped(find(options, ()), p(vec!["extensions", "bare"]), Value::Null);

    let options = in_extensions().with_path("config").with_extensions(json!({}));
    assert!(find(options, ()).is_none());
}

#[test]
fn name_test() {
    let options = RawOptions::default()
        .with_path(p(vec!["extensions"]).to_string_lossy())
        .with_name("config")
        .with_extensions(".json");
    should_found(find(options, ()), p(vec!["extensions", "config.json"]), ".json");

    let options = in_extensions()
        .with_path("")
        .with_name("only")
        .with_extensions(".yml");
    should_found(find(options, ()), p(vec!["extensions", "only.yml"]), ".yml");
}

#[test]
fn defaults_test() {
    let defaults = in_extensions().with_extensions(vec![".toml", ".json"]);
    should_found(
        find("config", defaults.clone()),
        p(vec!["extensions", "config.json"]),
        ".json",
    );
    // the request's own extensions win over the defaults
    let request = RawOptions::default()
        .with_path("config")
        .with_extensions(".yml");
    should_found(
        find(request, defaults),
        p(vec!["extensions", "config.yml"]),
        ".yml",
    );
}

#[test]
fn null_extensions_fall_back_to_defaults_test() {
    let request = RawOptions::default()
        .with_path("config")
        .with_extensions(Value::Null);
    should_found(
        find(request, in_extensions().with_extensions(".json")),
        p(vec!["extensions", "config.json"]),
        ".json",
    );
}

#[test]
fn json_request_test() {
    let cwd = p(vec!["extensions"]);
    let defaults = json!({
        "cwd": cwd.to_string_lossy(),
        "extensions": { ".yml": "yaml", ".json": "json" },
    });
    should_mapped(
        find_value(&json!("config"), &defaults),
        p(vec!["extensions", "config.yml"]),
        json!("yaml"),
    );
    should_mapped(
        find_value(&json!({ "path": "config", "extensions": null }), &defaults),
        p(vec!["extensions", "config.yml"]),
        json!("yaml"),
    );
    assert!(find_value(&json!(7), &defaults).is_none());
    assert!(find_value(&json!({ "path": ["config"] }), &defaults).is_none());
}
