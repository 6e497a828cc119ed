use std::{env, process::ExitCode};

use fined::{Finder, Input};

// cargo run -- '{"path": "Cargo", "extensions": [".toml", ".lock"], "findUp": true}'
// cargo run -- .apprc '{"extensions": {".json": "json", ".yml": "yaml"}}'

/// An argument that parses as JSON is taken as JSON, anything else is a
/// plain path.
fn parse_arg(arg: &str) -> Input {
    Input::from_json_str(arg).unwrap_or_else(|_| Input::from(arg))
}

fn main() -> ExitCode {
    fined::log::enable_by_env();

    let mut args = env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: fined <path | options-json> [defaults-json]");
        return ExitCode::from(2);
    };
    let defaults = args.next();

    let input = parse_arg(&input);
    let defaults = defaults.as_deref().map_or(Input::Empty, parse_arg);
    let request = Finder::new().try_find(input, defaults);

    match request {
        Ok(Some(found)) => match serde_json::to_string(&found) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::from(2)
            }
        },
        Ok(None) => {
            println!("null");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_path_arg_test() {
        assert!(matches!(parse_arg("config"), Input::Path(p) if p == "config"));
        assert!(matches!(parse_arg("./a/b.json"), Input::Path(p) if p == "./a/b.json"));
        // broken JSON is still a path
        assert!(matches!(parse_arg("{config"), Input::Path(p) if p == "{config"));
    }

    #[test]
    fn json_arg_test() {
        assert!(matches!(parse_arg("\"config\""), Input::Path(p) if p == "config"));
        assert!(matches!(parse_arg("[\"config\"]"), Input::Empty));
        assert!(matches!(parse_arg("null"), Input::Empty));

        let Input::Options(options) = parse_arg(r#"{"path": "config", "findUp": true}"#) else {
            unreachable!()
        };
        assert_eq!(options.path, Some(json!("config")));
        assert_eq!(options.find_up, Some(json!(true)));
    }

    #[test]
    fn quoted_path_finds_file_test() {
        let cwd = fined::test_helper::p(vec!["extensions"]);
        let defaults = json!({ "cwd": cwd, "extensions": ".json" }).to_string();
        let found = Finder::new()
            .try_find(parse_arg("\"config\""), parse_arg(&defaults))
            .unwrap()
            .unwrap();
        assert_eq!(found.path, cwd.join("config.json"));
    }
}
