use tracing::{info, warn};

use gameval_core::{
    accumulate, extract_constants, load_table, preserve_order_update, write_table, Constants,
    GamevalError, GamevalTable, Result,
};

use crate::fetch::SourceFetcher;
use crate::reader::GenerateConfig;

/// Fetch every upstream file, rebuild the table and write it.
///
/// Nothing is written unless every fetch succeeded. Returns the number of
/// constants written.
pub fn run_generate(config: &GenerateConfig, fetcher: &dyn SourceFetcher) -> Result<usize> {
    let existing = match load_table(&config.output) {
        Ok(table) => table,
        Err(GamevalError::MissingTable { .. }) => GamevalTable::new(),
        Err(e) => {
            warn!("Ignoring existing table: {e}");
            GamevalTable::new()
        }
    };

    let mut fresh = GamevalTable::new();
    for (category, files) in &config.export_map {
        info!("Processing {category}...");
        let mut constants = Constants::new();

        for file in files {
            let url = format!("{}/{}", config.base_url.trim_end_matches('/'), file);
            info!("Fetching {url}...");
            let source = fetcher.fetch(&url)?;
            let file_constants = extract_constants(&source)?;
            info!("  Found {} constants in {file}", file_constants.len());
            accumulate(&mut constants, file_constants);
        }

        info!("  Total {category}: {} constants", constants.len());
        fresh.insert(category.clone(), constants);
    }

    let table = if existing.is_empty() {
        fresh
    } else {
        preserve_order_update(&existing, &fresh)
    };

    write_table(&config.output, &table)?;

    let total: usize = table.values().map(Constants::len).sum();
    info!("Generated {}", config.output.display());
    info!("Total constants: {total}");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::fs;

    struct FakeFetcher {
        files: HashMap<String, String>,
    }

    impl FakeFetcher {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
            }
        }
    }

    impl SourceFetcher for FakeFetcher {
        fn fetch(&self, url: &str) -> Result<String> {
            self.files.get(url).cloned().ok_or_else(|| GamevalError::Fetch {
                url: url.to_string(),
                message: "HTTP 404 Not Found".into(),
            })
        }
    }

    fn config(output: std::path::PathBuf) -> GenerateConfig {
        let mut export_map = IndexMap::new();
        export_map.insert("npcs".to_string(), vec!["NpcID.java".to_string()]);
        export_map.insert(
            "objects".to_string(),
            vec!["ObjectID.java".to_string(), "ObjectID1.java".to_string()],
        );
        GenerateConfig {
            base_url: "https://example.test/gameval/".into(),
            output,
            export_map,
        }
    }

    fn upstream() -> FakeFetcher {
        FakeFetcher::new(&[
            (
                "https://example.test/gameval/NpcID.java",
                "public static final int MAN = 3106;\npublic static final int HANS = 3105;",
            ),
            (
                "https://example.test/gameval/ObjectID.java",
                "/** Tree */\npublic static final int TREE = 1276;",
            ),
            (
                "https://example.test/gameval/ObjectID1.java",
                "public static final int OAK = 10820;\npublic static final int TREE = 1278;",
            ),
        ])
    }

    #[test]
    fn generates_fresh_table() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("scene/gamevals.json");
        let total = run_generate(&config(output.clone()), &upstream()).unwrap();
        assert_eq!(total, 4);

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("// AUTO-GENERATED FILE. DO NOT MODIFY.\n{\n    \"npcs\""));
        let table = load_table(&output).unwrap();
        assert_eq!(table["objects"]["TREE"], 1278);
        let npcs: Vec<&str> = table["npcs"].keys().map(String::as_str).collect();
        assert_eq!(npcs, vec!["MAN", "HANS"]);
    }

    #[test]
    fn keeps_existing_order() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("gamevals.json");
        fs::write(
            &output,
            "// AUTO-GENERATED FILE. DO NOT MODIFY.\n{\"npcs\": {\"HANS\": 1, \"GONE\": 2, \"MAN\": 3}}",
        )
        .unwrap();

        run_generate(&config(output.clone()), &upstream()).unwrap();
        let table = load_table(&output).unwrap();
        let npcs: Vec<(&str, i64)> = table["npcs"]
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(npcs, vec![("HANS", 3105), ("MAN", 3106)]);
    }

    #[test]
    fn fetch_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("gamevals.json");
        let fetcher = FakeFetcher::new(&[(
            "https://example.test/gameval/NpcID.java",
            "public static final int MAN = 3106;",
        )]);

        let err = run_generate(&config(output.clone()), &fetcher).unwrap_err();
        assert!(matches!(err, GamevalError::Fetch { ref url, .. } if url.ends_with("ObjectID.java")));
        assert!(!output.exists());
    }

    #[test]
    fn unparsable_existing_table_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("gamevals.json");
        fs::write(&output, "{ not json").unwrap();
        run_generate(&config(output.clone()), &upstream()).unwrap();
        assert_eq!(load_table(&output).unwrap()["npcs"].len(), 2);
    }
}
