use indexmap::IndexMap;

/// Raw-file root of the upstream `gameval` package the constants are scraped from.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/runelite/runelite/refs/heads/master/runelite-api/src/main/java/net/runelite/api/gameval";

/// Location of the gameval table, relative to the project root.
pub const DEFAULT_TABLE_PATH: &str = "src/main/resources/rs117/hd/scene/gamevals.json";

/// First line of every generated table.
pub const TABLE_HEADER: &str = "// AUTO-GENERATED FILE. DO NOT MODIFY.";

/// Revision the report compares the working copy against.
pub const DEFAULT_REVISION: &str = "HEAD";

/// Category → upstream source files, in output order.
pub fn default_export_map() -> IndexMap<String, Vec<String>> {
    [
        ("npcs", &["NpcID.java"][..]),
        ("objects", &["ObjectID.java", "ObjectID1.java"][..]),
        ("anims", &["AnimationID.java"][..]),
        ("spotanims", &["SpotanimID.java"][..]),
    ]
    .into_iter()
    .map(|(category, files)| {
        (
            category.to_string(),
            files.iter().map(|f| f.to_string()).collect(),
        )
    })
    .collect()
}
