use std::fs;
use std::path::PathBuf;

const CONFIG_SCHEMA_VERSION: i64 = 1;

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    let schema_version = config
        .get("schema_version")
        .and_then(toml::Value::as_integer)
        .unwrap_or_else(|| panic!("{} is missing `schema_version`", path.display()));
    if schema_version != CONFIG_SCHEMA_VERSION {
        panic!(
            "config schema mismatch in {}: expected {CONFIG_SCHEMA_VERSION} found {schema_version}",
            path.display()
        );
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time embedded desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
