use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    let mode = table
        .get("lists")
        .and_then(|lists| lists.get("mode"))
        .and_then(|mode| mode.as_str());
    if !matches!(mode, Some("indentation" | "marker-sensitive")) {
        panic!("default_config.toml: lists.mode must be \"indentation\" or \"marker-sensitive\"");
    }
}
