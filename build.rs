use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const ASSET_DIR: &str = "static";
const ASSET_EXTENSIONS: &[&str] = &["html", "js", "css"];

fn main() {
    // Rebuild (and bump the build id) when the bundled front-end changes, so
    // the startup log tells which assets the running binary was built with.
    println!("cargo:rerun-if-changed={}", ASSET_DIR);
    for asset in front_end_assets(Path::new(ASSET_DIR)) {
        println!("cargo:rerun-if-changed={}", asset.display());
    }

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITIES_BUILD_ID={}", build_id);
}

fn is_asset(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ASSET_EXTENSIONS.contains(&ext))
}

/// Asset files under `dir`, sorted so the rerun list is stable.
fn front_end_assets(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut assets: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .flat_map(|path| {
            if path.is_dir() {
                front_end_assets(&path)
            } else if is_asset(&path) {
                vec![path]
            } else {
                Vec::new()
            }
        })
        .collect();
    assets.sort();
    assets
}
