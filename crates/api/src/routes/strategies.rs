use std::io;
use std::path::Path;

use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

use common::StrategyFile;

use crate::{ApiError, AppState};

/// Strategies are Python source files, a fact of the external bot.
const STRATEGY_EXT: &str = "py";
/// Package-init file that lives alongside real strategies.
const SENTINEL: &str = "__init__.py";

pub fn strategies_router() -> Router<AppState> {
    Router::new().route("/strategies", get(list_strategies))
}

async fn list_strategies(
    State(state): State<AppState>,
) -> Result<Json<Vec<StrategyFile>>, ApiError> {
    let found = scan_strategies(&state.strategies_dir)?;
    debug!(count = found.len(), "strategy scan finished");
    Ok(Json(found))
}

/// Scan `dir` for strategy files. A missing directory is an empty listing,
/// not an error; ordering is whatever `read_dir` yields.
fn scan_strategies(dir: &Path) -> io::Result<Vec<StrategyFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(STRATEGY_EXT) {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(SENTINEL) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            found.push(StrategyFile {
                name: stem.to_string(),
                path: path.display().to_string(),
            });
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_yields_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("no-such-subdir");
        assert_eq!(scan_strategies(&gone).unwrap(), Vec::new());
    }

    #[test]
    fn sentinel_and_foreign_files_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.py", "b.py", "__init__.py", "notes.txt"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let mut names: Vec<String> = scan_strategies(dir.path())
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        names.sort();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn entry_paths_point_into_the_scanned_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Momentum.py"), "").unwrap();

        let found = scan_strategies(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Momentum");
        assert!(found[0].path.ends_with("Momentum.py"));
        assert!(found[0].path.starts_with(dir.path().to_str().unwrap()));
    }
}
