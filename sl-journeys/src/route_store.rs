//! Persisted default route.
//!
//! `sl -s <from> <to>` stores the pair so that a bare `sl` can reuse it.
//! The route lives in `<config dir>/sl/config.json` as a small JSON
//! object.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Error from reading or writing the saved route.
#[derive(Debug, thiserror::Error)]
pub enum RouteStoreError {
    /// Nothing has been saved yet
    #[error("no saved route found, use `sl -s <from> <to>`")]
    NoSavedRoute,

    /// The saved file lacks an origin or destination
    #[error("saved route is empty, use `sl -s <from> <to>`")]
    EmptyRoute,

    /// The platform has no per-user config directory
    #[error("could not determine the user config directory")]
    NoConfigDir,

    /// The saved file exists but could not be read
    #[error("failed to load saved route: {0}")]
    Read(#[source] io::Error),

    /// The saved file is not valid JSON
    #[error("failed to load saved route: {0}")]
    Parse(#[source] serde_json::Error),

    /// The route could not be written
    #[error("{0}")]
    Write(#[from] io::Error),

    /// The route could not be encoded
    #[error("{0}")]
    Serialize(#[source] serde_json::Error),
}

/// An origin and destination, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRoute {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl SavedRoute {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The same route, travelled the other way.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// File-backed store for the default route.
#[derive(Debug, Clone)]
pub struct RouteStore {
    path: PathBuf,
}

impl RouteStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's config directory.
    pub fn in_config_dir() -> Result<Self, RouteStoreError> {
        let dir = dirs::config_dir().ok_or(RouteStoreError::NoConfigDir)?;
        Ok(Self::new(dir.join("sl").join("config.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved route.
    ///
    /// Both ends must be non-empty.
    pub fn load(&self) -> Result<SavedRoute, RouteStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RouteStoreError::NoSavedRoute);
            }
            Err(e) => return Err(RouteStoreError::Read(e)),
        };

        let route: SavedRoute = serde_json::from_str(&contents).map_err(RouteStoreError::Parse)?;
        if route.from.is_empty() || route.to.is_empty() {
            return Err(RouteStoreError::EmptyRoute);
        }

        Ok(route)
    }

    /// Save `route`, replacing any previous one.
    ///
    /// The file is written next to its final location and renamed into
    /// place, so a crash never leaves a half-written route behind.
    pub fn save(&self, route: &SavedRoute) -> Result<(), RouteStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_private_dir(parent)?;
        }

        let mut json = serde_json::to_string_pretty(route).map_err(RouteStoreError::Serialize)?;
        json.push('\n');

        let tmp = self.tmp_path();
        write_private_file(&tmp, json.as_bytes())?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), "saved default route");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_private_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RouteStore {
        RouteStore::new(dir.path().join("sl").join("config.json"))
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&SavedRoute::new("Slussen", "Odenplan")).unwrap();

        assert_eq!(store.load().unwrap(), SavedRoute::new("Slussen", "Odenplan"));
    }

    #[test]
    fn saved_file_is_pretty_json() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&SavedRoute::new("Slussen", "Odenplan")).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "{\n  \"from\": \"Slussen\",\n  \"to\": \"Odenplan\"\n}\n"
        );
        assert!(!store.path().with_file_name("config.json.tmp").exists());
    }

    #[test]
    fn save_replaces_previous_route() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&SavedRoute::new("A", "B")).unwrap();
        store.save(&SavedRoute::new("C", "D")).unwrap();

        assert_eq!(store.load().unwrap(), SavedRoute::new("C", "D"));
    }

    #[test]
    fn missing_file_is_no_saved_route() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).load().unwrap_err();

        assert!(matches!(err, RouteStoreError::NoSavedRoute));
        assert_eq!(err.to_string(), "no saved route found, use `sl -s <from> <to>`");
    }

    #[test]
    fn blank_route_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"from": "Slussen"}"#).unwrap();

        let err = RouteStore::new(&path).load().unwrap_err();

        assert!(matches!(err, RouteStoreError::EmptyRoute));
        assert_eq!(err.to_string(), "saved route is empty, use `sl -s <from> <to>`");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = RouteStore::new(&path).load().unwrap_err();

        assert!(matches!(err, RouteStoreError::Parse(_)));
        assert!(err.to_string().starts_with("failed to load saved route: "));
    }

    #[test]
    fn reversed_route() {
        let route = SavedRoute::new("Slussen", "Odenplan").reversed();
        assert_eq!(route, SavedRoute::new("Odenplan", "Slussen"));
    }

    #[cfg(unix)]
    #[test]
    fn saved_files_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&SavedRoute::new("A", "B")).unwrap();

        let file_mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o600);

        let dir_mode = fs::metadata(dir.path().join("sl"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(dir_mode & 0o777, 0o700);
    }
}
