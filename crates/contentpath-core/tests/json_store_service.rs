//! Integration tests for the content path service over the JSON file store.
//!
//! These drive the public API end-to-end the way a host would: one store on
//! disk, a service built on top of it, and an auto-confirming host.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use contentpath_core::store::CONFIG_FILE_NAME;
use contentpath_core::{
    CommandHost, ConfigScope, ConfigStore, ContentPathError, ContentPathInfo, ContentPathService,
    ContentPathSource, ErrorKind, JsonConfigStore, Outcome,
};
use tempfile::tempdir;

#[derive(Default)]
struct AutoHost {
    warnings: RefCell<Vec<String>>,
    errors: RefCell<Vec<ErrorKind>>,
}

impl CommandHost for AutoHost {
    fn confirm(&self, _target: &str, _action: &str) -> bool {
        true
    }

    fn emit_result(&self, _info: &ContentPathInfo) {}

    fn emit_error(&self, error: &ContentPathError, _target: Option<&str>) {
        self.errors.borrow_mut().push(error.kind());
    }

    fn emit_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

/// The documented walkthrough: set an override, then reset to default.
#[test]
fn set_and_reset_walkthrough() {
    let temp = tempdir().unwrap();
    let default_dir = temp.path().join("home").join(".content");
    let data_dir = temp.path().join("data").join("content");
    fs::create_dir_all(&data_dir).unwrap();

    let store = Arc::new(JsonConfigStore::new(temp.path().join("cfg")));
    let service = ContentPathService::new(store, &default_dir).unwrap();
    let host = AutoHost::default();

    let initial = service.get(&host).unwrap();
    assert_eq!(initial.effective.path, default_dir);
    assert_eq!(initial.effective.source, ContentPathSource::Default);

    service.set(&host, data_dir.to_str().unwrap()).unwrap();
    let after_set = service.get(&host).unwrap();
    assert_eq!(after_set.effective.path, data_dir);
    assert_eq!(after_set.effective.source, ContentPathSource::Override);
    assert!(after_set.exists);

    service.reset(&host).unwrap();
    let after_reset = service.get(&host).unwrap();
    assert_eq!(after_reset.effective.path, default_dir);
    assert_eq!(after_reset.effective.source, ContentPathSource::Default);

    assert!(host.errors.borrow().is_empty());
}

/// A new service over the same file sees the persisted override.
#[test]
fn override_survives_restart() {
    let temp = tempdir().unwrap();
    let config_dir = temp.path().join("cfg");
    let target = temp.path().join("persisted");

    {
        let store = Arc::new(JsonConfigStore::new(&config_dir));
        let service = ContentPathService::new(store, "/unused/default").unwrap();
        let outcome = service.set(&AutoHost::default(), target.to_str().unwrap()).unwrap();
        assert!(outcome.is_applied());
    }

    let store = Arc::new(JsonConfigStore::new(&config_dir));
    let service = ContentPathService::new(store, "/unused/default").unwrap();
    assert_eq!(*service.mirror().read(), target);
}

/// Invalid input never touches the file on disk.
#[test]
fn invalid_input_leaves_file_untouched() {
    let temp = tempdir().unwrap();
    let config_dir = temp.path().join("cfg");
    let store = Arc::new(JsonConfigStore::new(&config_dir));
    let service = ContentPathService::new(store, "/unused/default").unwrap();
    let host = AutoHost::default();

    let err = service.set(&host, "relative/content").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RelativePathNotAllowed);
    assert_eq!(*host.errors.borrow(), vec![ErrorKind::RelativePathNotAllowed]);
    assert!(!config_dir.join(CONFIG_FILE_NAME).exists());
}

/// Mirror handles given out before a change observe the change.
#[test]
fn mirror_handles_follow_changes() {
    let temp = tempdir().unwrap();
    let store = Arc::new(JsonConfigStore::new(temp.path().join("cfg")));
    let service = ContentPathService::new(store, "/unused/default").unwrap();
    let consumer = service.mirror();
    let target = temp.path().join("followed");

    let outcome = service.set(&AutoHost::default(), target.to_str().unwrap()).unwrap();

    assert!(matches!(outcome, Outcome::Applied(ref p) if p.path == target));
    assert_eq!(*consumer.read(), target);
    assert_eq!(*consumer.read(), service.get(&AutoHost::default()).unwrap().effective.path);
}

/// The backing file reported by `get` is where the override is written.
#[test]
fn reported_config_file_holds_override() {
    let temp = tempdir().unwrap();
    let store = Arc::new(JsonConfigStore::new(temp.path().join("cfg")));
    let service = ContentPathService::new(Arc::clone(&store) as Arc<dyn ConfigStore>, "/d").unwrap();
    let host = AutoHost::default();
    let target = temp.path().join("reported");

    service.set(&host, target.to_str().unwrap()).unwrap();
    let info = service.get(&host).unwrap();

    assert_eq!(info.config_file, store.backing_file_path(ConfigScope::CurrentUser));
    let written = fs::read_to_string(&info.config_file).unwrap();
    assert!(written.contains(target.to_str().unwrap()));
    assert_eq!(
        store.get_override(ConfigScope::CurrentUser).unwrap().map(PathBuf::from),
        Some(target)
    );
}
