// tests/common/mod.rs

//! Shared test utilities: an in-memory provider and a fake `dpkg-query`.

#![allow(dead_code)]

use dep_versions::{MetadataProvider, PackageRecord, PackageRecords, Result};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// In-memory package database that records every query it answers
pub struct FakeProvider {
    packages: PackageRecords,
    calls: RefCell<Vec<BTreeSet<String>>>,
}

impl FakeProvider {
    /// Build a provider from `(name, version, dependencies)` entries
    pub fn new(entries: &[(&str, &str, &[&str])]) -> Self {
        let packages = entries
            .iter()
            .map(|(name, version, deps)| {
                let record = PackageRecord::new(name.to_string(), version.to_string())
                    .with_status("installed".to_string())
                    .with_dependencies(deps.iter().map(|d| d.to_string()).collect());
                (name.to_string(), record)
            })
            .collect();

        Self {
            packages,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<BTreeSet<String>> {
        self.calls.borrow().clone()
    }

    pub fn dependencies_of(&self, name: &str) -> &[String] {
        &self.packages[name].dependencies
    }
}

impl MetadataProvider for FakeProvider {
    fn fetch(&self, names: &BTreeSet<String>) -> Result<PackageRecords> {
        self.calls.borrow_mut().push(names.clone());

        Ok(self
            .packages
            .iter()
            .filter(|(name, _)| names.contains(*name))
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect())
    }
}

/// Serializes tests that write and execute scripts, so no concurrently
/// spawned child inherits a script's open write handle.
static SCRIPT_LOCK: Mutex<()> = Mutex::new(());

pub fn script_lock() -> MutexGuard<'static, ()> {
    SCRIPT_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write an executable `dpkg-query` stand-in into `dir`
///
/// Each entry is `(name, version, raw Depends field)`. Unknown names are
/// reported the way dpkg does: a stderr diagnostic and exit status 1, with
/// the diagnostic translated unless `LC_ALL=C`. The
/// names of every invocation are appended to `dpkg-query.calls` and the
/// `LC_ALL` it ran under to `dpkg-query.locale`.
pub fn write_fake_dpkg_query(dir: &Path, entries: &[(&str, &str, &str)]) -> PathBuf {
    let mut arms = String::new();
    for (name, version, depends) in entries {
        arms.push_str(&format!(
            "    '{name}') printf '%s\\t%s\\t%s\\t%s\\n' '{name}' '{version}' 'installed' '{depends}' ;;\n"
        ));
    }

    let script = format!(
        r#"#!/bin/sh
[ "$3" = "--" ] || {{ echo "dpkg-query: error: names must follow --" >&2; exit 2; }}
shift 3
echo "$*" >> "$0.calls"
echo "${{LC_ALL-unset}}" >> "$0.locale"
status=0
for name in "$@"; do
  case "$name" in
{arms}    *)
      if [ "${{LC_ALL-}}" = "C" ]; then
        echo "dpkg-query: no packages found matching $name" >&2
      else
        echo "dpkg-query: Kein Paket gefunden, das auf $name passt" >&2
      fi
      status=1 ;;
  esac
done
exit $status
"#
    );

    write_script(dir, &script)
}

/// Write a `dpkg-query` stand-in that fails the way a locked database does
pub fn write_failing_dpkg_query(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "#!/bin/sh\necho 'dpkg-query: error: database is locked' >&2\nexit 2\n",
    )
}

/// Write a `dpkg-query` stand-in that prints a malformed record
pub fn write_malformed_dpkg_query(dir: &Path) -> PathBuf {
    write_script(dir, "#!/bin/sh\nprintf 'app\\t1.0\\n'\nexit 0\n")
}

/// Lines of the invocation log written by the fake `dpkg-query`
pub fn recorded_calls(script: &Path) -> Vec<String> {
    read_log(&script.with_extension("calls"))
}

/// `LC_ALL` value of every invocation of the fake `dpkg-query`
pub fn recorded_locales(script: &Path) -> Vec<String> {
    read_log(&script.with_extension("locale"))
}

fn read_log(log: &Path) -> Vec<String> {
    std::fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn write_script(dir: &Path, contents: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("dpkg-query");
    std::fs::write(&path, contents).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
