//! Execution guards.
//!
//! Call sites that must never run while FIPS compliance is enforced call one
//! of these guards first. Both abort the process when the required flag is
//! set; `unreachable_except_tests` lets test binaries through so test suites
//! can prove the path is reachable only outside compliance mode.
//!
//! A test binary is one whose name ends in a configured suffix, or one laid
//! out the way Cargo lays out test harnesses: `.../deps/<name>-<16 hex>`.

use std::ffi::OsStr;
use std::path::Path;

use fipsgate_types::DEFAULT_TEST_SUFFIXES;

use crate::error::{COMPONENT, CoreError, Result};
use crate::fatal::terminate;
use crate::readiness::{is_enabled, readiness};

/// Aborts if FIPS compliance is enforced.
pub fn unreachable() {
    if let Err(err) = check_unreachable(is_enabled(), &current_executable()) {
        terminate(&err);
    }
}

/// Aborts if FIPS compliance is enforced, unless the current executable is a
/// test binary.
pub fn unreachable_except_tests() {
    let executable = current_executable();
    let result = with_test_suffixes(|suffixes| {
        check_unreachable_except_tests(is_enabled(), &executable, suffixes)
    });
    if let Err(err) = result {
        tracing::error!(executable = %executable, "unexpected code execution");
        eprintln!("{COMPONENT}: unexpected code execution in {executable}");
        terminate(&err);
    }
}

/// Returns `true` if the current executable carries a test binary suffix.
#[must_use]
pub fn executing_test() -> bool {
    let executable = current_executable();
    with_test_suffixes(|suffixes| is_test_executable(&executable, suffixes))
}

/// Guard decision for [`unreachable`].
///
/// # Errors
/// Returns [`CoreError::InvalidExecutionContext`] when `fips_required` is set.
pub fn check_unreachable(fips_required: bool, executable: &str) -> Result<()> {
    if fips_required {
        return Err(CoreError::InvalidExecutionContext { executable: executable.to_string() });
    }
    Ok(())
}

/// Guard decision for [`unreachable_except_tests`].
///
/// # Errors
/// Returns [`CoreError::InvalidExecutionContext`] when `fips_required` is set
/// and `executable` does not end in one of `test_suffixes`.
pub fn check_unreachable_except_tests<S: AsRef<str>>(
    fips_required: bool,
    executable: &str,
    test_suffixes: &[S],
) -> Result<()> {
    if fips_required && !is_test_executable(executable, test_suffixes) {
        return Err(CoreError::InvalidExecutionContext { executable: executable.to_string() });
    }
    Ok(())
}

/// Returns `true` if `executable` is a Cargo test harness, or ends in one of
/// `test_suffixes` and is strictly longer than that suffix.
#[must_use]
pub fn is_test_executable<S: AsRef<str>>(executable: &str, test_suffixes: &[S]) -> bool {
    is_cargo_test_harness(executable)
        || test_suffixes.iter().any(|suffix| {
            let suffix: &str = suffix.as_ref();
            !suffix.is_empty() && executable.len() > suffix.len() && executable.ends_with(suffix)
        })
}

/// Length of the metadata hash Cargo appends to test harness names.
const CARGO_HASH_LEN: usize = 16;

/// Returns `true` if `executable` has the shape of a Cargo test harness:
/// `<name>-<16 hex digits>` (optionally `.exe`) inside a `deps` directory.
#[must_use]
pub fn is_cargo_test_harness(executable: &str) -> bool {
    let path = Path::new(executable);
    let in_deps = path.parent().and_then(Path::file_name) == Some(OsStr::new("deps"));
    let Some(file_name) = path.file_name().and_then(OsStr::to_str) else {
        return false;
    };
    let stem = file_name.strip_suffix(".exe").unwrap_or(file_name);
    let Some((name, hash)) = stem.rsplit_once('-') else {
        return false;
    };
    in_deps
        && !name.is_empty()
        && hash.len() == CARGO_HASH_LEN
        && hash.bytes().all(|b| b.is_ascii_hexdigit())
}

fn with_test_suffixes<T>(f: impl FnOnce(&[String]) -> T) -> T {
    match readiness() {
        Some(state) => f(&state.test_suffixes),
        None => {
            let defaults: Vec<String> = DEFAULT_TEST_SUFFIXES.iter().map(|s| (*s).to_string()).collect();
            f(&defaults)
        }
    }
}

/// Name the process was started with (`argv[0]`).
fn current_executable() -> String {
    std::env::args_os()
        .next()
        .map(|arg0| arg0.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const SUFFIXES: [&str; 2] = ["_test", ".test"];

    #[test]
    fn test_unreachable_passes_when_not_required() {
        assert!(check_unreachable(false, "/usr/bin/server").is_ok());
        assert!(check_unreachable(false, "pkg.test").is_ok());
    }

    #[test]
    fn test_unreachable_fails_for_any_caller_when_required() {
        for exe in ["/usr/bin/server", "pkg.test", "crypto_test", ""] {
            let err = check_unreachable(true, exe).unwrap_err();
            assert_eq!(err, CoreError::InvalidExecutionContext { executable: exe.to_string() });
        }
    }

    #[test]
    fn test_except_tests_allows_test_binaries() {
        assert!(check_unreachable_except_tests(true, "/tmp/go-build/crypto.test", &SUFFIXES).is_ok());
        assert!(check_unreachable_except_tests(true, "./tls_test", &SUFFIXES).is_ok());
    }

    #[test]
    fn test_except_tests_rejects_production_binaries() {
        let err = check_unreachable_except_tests(true, "/usr/bin/server", &SUFFIXES).unwrap_err();
        assert!(err.to_string().contains("/usr/bin/server"));
        assert!(check_unreachable_except_tests(true, "testing", &SUFFIXES).is_err());
        assert!(check_unreachable_except_tests(true, "server.test.bak", &SUFFIXES).is_err());
    }

    #[test]
    fn test_except_tests_passes_when_not_required() {
        assert!(check_unreachable_except_tests(false, "/usr/bin/server", &SUFFIXES).is_ok());
    }

    #[test]
    fn test_suffix_alone_is_not_a_test_binary() {
        assert!(!is_test_executable("_test", &SUFFIXES));
        assert!(!is_test_executable(".test", &SUFFIXES));
        assert!(is_test_executable("a.test", &SUFFIXES));
    }

    #[test]
    fn test_empty_suffix_never_matches() {
        assert!(!is_test_executable("anything", &[""]));
    }

    #[test]
    fn test_windows_suffixes_in_defaults() {
        assert!(is_test_executable("crypto.test.exe", &DEFAULT_TEST_SUFFIXES));
        assert!(is_test_executable("crypto_test.exe", &DEFAULT_TEST_SUFFIXES));
        assert!(!is_test_executable("crypto.exe", &DEFAULT_TEST_SUFFIXES));
    }

    #[test]
    fn test_cargo_harness_is_a_test_binary() {
        let harness = "/work/target/debug/deps/abort_paths-e8679387396a6277";
        assert!(is_cargo_test_harness(harness));
        assert!(is_test_executable(harness, &DEFAULT_TEST_SUFFIXES));
        assert!(is_test_executable(harness, &[] as &[&str]));
        assert!(check_unreachable_except_tests(true, harness, &DEFAULT_TEST_SUFFIXES).is_ok());
        assert!(is_cargo_test_harness(r"target/release/deps/fipsgate_core-0123456789abcdef.exe"));
    }

    #[test]
    fn test_cargo_harness_shape_is_strict() {
        // Release binaries live outside `deps`.
        assert!(!is_cargo_test_harness("/work/target/debug/server-e8679387396a6277"));
        // Hash must be exactly 16 hex digits.
        assert!(!is_cargo_test_harness("/work/target/debug/deps/server-e8679387396a627"));
        assert!(!is_cargo_test_harness("/work/target/debug/deps/server-e8679387396a627z"));
        // A name is required before the hash.
        assert!(!is_cargo_test_harness("/work/target/debug/deps/-e8679387396a6277"));
        assert!(!is_cargo_test_harness("/work/target/debug/deps/server"));
        assert!(!is_cargo_test_harness("e8679387396a6277"));
        assert!(!is_cargo_test_harness(""));
    }

    #[test]
    fn test_this_unit_test_binary_is_recognized() {
        assert!(executing_test());
    }

    #[test]
    fn test_guards_pass_before_startup() {
        // Nothing installs readiness state in this unit test binary.
        assert!(readiness().is_none());
        unreachable();
        unreachable_except_tests();
    }
}
