#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the loc-inspect binary.
#[macro_export]
macro_rules! loc_inspect {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("loc-inspect"))
    };
}

/// Seven physical lines, three logical lines, two methods.
pub const ALPHA_SOURCE: &str = "\
public class Alpha {
    public void one() {
    }

    public int two() {
        return 2;
    }
}
";

/// Nine physical lines, four logical lines, two methods.
pub const BETA_SOURCE: &str = "\
public class Beta {
    private void first() {
        if (ready) {
            go();
        }
    }

    private void second() {
    }
}
";

/// Breaks the wildcard-import rule on line 1.
pub const WILDCARD_SOURCE: &str = "\
import java.util.*;
public class Wild {
}
";

/// Breaks the multiple-statements rule on line 2.
pub const TWO_STATEMENTS_SOURCE: &str = "\
public class Crowded {
    int a = 1; int b = 2;
}
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, making parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a `.loc-inspect.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".loc-inspect.toml", content);
    }

    /// Project directory `name` holding Alpha.java and Beta.java.
    pub fn create_two_class_project(&self, name: &str) {
        self.create_file(&format!("{name}/Alpha.java"), ALPHA_SOURCE);
        self.create_file(&format!("{name}/Beta.java"), BETA_SOURCE);
    }

    /// Name of the fixture root directory as it appears in reports.
    pub fn dir_name(&self) -> String {
        self.dir
            .path()
            .file_name()
            .expect("temp dir has a name")
            .to_string_lossy()
            .into_owned()
    }
}
