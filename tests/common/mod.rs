//! Common test utilities for next-salvage integration tests

use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tempfile::TempDir;

/// A throwaway project directory holding synthetic `.next` output
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new, empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Add a compiled server page bundle built from `modules`
    pub fn add_page_bundle(&self, route: &str, modules: &[String]) {
        let rel = if route.is_empty() {
            ".next/server/app/page.js".to_string()
        } else {
            format!(".next/server/app/{route}/page.js")
        };
        self.write_file(&rel, &page_bundle(modules));
    }

    /// Add the compiled root layout stylesheet
    pub fn add_layout_css(&self, body: &str) {
        self.write_file(".next/static/css/app/layout.css", &layout_css(body));
    }

    /// Add a compiled page stylesheet made of `(module_path, body)` sections
    pub fn add_page_css(&self, route: &str, sections: &[(&str, &str)]) {
        let text: String = sections
            .iter()
            .map(|(module, body)| css_section(module, body))
            .collect();
        self.write_file(&format!(".next/static/css/app/{route}/page.css"), &text);
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// One module of a development page bundle with its inline source map
#[allow(dead_code)]
pub fn webpack_module(layer: &str, rel: &str, content: &str) -> String {
    let map = serde_json::json!({
        "version": 3,
        "file": "",
        "sources": [format!("webpack://dashboard/./{rel}")],
        "sourcesContent": [content],
        "names": [],
        "mappings": "AAAA",
    });
    let payload = STANDARD.encode(map.to_string());

    format!(
        "/***/ \"{layer}/./{rel}\":\n\
         /***/ ((module, __webpack_exports__, __webpack_require__) => {{\n\n\
         eval(\"__webpack_require__.r(__webpack_exports__);\\n\
         //# sourceMappingURL=data:application/json;charset=utf-8;base64,{payload}\\n\
         //# sourceURL=webpack-internal:///{layer}/./{rel}\\n\");\n\n\
         /***/ }}),\n\n"
    )
}

fn page_bundle(modules: &[String]) -> String {
    format!(
        "\"use strict\";\n(() => {{\nvar exports = {{}};\nexports.modules = {{\n\n{}}};\n}})();\n",
        modules.concat()
    )
}

fn css_section(module_path: &str, body: &str) -> String {
    let stars = "*".repeat(module_path.len() + 10);
    format!(
        "/*!{stars}!*\\\n  !*** css ./node_modules/next/dist/build/webpack/loaders/css-loader/src/index.js??ruleSet[1].rules[3].oneOf[8].use[1]!./{module_path} ***!\n  \\{stars}*/\n{body}\n"
    )
}

fn layout_css(body: &str) -> String {
    format!(
        "/*!*****************************!*\\\n  !*** css ./app/globals.css ***!\n  \\*****************************/\n{body}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_file_operations() {
        let project = TestProject::new();
        project.write_file("app/page.tsx", "hello");
        assert!(project.file_exists("app/page.tsx"));
        assert_eq!(project.read_file("app/page.tsx"), "hello");
    }

    #[test]
    fn test_add_page_bundle_location() {
        let project = TestProject::new();
        project.add_page_bundle("items", &[webpack_module("(ssr)", "lib/a.ts", "a")]);
        project.add_page_bundle("", &[]);
        assert!(project.file_exists(".next/server/app/items/page.js"));
        assert!(project.file_exists(".next/server/app/page.js"));
    }
}
