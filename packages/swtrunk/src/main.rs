//! This is a post-build hook script for Trunk that generates the
//! `service-worker.js` file for the worker context.
//!
//! Trunk outputs a single index.html whose inline module script imports the
//! wasm-bindgen glue and initializes the wasm module. The worker needs that
//! same bootstrap in a standalone file, with two changes:
//! - the init call is followed by `await wasm.service_worker();`, so the
//!   listeners are registered as soon as the worker script is evaluated;
//! - everything runs inside an async IIFE, as top-level await is not allowed
//!   in service workers.
//! Trunk's page-only tail (the application-started event dispatch and the
//! auto-reload socket) is left out of the worker file, as there is no page
//! for it to talk to inside a worker.

use std::{env, fs, path::Path, time::Instant};

use lol_html::{text, HtmlRewriter, Settings};

const WORKER_FILE: &str = "service-worker.js";
const WASM_ENTRY: &str = "service_worker";

/// Pull the inline bootstrap script out of the staged index.html.
/// The index.html itself is left untouched.
fn collect_bootstrap(html: &str) -> String {
    let mut script_contents = String::new();
    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![text!("script:not([src])", |el| {
                script_contents.push_str(el.as_str());
                Ok(())
            })],
            ..Settings::default()
        },
        |_: &[u8]| {},
    );

    rewriter.write(html.as_bytes()).unwrap();
    rewriter.end().unwrap();

    script_contents
}

/// The two bootstrap pieces the worker file keeps.
#[derive(Debug)]
struct Bootstrap {
    /// Import of the wasm-bindgen glue module.
    import_line: String,
    /// The init call, in object form.
    init: String,
}

impl Bootstrap {
    fn new(script_contents: &str) -> Self {
        let import_start = script_contents
            .find("import")
            .expect("Should find import line in Trunk script output");
        let import_end = script_contents[import_start..]
            .find(";\n")
            .expect("Should find end of import line in Trunk script output")
            + import_start
            + 1;
        let init_end = script_contents[import_end..]
            .find(".wasm');")
            .expect("Should find end of init line in Trunk script output")
            + import_end
            + ".wasm');".len();

        Bootstrap {
            import_line: script_contents[import_start..import_end].to_string(),
            init: fix_init_line(script_contents[import_end..init_end].trim()),
        }
    }

    /// Render the worker file: the import line, then an async IIFE wrapping
    /// init and the entry call.
    fn render(&self) -> String {
        format!(
            "{import}\n(async () => {{\n\n{init}await wasm.{entry}();\n\n}})();\n",
            import = self.import_line,
            init = self.init,
            entry = WASM_ENTRY,
        )
    }
}

/// The init() call takes a string, when it should take an object with a key
/// of `module_or_path`. This stops wasm-bindgen from complaining via console.warn.
fn fix_init_line(input: &str) -> String {
    input
        .replace("init(", "init({module_or_path: ")
        .replace(");", "});\n")
}

fn main() {
    let start_time = Instant::now();
    let staging_dir = env::var("TRUNK_STAGING_DIR").unwrap();
    let index_path = Path::new(&staging_dir).join("index.html");

    let html = fs::read_to_string(&index_path).unwrap();
    let bootstrap = Bootstrap::new(&collect_bootstrap(&html));
    fs::write(Path::new(&staging_dir).join(WORKER_FILE), bootstrap.render()).unwrap();

    let duration = start_time.elapsed();
    println!("Swtrunk finished in {:?}", duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRUNK_BOOTSTRAP: &str = "import init, * as wasm from '/minute_notifier-1234.js';\ninit('/minute_notifier-1234_bg.wasm');\n";

    #[test]
    fn init_line_gets_the_object_form() {
        assert_eq!(
            fix_init_line("init('/app_bg.wasm');"),
            "init({module_or_path: '/app_bg.wasm'});\n"
        );
    }

    #[test]
    fn bootstrap_splits_import_and_init() {
        let bootstrap = Bootstrap::new(TRUNK_BOOTSTRAP);
        assert_eq!(
            bootstrap.import_line,
            "import init, * as wasm from '/minute_notifier-1234.js';"
        );
        assert_eq!(
            bootstrap.init,
            "init({module_or_path: '/minute_notifier-1234_bg.wasm'});\n"
        );
    }

    #[test]
    fn worker_file_is_an_async_iife_calling_the_entry() {
        let rendered = Bootstrap::new(TRUNK_BOOTSTRAP).render();
        assert!(rendered.starts_with("import init, * as wasm from"));
        assert!(rendered.contains("(async () => {"));
        assert!(rendered.contains("await wasm.service_worker();"));
        assert!(rendered.ends_with("})();\n"));
        assert!(!rendered.contains("dispatchEvent"));
    }

    #[test]
    fn collect_bootstrap_takes_only_inline_scripts() {
        let html = "<html><head><script src=\"/ext.js\"></script>\
             <script type=\"module\">import init from '/a.js';\ninit('/a_bg.wasm');\n</script>\
             </head><body></body></html>";
        let script = collect_bootstrap(html);
        assert!(script.contains("import init from '/a.js';"));
        assert!(!script.contains("ext.js"));
    }
}
