pub mod css_content;
pub mod html_content;
pub mod js_content;

use std::fs;
use std::path::Path;

/// Writes the bundled demo site into the root: exactly the three files the
/// startup manifest requires.
pub fn write_demo_site(root: &Path) -> std::io::Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)?;
    }

    fs::write(root.join("index.html"), html_content::get_html())?;
    fs::write(root.join("styles.css"), css_content::get_css())?;
    fs::write(root.join("script.js"), js_content::get_js())?;

    Ok(())
}
