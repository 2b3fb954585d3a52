// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the application icon into the executable
//! when one is shipped under `assets/branding/`.

fn main() {
    println!("cargo:rerun-if-changed=assets/branding/iced_folio.ico");

    #[cfg(target_os = "windows")]
    {
        let icon = std::path::Path::new("assets/branding/iced_folio.ico");
        if icon.exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/branding/iced_folio.ico");
            res.compile().expect("Failed to compile Windows resources");
        }
    }
}
