#![doc = r#"
pwaicons — generate web and app icons from a single source image.

This crate turns one source bitmap into the fixed icon set a progressive web app
needs: two PWA manifest icons, an Apple touch icon and a favicon. Every icon is a
Lanczos3-resampled RGBA copy of the source, written in the format its filename
extension implies. It powers the `pwaicons` CLI and can be embedded in your own
build tooling.

Output set
----------
| file | size |
|---|---|
| `pwa-192x192.png` | 192x192 |
| `pwa-512x512.png` | 512x512 |
| `apple-touch-icon.png` | 180x180 |
| `favicon.ico` | 32x32 (single-image ICO) |

The table is fixed; see [`core::sizes::ICON_SIZES`].

Quick start: generate from a file
---------------------------------
```rust,no_run
use pwaicons::{generate_icons, GeneratorParams};

fn main() -> pwaicons::Result<()> {
    let mut params = GeneratorParams::new("assets/logo.png", "public");
    params.manifest = true; // also write public/icons.json

    let report = generate_icons(&params)?;
    for icon in &report.icons {
        println!("{} {}x{}", icon.path.display(), icon.width, icon.height);
    }
    Ok(())
}
```

Generate from an in-memory image
--------------------------------
```rust,no_run
use std::path::Path;
use image::{Rgba, RgbaImage};
use pwaicons::generate_icons_from_image;

fn main() -> pwaicons::Result<()> {
    let logo = RgbaImage::from_pixel(1024, 1024, Rgba([32, 96, 200, 255]));
    generate_icons_from_image(&logo, Path::new("dist"))?;
    Ok(())
}
```

Error handling
--------------
All public functions return `pwaicons::Result<T>`; match on `pwaicons::Error` to
handle specific cases.

```rust,no_run
use pwaicons::{generate_icons, Error, GeneratorParams};

fn main() {
    match generate_icons(&GeneratorParams::new("missing.png", "public")) {
        Ok(_) => {}
        Err(Error::SourceNotFound { path }) => eprintln!("no such image: {}", path.display()),
        Err(Error::Image(e)) => eprintln!("could not decode or encode: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `IconSpec`, `IconFormat`, `GeneratedIcon`, `GenerationReport`.
- [`core`] — the size table, parameters and the resize primitive.
- [`io`] — source loading and icon/manifest writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::GeneratorParams;
pub use crate::core::sizes::{ICON_SIZES, icon_spec};
pub use error::{Error, Result};
pub use types::{GeneratedIcon, GenerationReport, IconFormat, IconSpec};

// I/O helpers
pub use io::loader::load_rgba;
pub use io::writers::{MANIFEST_FILENAME, ManifestIcon, write_icon, write_manifest};

// High-level API re-exports
pub use api::{generate_icons, generate_icons_from_image, resize_icon};
