#![doc = r#"
CAPSHEET — batch image captioning and contact-sheet composition.

This crate turns a folder of images into a captioned gallery: each source is
normalized to a canonical square JPEG, described by a remote vision model, and
finally composed with its caption into a single labeled contact-sheet image. It powers the `capsheet` CLI and can be embedded in your
own Rust applications.

Pipeline
--------
raw images -> normalizer -> `image{N}.jpg` -> captioner -> `image{N}.txt`
-> grid compositor -> one composite JPEG.

Processing is sequential and deterministic: sources are sorted by file name
before indices are assigned, and the compositor re-reads the persisted
gallery, pairing `image{N}.jpg` with `image{N}.txt` by numeric index.

Quick start: run the full pipeline
----------------------------------
```rust,no_run
use std::path::Path;
use capsheet::{
    run_gallery, ComposeParams, NormalizeParams, OpenAiCaptioner,
};

fn main() -> capsheet::Result<()> {
    let captioner = OpenAiCaptioner::new(
        "https://api.openai.com/v1",
        "gpt-4o-mini",
        "sk-...",
    )?;

    let report = run_gallery(
        Path::new("./input"),
        Path::new("./output_folder"),
        Path::new("./output_folder/image_grid.jpg"),
        &captioner,
        &NormalizeParams::default(),
        &ComposeParams::default(),
    )?;

    println!("processed={} skipped={}", report.processed, report.skipped);
    Ok(())
}
```

Custom captioners
-----------------
The pipeline takes any [`Captioner`] handle, so a different service (or a
stub for tests) plugs in without touching the processing code:

```rust
use capsheet::Captioner;

struct FixedCaptioner;

impl Captioner for FixedCaptioner {
    fn caption_jpeg(&self, _jpeg: &[u8]) -> capsheet::Result<String> {
        Ok("Photograph of a placeholder, minimalist style".to_string())
    }
}
```

Error handling
--------------
All public functions return `capsheet::Result<T>`; match on `capsheet::Error`
to handle specific cases, e.g. the explicit empty-input guards.

```rust,no_run
use std::path::Path;
use capsheet::{compose_contact_sheet, ComposeParams, Error};

fn main() {
    let params = ComposeParams::default();
    match compose_contact_sheet(Path::new("./gallery"), Path::new("./grid.jpg"), &params) {
        Ok(()) => {}
        Err(Error::EmptyGallery) => eprintln!("nothing to compose"),
        Err(Error::MissingCaption { path }) => eprintln!("caption missing: {path:?}"),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`caption`] — the captioning-service seam (`Captioner`, `OpenAiCaptioner`).
- [`core`] — normalization, layout, wrapping, and composition primitives.
- [`io`] — discovery, gallery read-back, and JPEG output.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod caption;
pub mod core;
pub mod error;
pub mod io;

// Curated public API surface
// Types
pub use crate::core::params::{ComposeParams, NormalizeParams};
pub use crate::core::processing::compose::GalleryEntry;
pub use crate::core::processing::layout::GridLayout;
pub use crate::core::processing::text::CaptionFont;
pub use error::{Error, Result};

// Captioning collaborator
pub use caption::{CAPTION_PROMPT, Captioner, OpenAiCaptioner};

// High-level API re-exports
pub use api::{GalleryReport, caption_directory, compose_contact_sheet, run_gallery};
