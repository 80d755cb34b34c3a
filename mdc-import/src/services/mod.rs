//! Import services: scanning, output, remote store, batch runs and reports

pub mod batch_runner;
pub mod file_scanner;
pub mod ndjson_writer;
pub mod preview;
pub mod sanity_client;

pub use batch_runner::BatchRunner;
pub use file_scanner::{FileScanner, ScanError};
pub use preview::{inspect_organization, preview_rows, render_preview, PreviewRow};
pub use sanity_client::{DocumentStore, SanityClient, StoreError, StoreSettings};
