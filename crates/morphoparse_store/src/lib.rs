//! # morphoparse-store
//!
//! Deterministic artifact directory layout and idempotent filesystem
//! operations for compiled FSTs, language models, and their supporting
//! blobs.
//!
//! Every artifact lives at `<root>/<type>_<id>/<stem><ext>`, where `<type>`
//! is an [`ObjectKind`](morphoparse_base::ObjectKind) directory stem and
//! `<ext>` is looked up in [`FileType::extension`]. Directory creation is
//! idempotent: a directory that already exists (including one that another
//! thread just created) is success, not an error.

mod error;
mod file_type;
mod layout;

pub use error::StoreError;
pub use file_type::FileType;
pub use layout::ArtifactLayout;
