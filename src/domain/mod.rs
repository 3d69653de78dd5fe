//! Domain types for release versioning
//!
//! Pure data types shared across the toolkit commands. These carry no I/O:
//! classification and parsing only.

pub mod gitref;
pub mod prerelease;
pub mod version;

pub use gitref::GitRef;
pub use prerelease::{PreRelease, PreReleaseType};
pub use version::Version;
