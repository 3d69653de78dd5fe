//! Recipe bundle publishing
//!
//! Archives each subdirectory of a recipe tree into a zip bundle and
//! replaces a named cluster ConfigMap with one entry per bundle. The
//! in-cluster module server mounts that ConfigMap and serves the bundles
//! to tests.

pub mod archive;
pub mod configmap;

pub use archive::{archive_directory, archive_recipes, RecipeBundle};

use kube::Client;

use crate::error::Result;

/// Replace the ConfigMap from synchronous code
///
/// The CLI itself is synchronous; a runtime is built per invocation to
/// drive the kube client. Cluster access uses the ambient kubeconfig.
pub fn replace_configmap_blocking(
    namespace: &str,
    name: &str,
    bundles: &[RecipeBundle],
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        let client = Client::try_default().await?;
        configmap::replace_configmap(client, namespace, name, bundles).await
    })
}
