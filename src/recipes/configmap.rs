use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::ByteString;
use kube::api::{Api, DeleteParams, ObjectMeta, PostParams};
use kube::Client;

use crate::error::Result;
use crate::recipes::archive::RecipeBundle;

/// Build the binaryData payload, one entry per bundle keyed by file name
pub fn bundles_to_binary_data(bundles: &[RecipeBundle]) -> BTreeMap<String, ByteString> {
    bundles
        .iter()
        .map(|bundle| (bundle.name.clone(), ByteString(bundle.data.clone())))
        .collect()
}

/// Replace the named ConfigMap with one binaryData entry per bundle
///
/// The existing object is deleted first; a missing object is not an error
/// (the first publish has nothing to delete). The replacement is then
/// created fresh, so entries from previous publishes never linger.
pub async fn replace_configmap(
    client: Client,
    namespace: &str,
    name: &str,
    bundles: &[RecipeBundle],
) -> Result<()> {
    let api: Api<ConfigMap> = Api::namespaced(client, namespace);

    match api.delete(name, &DeleteParams::default()).await {
        Ok(_) => {}
        Err(kube::Error::Api(response)) if response.code == 404 => {}
        Err(e) => return Err(e.into()),
    }

    let configmap = ConfigMap {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        binary_data: Some(bundles_to_binary_data(bundles)),
        ..Default::default()
    };

    api.create(&PostParams::default(), &configmap).await?;

    Ok(())
}
