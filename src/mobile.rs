use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tauri::{
  plugin::{PluginApi, PluginHandle},
  AppHandle, Runtime,
};

use crate::host::{ActionDescriptor, ChooserAction, ContentHandle, ReceiverId, ShareHost};
use crate::models::ShareFileRequest;
use crate::{handler, Error, Result};

#[cfg(target_os = "android")]
const PLUGIN_IDENTIFIER: &str = "app.tauri.fileshare";

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_file_share);

// initializes the Kotlin or Swift plugin classes
pub fn init<R: Runtime, C: DeserializeOwned>(
  _app: &AppHandle<R>,
  api: PluginApi<R, C>,
) -> crate::Result<FileShare<R>> {
  #[cfg(target_os = "android")]
  let handle = api.register_android_plugin(PLUGIN_IDENTIFIER, "FileSharePlugin")?;
  #[cfg(target_os = "ios")]
  let handle = api.register_ios_plugin(init_plugin_file_share)?;
  Ok(FileShare(handle))
}

/// Access to the file-share API, backed by the native companion plugin.
pub struct FileShare<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> FileShare<R> {
    pub fn share_file(&self, request: ShareFileRequest) -> Result<()> {
        handler::share_file(self, &request)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppIdentityResponse {
    package_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssueHandleRequest<'a> {
    authority: &'a str,
    path: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueHandleResponse {
    uri: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveReceiversResponse {
    packages: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GrantReadAccessRequest<'a> {
    package: &'a str,
    uri: &'a str,
}

// Each host capability is one method on the native companion plugin, so the
// grant fan-out stays on the Rust side and the native layer stays a thin
// wrapper over the platform APIs.
impl<R: Runtime> ShareHost for FileShare<R> {
    fn app_identity(&self) -> Result<String> {
        let response: AppIdentityResponse = self
            .0
            .run_mobile_plugin("getAppIdentity", ())
            .map_err(|e| Error::Unexpected(e.to_string()))?;
        Ok(response.package_name)
    }

    fn issue_handle(&self, authority: &str, path: &Path) -> Result<ContentHandle> {
        let payload = IssueHandleRequest {
            authority,
            path: &path.to_string_lossy(),
        };
        let response: IssueHandleResponse = self
            .0
            .run_mobile_plugin("issueContentHandle", payload)
            .map_err(|e| Error::HandleCreation(e.to_string()))?;
        Ok(ContentHandle(response.uri))
    }

    fn resolve_receivers(&self, descriptor: ActionDescriptor<'_>) -> Result<Vec<ReceiverId>> {
        let response: ResolveReceiversResponse = self
            .0
            .run_mobile_plugin("resolveReceivers", descriptor)
            .map_err(|e| Error::Unexpected(e.to_string()))?;
        Ok(response.packages.into_iter().map(ReceiverId).collect())
    }

    fn grant_read_access(&self, receiver: &ReceiverId, handle: &ContentHandle) -> Result<()> {
        let payload = GrantReadAccessRequest {
            package: &receiver.0,
            uri: &handle.0,
        };
        self.0
            .run_mobile_plugin("grantReadAccess", payload)
            .map_err(|e| Error::Unexpected(e.to_string()))
    }

    fn present_chooser(&self, chooser: &ChooserAction) -> Result<()> {
        self.0
            .run_mobile_plugin("presentChooser", chooser)
            .map_err(|e| Error::Presentation(e.to_string()))
    }
}
