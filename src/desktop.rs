use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::models::ShareFileRequest;
use crate::{Error, Result};

pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> Result<FileShare<R>> {
    Ok(FileShare(app.clone()))
}

/// Access to the file-share API.
///
/// Desktop platforms have no content-provider backed share chooser, so every
/// request fails; the command only does real work on mobile.
pub struct FileShare<R: Runtime>(AppHandle<R>);

impl<R: Runtime> FileShare<R> {
    pub fn share_file(&self, request: ShareFileRequest) -> Result<()> {
        log::debug!(
            "share_file({}) invoked on desktop by {}",
            request.file_uri,
            self.0.package_info().name
        );
        Err(Error::Presentation(
            "the system share dialog is only available on Android and iOS".into(),
        ))
    }
}
