use tauri::{command, AppHandle, Runtime};

use crate::{error, models, FileShareExt};

#[command]
pub async fn share_file<R: Runtime>(
    app: AppHandle<R>,
    options: models::ShareFileRequest,
) -> Result<(), error::Error> {
    app.file_share().share_file(options)
}
