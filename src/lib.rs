//! # tauri-plugin-file-share
//!
//! A Tauri plugin that hands one local file to the operating system's native
//! share chooser. The file's private path is converted into a time-boxed
//! content handle, read access on that handle is granted to every candidate
//! receiving application, and the chooser is presented so the user can pick
//! one.
//!
//! Resolving candidates happens twice, once against the chooser wrapper and
//! once against the inner send action, because the two can return different
//! activity lists depending on OS version and installed applications. Grants
//! go to the union of both sets; skipping either reintroduces
//! permission-denied failures in the receiving application.
//!
//! ## Usage
//!
//! ```rust,ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tauri_plugin_file_share::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! ```js
//! import { invoke } from '@tauri-apps/api/core';
//!
//! await invoke('plugin:file-share|share_file', {
//!   options: {
//!     fileUri: 'file:///data/user/0/com.example.app/files/report.json',
//!     title: 'Monthly report',
//!     dialogTitle: 'Send report',
//!   },
//! });
//! ```

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod commands;
mod error;
mod handler;
mod host;
mod models;

pub use error::{Error, Result};
pub use handler::share_file;
pub use host::{
    ActionDescriptor, ChooserAction, ContentHandle, ReceiverId, SendAction, ShareHost,
    SHARE_MIME_TYPE,
};

#[cfg(desktop)]
use desktop::FileShare;
#[cfg(mobile)]
use mobile::FileShare;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the file-share APIs.
pub trait FileShareExt<R: Runtime> {
    fn file_share(&self) -> &FileShare<R>;
}

impl<R: Runtime, T: Manager<R>> crate::FileShareExt<R> for T {
    fn file_share(&self) -> &FileShare<R> {
        self.state::<FileShare<R>>().inner()
    }
}

/// Initializes the plugin and registers the `share_file` command.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("file-share")
        .invoke_handler(tauri::generate_handler![commands::share_file])
        .setup(|app, api| {
            #[cfg(mobile)]
            let file_share = mobile::init(app, api)?;
            #[cfg(desktop)]
            let file_share = desktop::init(app, api)?;
            app.manage(file_share);
            Ok(())
        })
        .build()
}
