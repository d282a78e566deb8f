use std::path::Path;

use serde::Serialize;

use crate::Result;

/// Content type carried by every send action. The original consumer only
/// shares JSON exports, so this stays fixed rather than caller-supplied.
pub const SHARE_MIME_TYPE: &str = "application/json";

/// An opaque, time-boxed reference to a shared file, issued by the host's
/// provider mechanism. Derived fresh on every request; the host revokes it
/// once the share operation is over, so it is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentHandle(pub String);

/// Identity of an installed application able to receive a send action.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReceiverId(pub String);

/// A generic "send" action carrying the shared handle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAction {
    pub handle: ContentHandle,
    pub mime_type: String,
    pub subject: String,
    /// Asks the host to grant read access to whichever receiver is picked.
    pub grant_read: bool,
}

/// The chooser presentation wrapping a send action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChooserAction {
    pub send: SendAction,
    pub dialog_title: String,
}

/// Descriptor handed to the activity resolver.
///
/// The chooser wrapper and the inner send action can resolve to different
/// receiver lists depending on OS version and installed applications, so the
/// two variants are deliberately distinct and are queried separately.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActionDescriptor<'a> {
    Send(&'a SendAction),
    Chooser(&'a ChooserAction),
}

/// Capabilities the share handler needs from its host runtime: the
/// application's own identity, a content-handle issuer, an activity
/// resolver, a permission grantor, and a chooser launcher.
///
/// On mobile these are backed by the native companion plugin; tests inject a
/// recording implementation.
pub trait ShareHost {
    /// The requesting application's identity (the package name on Android).
    fn app_identity(&self) -> Result<String>;

    /// Issues a time-boxed content handle for `path` under the given
    /// provider authority. Fails when the path lies outside the provider's
    /// permitted roots.
    fn issue_handle(&self, authority: &str, path: &Path) -> Result<ContentHandle>;

    /// Enumerates the installed applications able to handle `descriptor`.
    /// Queried anew on every call; installed-application sets change between
    /// calls, so results are never cached.
    fn resolve_receivers(&self, descriptor: ActionDescriptor<'_>) -> Result<Vec<ReceiverId>>;

    /// Grants `receiver` read access on `handle`. Idempotent per receiver;
    /// the host revokes the grant on its own schedule.
    fn grant_read_access(&self, receiver: &ReceiverId, handle: &ContentHandle) -> Result<()>;

    /// Launches the chooser UI. Success means the presentation launched, not
    /// that the user picked a receiver.
    fn present_chooser(&self, chooser: &ChooserAction) -> Result<()>;
}
