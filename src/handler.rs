use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::host::{
    ActionDescriptor, ChooserAction, ReceiverId, SendAction, ShareHost, SHARE_MIME_TYPE,
};
use crate::models::ShareFileRequest;
use crate::{Error, Result};

/// Resolves a `file://` URI to a filesystem path. Bare paths pass through.
fn uri_to_path(uri: &str) -> PathBuf {
    PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri))
}

/// Hands one local file to the system share dialog.
///
/// Issues a fresh content handle for the file, grants read access to every
/// receiver either the chooser wrapper or the inner send action resolves to,
/// then launches the chooser. Returns as soon as the presentation has
/// launched; the user's eventual pick is not observed.
pub fn share_file<H: ShareHost>(host: &H, request: &ShareFileRequest) -> Result<()> {
    if request.file_uri.is_empty() {
        return Err(Error::InvalidArgument("fileUri is required".into()));
    }

    // The handle issuer fails opaquely on a missing file; checking here
    // gives the caller a precise error instead.
    let path = uri_to_path(&request.file_uri);
    if !path.exists() {
        return Err(Error::NotFound(request.file_uri.clone()));
    }

    // A raw path is private to the application sandbox; only a
    // provider-issued handle is legible to other applications.
    let authority = format!("{}.fileprovider", host.app_identity()?);
    let handle = host.issue_handle(&authority, &path)?;

    let chooser = ChooserAction {
        send: SendAction {
            handle,
            mime_type: SHARE_MIME_TYPE.to_string(),
            subject: request.effective_title().to_string(),
            grant_read: true,
        },
        dialog_title: request.effective_dialog_title().to_string(),
    };

    // The chooser wrapper and the inner send action can resolve to
    // different receiver lists, and the chooser UI itself may need its own
    // grant to render previews. Granting the union of both sets keeps the
    // eventual receiver from hitting a permission-denied failure, whichever
    // list it came from.
    let mut receivers: BTreeSet<ReceiverId> = BTreeSet::new();
    receivers.extend(host.resolve_receivers(ActionDescriptor::Chooser(&chooser))?);
    receivers.extend(host.resolve_receivers(ActionDescriptor::Send(&chooser.send))?);

    log::debug!(
        "sharing {}: granting read access to {} candidate receiver(s)",
        path.display(),
        receivers.len()
    );
    for receiver in &receivers {
        host.grant_read_access(receiver, &chooser.send.handle)?;
    }

    host.present_chooser(&chooser)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::Path;

    use tempfile::{Builder, NamedTempFile};

    use super::*;
    use crate::host::ContentHandle;
    use crate::models::{DEFAULT_DIALOG_TITLE, DEFAULT_TITLE};

    #[derive(Default)]
    struct RecordingHost {
        chooser_candidates: Vec<&'static str>,
        send_candidates: Vec<&'static str>,
        issued: RefCell<Vec<PathBuf>>,
        grants: RefCell<Vec<(String, String)>>,
        presented: RefCell<Vec<ChooserAction>>,
    }

    impl RecordingHost {
        fn with_candidates(chooser: Vec<&'static str>, send: Vec<&'static str>) -> Self {
            Self {
                chooser_candidates: chooser,
                send_candidates: send,
                ..Self::default()
            }
        }

        fn granted_packages(&self) -> Vec<String> {
            self.grants
                .borrow()
                .iter()
                .map(|(package, _)| package.clone())
                .collect()
        }
    }

    impl ShareHost for RecordingHost {
        fn app_identity(&self) -> crate::Result<String> {
            Ok("com.example.app".into())
        }

        fn issue_handle(&self, authority: &str, path: &Path) -> crate::Result<ContentHandle> {
            self.issued.borrow_mut().push(path.to_path_buf());
            Ok(ContentHandle(format!(
                "content://{}{}",
                authority,
                path.display()
            )))
        }

        fn resolve_receivers(
            &self,
            descriptor: ActionDescriptor<'_>,
        ) -> crate::Result<Vec<ReceiverId>> {
            let names = match descriptor {
                ActionDescriptor::Chooser(_) => &self.chooser_candidates,
                ActionDescriptor::Send(_) => &self.send_candidates,
            };
            Ok(names.iter().map(|n| ReceiverId(n.to_string())).collect())
        }

        fn grant_read_access(
            &self,
            receiver: &ReceiverId,
            handle: &ContentHandle,
        ) -> crate::Result<()> {
            self.grants
                .borrow_mut()
                .push((receiver.0.clone(), handle.0.clone()));
            Ok(())
        }

        fn present_chooser(&self, chooser: &ChooserAction) -> crate::Result<()> {
            self.presented.borrow_mut().push(chooser.clone());
            Ok(())
        }
    }

    fn request(uri: &str) -> ShareFileRequest {
        ShareFileRequest {
            file_uri: uri.into(),
            title: None,
            dialog_title: None,
        }
    }

    fn temp_json() -> NamedTempFile {
        Builder::new().suffix(".json").tempfile().unwrap()
    }

    #[test]
    fn empty_file_uri_is_rejected_before_any_host_call() {
        let host = RecordingHost::default();
        let err = share_file(&host, &request("")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(m) if m == "fileUri is required"));
        assert!(host.issued.borrow().is_empty());
        assert!(host.grants.borrow().is_empty());
        assert!(host.presented.borrow().is_empty());
    }

    #[test]
    fn payload_without_file_uri_is_invalid_argument() {
        let host = RecordingHost::default();
        let request: ShareFileRequest = serde_json::from_str("{}").unwrap();
        let err = share_file(&host, &request).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(m) if m == "fileUri is required"));
        assert!(host.issued.borrow().is_empty());
        assert!(host.presented.borrow().is_empty());
    }

    #[test]
    fn missing_file_is_not_found_and_no_handle_is_issued() {
        let host = RecordingHost::default();
        let err = share_file(&host, &request("file:///missing/x.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound(uri) if uri == "file:///missing/x.json"));
        assert!(host.issued.borrow().is_empty());
        assert!(host.presented.borrow().is_empty());
    }

    #[test]
    fn shares_existing_file_with_default_titles() {
        let file = temp_json();
        let host = RecordingHost::with_candidates(
            vec!["com.android.chooser"],
            vec!["com.mail.client"],
        );
        let uri = format!("file://{}", file.path().display());

        share_file(&host, &request(&uri)).unwrap();

        assert_eq!(*host.issued.borrow(), vec![file.path().to_path_buf()]);
        let presented = host.presented.borrow();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].dialog_title, DEFAULT_DIALOG_TITLE);
        assert_eq!(presented[0].send.subject, DEFAULT_TITLE);
        assert_eq!(presented[0].send.mime_type, "application/json");
        assert!(presented[0].send.grant_read);
    }

    #[test]
    fn grants_union_when_candidate_sets_are_disjoint() {
        let file = temp_json();
        let host = RecordingHost::with_candidates(
            vec!["com.android.chooser", "com.photos.app"],
            vec!["com.mail.client"],
        );

        share_file(&host, &request(&file.path().display().to_string())).unwrap();

        let mut granted = host.granted_packages();
        granted.sort();
        assert_eq!(
            granted,
            ["com.android.chooser", "com.mail.client", "com.photos.app"]
        );
    }

    #[test]
    fn grants_each_receiver_once_when_sets_overlap() {
        let file = temp_json();
        let host = RecordingHost::with_candidates(
            vec!["com.mail.client", "com.photos.app"],
            vec!["com.mail.client"],
        );

        share_file(&host, &request(&file.path().display().to_string())).unwrap();

        let mut granted = host.granted_packages();
        granted.sort();
        assert_eq!(granted, ["com.mail.client", "com.photos.app"]);
    }

    #[test]
    fn handle_is_scoped_to_the_requested_file() {
        let file = temp_json();
        let host = RecordingHost::with_candidates(vec!["com.mail.client"], vec![]);
        let uri = format!("file://{}", file.path().display());

        share_file(&host, &request(&uri)).unwrap();

        let expected = format!(
            "content://com.example.app.fileprovider{}",
            file.path().display()
        );
        let grants = host.grants.borrow();
        assert!(grants.iter().all(|(_, handle)| handle == &expected));
        assert_eq!(host.presented.borrow()[0].send.handle.0, expected);
    }

    #[test]
    fn explicit_titles_flow_into_the_chooser() {
        let file = temp_json();
        let host = RecordingHost::with_candidates(vec!["com.mail.client"], vec![]);
        let request = ShareFileRequest {
            file_uri: file.path().display().to_string(),
            title: Some("Monthly report".into()),
            dialog_title: Some("Send report".into()),
        };

        share_file(&host, &request).unwrap();

        let presented = host.presented.borrow();
        assert_eq!(presented[0].send.subject, "Monthly report");
        assert_eq!(presented[0].dialog_title, "Send report");
    }

    #[test]
    fn file_uri_scheme_is_stripped() {
        assert_eq!(
            uri_to_path("file:///data/user/0/app/files/report.json"),
            PathBuf::from("/data/user/0/app/files/report.json")
        );
        assert_eq!(
            uri_to_path("/data/user/0/app/files/report.json"),
            PathBuf::from("/data/user/0/app/files/report.json")
        );
    }
}
