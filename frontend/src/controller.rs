//! Upload controller - the widget's logic without any DOM.
//!
//! The controller owns the [`TaskList`], hands selected files to a
//! [`TransferMechanism`] and turns the status events coming back into
//! notifications through [`on_file_state_change`].
//!
//! ```text
//! select_files ──▶ TaskList::add ──▶ TransferMechanism::submit
//!                                            │ StatusUpdate
//!                                            ▼
//!   listeners ◀── snapshot ◀── TaskList::apply ──▶ on_file_state_change ──▶ Notifier
//! ```
//!
//! Everything runs on the UI thread. No `RefCell` borrow is held while
//! calling the transfer mechanism, the notifier or a listener, so a
//! mechanism may report status synchronously from inside `submit`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::{UploadConfig, FILE_FIELD};
use crate::services::{FileHandle, Notifier, StatusCallback, TransferMechanism, TransferRequest};
use crate::tasks::TaskList;
use crate::types::{FileStateChange, Notification, StatusUpdate, TaskId, UploadStatus, UploadTask};

/// Called with the new file list after every change.
pub type ListListener = Box<dyn Fn(&[UploadTask])>;

/// React to a task's status change.
///
/// `Uploading` is silent. Any other status is logged for developers;
/// `Done` and `Error` also raise a notification naming the file.
pub fn on_file_state_change<N: Notifier + ?Sized>(notifier: &N, change: &FileStateChange) {
    let task = &change.task;
    if task.status == UploadStatus::Uploading {
        return;
    }

    log::debug!("Task {:?}, file list {:?}", task, change.file_list);

    match task.status {
        UploadStatus::Done => notifier.notify(Notification::upload_succeeded(&task.name)),
        UploadStatus::Error => notifier.notify(Notification::upload_failed(&task.name)),
        UploadStatus::Selected | UploadStatus::Uploading => {}
    }
}

struct Shared<N> {
    tasks: RefCell<TaskList>,
    notifier: N,
    listeners: RefCell<Vec<ListListener>>,
}

impl<N: Notifier> Shared<N> {
    fn apply_status(&self, update: StatusUpdate) {
        let applied = self.tasks.borrow_mut().apply(&update);

        match applied {
            Ok(task) => {
                let file_list = self.publish();
                on_file_state_change(&self.notifier, &FileStateChange { task, file_list });
            }
            Err(rejected) => log::debug!("Ignoring status update: {}", rejected),
        }
    }

    /// Send the current list to every listener and return it.
    fn publish(&self) -> Vec<UploadTask> {
        let snapshot = self.tasks.borrow().snapshot();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
        snapshot
    }
}

pub struct UploadController<T, N> {
    config: UploadConfig,
    transfer: T,
    shared: Rc<Shared<N>>,
}

impl<T, N> UploadController<T, N>
where
    T: TransferMechanism,
    N: Notifier + 'static,
{
    pub fn new(config: UploadConfig, transfer: T, notifier: N) -> Self {
        Self {
            config,
            transfer,
            shared: Rc::new(Shared {
                tasks: RefCell::new(TaskList::new()),
                notifier,
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Track and upload newly selected files.
    ///
    /// Only the first file is kept when the widget does not accept
    /// multiple files.
    pub fn select_files(&self, files: Vec<T::File>) -> Vec<TaskId> {
        let limit = if self.config.multiple { files.len() } else { 1 };

        let pending: Vec<(TaskId, T::File)> = {
            let mut tasks = self.shared.tasks.borrow_mut();
            files
                .into_iter()
                .take(limit)
                .map(|file| (tasks.add(file.file_name(), file.byte_len()), file))
                .collect()
        };
        if pending.is_empty() {
            return Vec::new();
        }

        self.shared.publish();

        let ids = pending.iter().map(|(id, _)| *id).collect();
        for (id, file) in pending {
            log::debug!("Submitting task {} to {}", id, self.config.endpoint);
            self.transfer.submit(
                TransferRequest {
                    id,
                    url: self.config.endpoint.clone(),
                    field_name: FILE_FIELD.to_string(),
                    file,
                },
                self.status_callback(),
            );
        }
        ids
    }

    /// Apply a status event as if it came from the transfer mechanism.
    pub fn apply_status(&self, update: StatusUpdate) {
        self.shared.apply_status(update);
    }

    pub fn tasks(&self) -> Vec<UploadTask> {
        self.shared.tasks.borrow().snapshot()
    }

    /// Forget every task. Events still in flight for them are ignored.
    pub fn reset(&self) {
        self.shared.tasks.borrow_mut().clear();
        self.shared.publish();
    }

    pub fn subscribe(&self, listener: impl Fn(&[UploadTask]) + 'static) {
        self.shared.listeners.borrow_mut().push(Box::new(listener));
    }

    fn status_callback(&self) -> StatusCallback {
        let shared: Weak<Shared<N>> = Rc::downgrade(&self.shared);
        Rc::new(move |update: StatusUpdate| {
            // dropped controller: the widget is gone
            if let Some(shared) = shared.upgrade() {
                shared.apply_status(update);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::types::NotificationLevel;

    #[derive(Clone, Debug)]
    struct FakeFile {
        name: String,
        size: u64,
    }

    fn file(name: &str) -> FakeFile {
        FakeFile { name: name.to_string(), size: 42 }
    }

    impl FileHandle for FakeFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn byte_len(&self) -> u64 {
            self.size
        }
    }

    /// Plays a scripted status sequence synchronously for known file
    /// names; holds the callback of every other submission.
    #[derive(Default)]
    struct FakeTransfer {
        scripts: HashMap<String, Vec<UploadStatus>>,
        held: RefCell<Vec<(TransferRequest<FakeFile>, StatusCallback)>>,
    }

    impl FakeTransfer {
        fn scripted(name: &str, statuses: &[UploadStatus]) -> Self {
            let mut fake = Self::default();
            fake.scripts.insert(name.to_string(), statuses.to_vec());
            fake
        }

        fn emit(&self, name: &str, status: UploadStatus) {
            let held = self.held.borrow();
            let (request, events) = held
                .iter()
                .find(|(r, _)| r.file.name == name)
                .expect("file was submitted");
            events(StatusUpdate::new(request.id, status));
        }
    }

    impl TransferMechanism for FakeTransfer {
        type File = FakeFile;

        fn submit(&self, request: TransferRequest<FakeFile>, events: StatusCallback) {
            if let Some(script) = self.scripts.get(&request.file.name) {
                for status in script {
                    events(StatusUpdate::new(request.id, *status));
                }
            }
            self.held.borrow_mut().push((request, events));
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.borrow_mut().push(notification);
        }
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.seen.borrow().iter().map(|n| n.message.clone()).collect()
        }
    }

    fn controller(
        transfer: FakeTransfer,
    ) -> (UploadController<FakeTransfer, Rc<RecordingNotifier>>, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = UploadController::new(UploadConfig::default(), transfer, notifier.clone());
        (controller, notifier)
    }

    #[test]
    fn test_done_notifies_success() {
        let (controller, notifier) = controller(FakeTransfer::scripted(
            "report.csv",
            &[UploadStatus::Uploading, UploadStatus::Done],
        ));

        controller.select_files(vec![file("report.csv")]);

        assert_eq!(notifier.messages(), ["report.csv file uploaded successfully."]);
        assert_eq!(notifier.seen.borrow()[0].level, NotificationLevel::Success);
        assert_eq!(controller.tasks()[0].status, UploadStatus::Done);
    }

    #[test]
    fn test_error_notifies_failure() {
        let (controller, notifier) = controller(FakeTransfer::scripted(
            "bad.csv",
            &[UploadStatus::Uploading, UploadStatus::Error],
        ));

        controller.select_files(vec![file("bad.csv")]);

        assert_eq!(notifier.messages(), ["bad.csv file upload failed."]);
        assert_eq!(notifier.seen.borrow()[0].level, NotificationLevel::Error);
    }

    #[test]
    fn test_nothing_while_selected_or_uploading() {
        let (controller, notifier) = controller(FakeTransfer::default());

        controller.select_files(vec![file("report.csv")]);
        assert!(notifier.messages().is_empty());

        controller.transfer().emit("report.csv", UploadStatus::Uploading);
        assert!(notifier.messages().is_empty());
        assert_eq!(controller.tasks()[0].status, UploadStatus::Uploading);
    }

    #[test]
    fn test_done_without_uploading_still_notifies() {
        let (controller, notifier) = controller(FakeTransfer::default());

        controller.select_files(vec![file("report.csv")]);
        controller.transfer().emit("report.csv", UploadStatus::Done);

        assert_eq!(notifier.messages(), ["report.csv file uploaded successfully."]);
    }

    #[test]
    fn test_terminal_status_notifies_once() {
        let (controller, notifier) = controller(FakeTransfer::default());

        controller.select_files(vec![file("report.csv")]);
        controller.transfer().emit("report.csv", UploadStatus::Done);
        controller.transfer().emit("report.csv", UploadStatus::Done);
        controller.transfer().emit("report.csv", UploadStatus::Error);

        assert_eq!(notifier.messages(), ["report.csv file uploaded successfully."]);
    }

    #[test]
    fn test_two_files_complete_independently() {
        let (controller, notifier) = controller(FakeTransfer::default());

        let ids = controller.select_files(vec![file("a.csv"), file("b.csv")]);
        assert_eq!(ids.len(), 2);

        // completion order differs from selection order
        controller.transfer().emit("b.csv", UploadStatus::Uploading);
        controller.transfer().emit("a.csv", UploadStatus::Uploading);
        controller.transfer().emit("b.csv", UploadStatus::Done);
        controller.transfer().emit("a.csv", UploadStatus::Done);

        let mut messages = notifier.messages();
        messages.sort();
        assert_eq!(
            messages,
            ["a.csv file uploaded successfully.", "b.csv file uploaded successfully."]
        );
    }

    #[test]
    fn test_single_file_mode_keeps_first() {
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = UploadController::new(
            UploadConfig::default().with_multiple(false),
            FakeTransfer::default(),
            notifier,
        );

        let ids = controller.select_files(vec![file("a.csv"), file("b.csv")]);

        assert_eq!(ids.len(), 1);
        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.transfer().held.borrow().len(), 1);
    }

    #[test]
    fn test_request_targets_configured_endpoint() {
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = UploadController::new(
            UploadConfig::default().with_endpoint("http://localhost:5000/upload"),
            FakeTransfer::default(),
            notifier,
        );

        controller.select_files(vec![file("report.csv")]);

        let held = controller.transfer().held.borrow();
        let (request, _) = &held[0];
        assert_eq!(request.url, "http://localhost:5000/upload");
        assert_eq!(request.field_name, "file");
    }

    #[test]
    fn test_reset_ignores_late_events() {
        let (controller, notifier) = controller(FakeTransfer::default());

        controller.select_files(vec![file("report.csv")]);
        controller.reset();
        controller.transfer().emit("report.csv", UploadStatus::Done);

        assert!(controller.tasks().is_empty());
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_listeners_get_whole_list() {
        let (controller, _notifier) = controller(FakeTransfer::default());
        let seen: Rc<RefCell<Vec<Vec<UploadStatus>>>> = Rc::default();

        let sink = seen.clone();
        controller.subscribe(move |tasks| {
            sink.borrow_mut().push(tasks.iter().map(|t| t.status).collect());
        });

        controller.select_files(vec![file("a.csv"), file("b.csv")]);
        controller.transfer().emit("a.csv", UploadStatus::Error);

        assert_eq!(
            *seen.borrow(),
            vec![
                vec![UploadStatus::Selected, UploadStatus::Selected],
                vec![UploadStatus::Error, UploadStatus::Selected],
            ]
        );
    }

    #[test]
    fn test_direct_state_change_handler() {
        let notifier = RecordingNotifier::default();
        let mut task = UploadTask::new(TaskId(7), "report.csv", 1);

        task.status = UploadStatus::Selected;
        on_file_state_change(&notifier, &FileStateChange { task: task.clone(), file_list: vec![] });
        task.status = UploadStatus::Uploading;
        on_file_state_change(&notifier, &FileStateChange { task: task.clone(), file_list: vec![] });
        assert!(notifier.messages().is_empty());

        task.status = UploadStatus::Done;
        on_file_state_change(&notifier, &FileStateChange { task, file_list: vec![] });
        assert_eq!(notifier.messages(), ["report.csv file uploaded successfully."]);
    }
}
