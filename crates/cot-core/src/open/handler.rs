use tracing::{info, warn};

use crate::open::types::{OpenOutcome, OpenRequest, OpenTarget};
use crate::remote::{RemoteApplication, RemoteError};
use crate::script::ScriptExecutor;
use crate::wait::{CloseMonitor, should_wait};

/// Launch the editor and carry out one invocation.
///
/// Order: launch, open files or create the document, move the caret if a
/// location was given, then block on the front window if waiting applies.
/// Script failures propagate; only window polling swallows them.
pub fn open_in_editor<E: ScriptExecutor>(
    app: &mut RemoteApplication<E>,
    request: &OpenRequest,
    monitor: &dyn CloseMonitor,
) -> Result<OpenOutcome, RemoteError> {
    let start_time = std::time::Instant::now();
    info!(
        event = "core.open.started",
        application = %app.name(),
        launch_mode = ?request.launch_mode,
        wait = request.wait
    );

    app.launch(request.launch_mode)?;

    match &request.target {
        OpenTarget::Files(files) => {
            for file in files {
                app.open(file.path())?;
            }
            info!(event = "core.open.files_sent", count = files.len());
        }
        OpenTarget::Pipe(text) => {
            app.make_new_document()?;
            app.set_document_contents(text)?;
            info!(event = "core.open.pipe_sent", chars = text.chars().count());
        }
        OpenTarget::NewDocument => {
            app.make_new_document()?;
            info!(event = "core.open.new_document_created");
        }
        OpenTarget::Nothing => {}
    }

    let mut outcome = OpenOutcome::default();

    if request.location.is_requested() {
        let contents = app.document_contents()?;
        let offset = request.location.offset_in(&contents);
        app.place_caret(offset)?;
        info!(
            event = "core.open.caret_placed",
            line = ?request.location.line,
            column = ?request.location.column,
            offset = offset
        );
        outcome.caret_offset = Some(offset);
    }

    if should_wait(request.wait, &request.target) {
        let window = app.window_id(1)?;
        outcome.wait = Some(monitor.wait_for_close(&*app, &window));
    } else if request.wait {
        warn!(
            event = "core.open.wait_skipped",
            "--wait only applies to a single file, piped text or a new document"
        );
    }

    info!(
        event = "core.open.completed",
        application = %app.name(),
        duration_ms = start_time.elapsed().as_millis() as u64
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::FileRequest;
    use crate::location::LocationRequest;
    use crate::remote::application::testing::{MockExecutor, failed, ok};
    use crate::remote::{LaunchMode, WindowHandle};
    use crate::script::{ExecutionMode, ScriptError};
    use crate::wait::{PollingMonitor, WaitOutcome, WindowProbe};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Never polls; records which window it was asked about.
    #[derive(Default)]
    struct RecordingMonitor {
        windows: RefCell<Vec<String>>,
    }

    impl CloseMonitor for RecordingMonitor {
        fn wait_for_close(&self, _probe: &dyn WindowProbe, window: &WindowHandle) -> WaitOutcome {
            self.windows.borrow_mut().push(window.id().to_string());
            WaitOutcome::Closed
        }
    }

    fn request(target: OpenTarget) -> OpenRequest {
        OpenRequest {
            target,
            location: LocationRequest::default(),
            wait: false,
            launch_mode: LaunchMode::Foreground,
        }
    }

    /// Replies for connect + launch (identifier, activate, pid).
    fn startup(mut rest: Vec<Result<String, ScriptError>>) -> MockExecutor {
        let mut replies = vec![ok("com.coteditor.CotEditor"), ok(""), ok("501")];
        replies.append(&mut rest);
        MockExecutor::with_replies(replies)
    }

    fn file(path: &str) -> FileRequest {
        FileRequest::new(PathBuf::from(path), true)
    }

    #[test]
    fn test_opens_each_file_async() {
        let executor = startup(vec![]);
        let mut app = RemoteApplication::connect("CotEditor", &executor).unwrap();
        let monitor = RecordingMonitor::default();

        let outcome = open_in_editor(
            &mut app,
            &request(OpenTarget::Files(vec![file("/tmp/a.txt"), file("/tmp/b.txt")])),
            &monitor,
        )
        .unwrap();

        let scripts = executor.scripts();
        assert_eq!(scripts.len(), 5);
        assert_eq!(
            scripts[3],
            "tell app \"CotEditor\" to open POSIX file \"/tmp/a.txt\""
        );
        assert_eq!(
            scripts[4],
            "tell app \"CotEditor\" to open POSIX file \"/tmp/b.txt\""
        );
        assert_eq!(executor.modes()[3], ExecutionMode::Async);
        assert_eq!(outcome, OpenOutcome::default());
    }

    #[test]
    fn test_pipe_creates_document_with_contents() {
        let executor = startup(vec![]);
        let mut app = RemoteApplication::connect("CotEditor", &executor).unwrap();

        open_in_editor(
            &mut app,
            &request(OpenTarget::Pipe("say \"hi\"\n".to_string())),
            &RecordingMonitor::default(),
        )
        .unwrap();

        let scripts = executor.scripts();
        assert_eq!(scripts[3], "tell app \"CotEditor\" to make new document");
        assert_eq!(
            scripts[4],
            "tell app \"CotEditor\" to tell document 1 to set contents to \"say \\\"hi\\\"\n\""
        );
    }

    #[test]
    fn test_background_launch_uses_run() {
        let executor = startup(vec![]);
        let mut app = RemoteApplication::connect("CotEditor", &executor).unwrap();
        let mut req = request(OpenTarget::Nothing);
        req.launch_mode = LaunchMode::Background;

        open_in_editor(&mut app, &req, &RecordingMonitor::default()).unwrap();

        assert_eq!(executor.scripts()[1], "tell app \"CotEditor\" to run");
        assert_eq!(app.process_id(), Some("501"));
    }

    #[test]
    fn test_location_places_caret() {
        let executor = startup(vec![ok(""), ok("hello\nworld")]);
        let mut app = RemoteApplication::connect("CotEditor", &executor).unwrap();
        let mut req = request(OpenTarget::Files(vec![file("/tmp/a.txt")]));
        req.location = LocationRequest::new(Some(2), Some(3));

        let outcome = open_in_editor(&mut app, &req, &RecordingMonitor::default()).unwrap();

        assert_eq!(outcome.caret_offset, Some(9));
        let scripts = executor.scripts();
        assert_eq!(
            scripts[4],
            "tell app \"CotEditor\" to tell document 1 to contents"
        );
        assert_eq!(
            scripts[5],
            "tell app \"CotEditor\" to tell document 1 to set range of selection to {9, 0}"
        );
        assert_eq!(
            scripts[6],
            "tell app \"CotEditor\" to tell document 1 to scroll to caret"
        );
    }

    #[test]
    fn test_wait_on_single_file_watches_front_window() {
        let executor = startup(vec![ok(""), ok("3141")]);
        let mut app = RemoteApplication::connect("CotEditor", &executor).unwrap();
        let monitor = RecordingMonitor::default();
        let mut req = request(OpenTarget::Files(vec![file("/tmp/a.txt")]));
        req.wait = true;

        let outcome = open_in_editor(&mut app, &req, &monitor).unwrap();

        assert_eq!(outcome.wait, Some(WaitOutcome::Closed));
        assert_eq!(*monitor.windows.borrow(), vec!["3141".to_string()]);
        assert_eq!(
            executor.scripts()[4],
            "tell app \"CotEditor\" to id of window 1"
        );
    }

    #[test]
    fn test_wait_with_two_files_is_noop() {
        let executor = startup(vec![]);
        let mut app = RemoteApplication::connect("CotEditor", &executor).unwrap();
        let monitor = RecordingMonitor::default();
        let mut req = request(OpenTarget::Files(vec![file("/tmp/a.txt"), file("/tmp/b.txt")]));
        req.wait = true;

        let outcome = open_in_editor(&mut app, &req, &monitor).unwrap();

        assert_eq!(outcome.wait, None);
        assert!(monitor.windows.borrow().is_empty());
        assert!(
            !executor
                .scripts()
                .iter()
                .any(|s| s.contains("id of window"))
        );
    }

    #[test]
    fn test_wait_on_new_document_polls_until_closed() {
        // make new document, window id, exists -> true, exists -> error (window closed)
        let executor = startup(vec![
            ok(""),
            ok("77"),
            ok("true"),
            failed("Invalid index."),
        ]);
        let mut app = RemoteApplication::connect("CotEditor", &executor).unwrap();
        let mut req = request(OpenTarget::NewDocument);
        req.wait = true;

        let outcome =
            open_in_editor(&mut app, &req, &PollingMonitor::new(Duration::from_millis(1)))
                .unwrap();

        assert!(matches!(outcome.wait, Some(WaitOutcome::Invalidated { .. })));
        let scripts = executor.scripts();
        assert_eq!(
            scripts[5],
            "tell app \"CotEditor\" to exists window id 77"
        );
        assert_eq!(scripts.len(), 7);
    }

    #[test]
    fn test_script_failure_propagates() {
        let executor = startup(vec![failed("Can't make new document")]);
        let mut app = RemoteApplication::connect("CotEditor", &executor).unwrap();

        let result = open_in_editor(
            &mut app,
            &request(OpenTarget::NewDocument),
            &RecordingMonitor::default(),
        );

        assert!(matches!(result, Err(RemoteError::Script { .. })));
    }
}
