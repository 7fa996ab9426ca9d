use std::{collections::VecDeque, fs, io};

use pretty_assertions::assert_eq;
use tile_engine_edit::{
    Cell, ControlFlow, DisplaySurface, EditSession, EditState, EditorEvent, EditorMode, EngineError, Frame, InputSource, Key, KeyBindings,
    MapGrid, Notification, Position, ScreenBuffer, Size, TextAttribute, TextPane,
};

use super::{create_test_session, key_down, left_click};

struct QueuedInput(VecDeque<EditorEvent>);

impl InputSource for QueuedInput {
    fn poll_event(&mut self) -> io::Result<Option<EditorEvent>> {
        Ok(self.0.pop_front())
    }
}

#[derive(Default)]
struct RecordingDisplay {
    frames: Vec<(ScreenBuffer, EditorMode, Option<Notification>)>,
}

impl DisplaySurface for RecordingDisplay {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.frames.push((frame.screen.clone(), frame.mode, frame.notification.cloned()));
        Ok(())
    }
}

#[test]
fn test_starts_in_tile_mode() {
    let dir = tempfile::tempdir().unwrap();
    let session = create_test_session(&dir);
    assert_eq!(session.mode(), EditorMode::Tile);
    assert!(session.notification().is_none());
    assert_eq!(session.state().map(), &MapGrid::default());
}

#[test]
fn test_switch_mode_toggles() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = create_test_session(&dir);
    for i in 1..=5 {
        session.handle_event(&key_down(Key::Tab));
        let expected = if i % 2 == 1 { EditorMode::Walkability } else { EditorMode::Tile };
        assert_eq!(session.mode(), expected);
    }
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = create_test_session(&dir);
    session.handle_event(&left_click(65, 25));
    session.handle_event(&left_click(0, 0));
    session.handle_event(&key_down(Key::Tab));
    session.handle_event(&left_click(79, 24));
    session.handle_event(&key_down(Key::Char('s')));

    assert_eq!(session.notification(), Some(&Notification::Info("File Saved.".to_string())));
    let data = fs::read(session.map_path()).unwrap();
    assert_eq!(data.len(), 6000);
    assert_eq!(&data[0..3], &[b'A', 0x17, 1]);
    assert_eq!(&data[5997..6000], &[0, 0, 0]);

    let mut reloaded = create_test_session(&dir);
    reloaded.load().unwrap();
    assert_eq!(reloaded.state().map(), session.state().map());
}

#[test]
fn test_save_works_in_both_modes() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = create_test_session(&dir);
    session.handle_event(&key_down(Key::Char('s')));
    assert!(dir.path().join("test.map").exists());
    fs::remove_file(dir.path().join("test.map")).unwrap();

    session.handle_event(&key_down(Key::Tab));
    session.handle_event(&key_down(Key::Char('s')));
    assert!(dir.path().join("test.map").exists());
}

#[test]
fn test_save_failure_keeps_editing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = EditSession::new(dir.path().join("missing").join("test.map"), KeyBindings::default());

    let flow = session.handle_event(&key_down(Key::Char('s')));
    assert_eq!(flow, ControlFlow::Continue);
    assert!(session.notification().is_some_and(Notification::is_error));

    session.handle_event(&left_click(65, 25));
    session.handle_event(&left_click(1, 1));
    assert_eq!(session.state().map().get(Position::new(1, 1)).0.glyph, b'A');
}

#[test]
fn test_load_missing_file_keeps_blank_map() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = create_test_session(&dir);
    let err = session.load().unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(session.state().map(), &MapGrid::default());
}

#[test]
fn test_load_truncated_file_keeps_blank_map() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("test.map"), vec![b'x'; 5999]).unwrap();
    let mut session = create_test_session(&dir);

    let err = session.load().unwrap_err();
    assert!(matches!(err, EngineError::TruncatedFile { expected: 6000, actual: 5999 }), "{err:?}");
    assert_eq!(session.state().map(), &MapGrid::default());
}

#[test]
fn test_load_unreadable_path_keeps_blank_map() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("test.map")).unwrap();
    let mut session = create_test_session(&dir);

    let err = session.load().unwrap_err();
    assert!(matches!(err, EngineError::ReadFailure { .. }), "{err:?}");
    assert_eq!(session.state().map(), &MapGrid::default());
}

#[test]
fn test_replace_map_rejects_other_size() {
    let mut state = EditState::default();
    let err = state.replace_map(MapGrid::new((2, 2)).unwrap()).unwrap_err();

    assert!(matches!(err, EngineError::SizeMismatch { expected, actual } if expected == Size::new(80, 25) && actual == Size::new(2, 2)));
    assert_eq!(state.map(), &MapGrid::default());
}

#[test]
fn test_quit_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = create_test_session(&dir);
    assert_eq!(session.handle_event(&key_down(Key::Escape)), ControlFlow::Quit);
}

#[test]
fn test_custom_key_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let keys = KeyBindings {
        save: Key::F(2),
        switch_mode: Key::Char('m'),
        quit: Key::Char('q'),
    };
    let mut session = EditSession::new(dir.path().join("test.map"), keys);

    session.handle_event(&key_down(Key::Tab));
    assert_eq!(session.mode(), EditorMode::Tile);
    session.handle_event(&key_down(Key::Char('m')));
    assert_eq!(session.mode(), EditorMode::Walkability);

    session.handle_event(&key_down(Key::Char('s')));
    assert!(session.notification().is_none());
    session.handle_event(&key_down(Key::F(2)));
    assert!(session.notification().is_some());

    assert_eq!(session.handle_event(&key_down(Key::Char('q'))), ControlFlow::Quit);
}

#[test]
fn test_key_bindings_from_toml() {
    let keys: KeyBindings = toml::from_str("save = \"f2\"\nswitch_mode = \"m\"\n").unwrap();
    assert_eq!(keys.save, Key::F(2));
    assert_eq!(keys.switch_mode, Key::Char('m'));
    assert_eq!(keys.quit, Key::Escape);
}

#[test]
fn test_run_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = create_test_session(&dir);
    let mut input = QueuedInput(VecDeque::from([left_click(65, 25), left_click(2, 3), key_down(Key::Tab), key_down(Key::Escape)]));
    let mut display = RecordingDisplay::default();

    assert_eq!(session.run_frame(&mut input, &mut display).unwrap(), ControlFlow::Continue);
    assert_eq!(session.run_frame(&mut input, &mut display).unwrap(), ControlFlow::Continue);
    assert_eq!(display.frames[1].0.char_at(Position::new(2, 3)), Cell::new(b'A', TextAttribute::DEFAULT_PALETTE));
    assert_eq!(display.frames[1].1, EditorMode::Tile);

    assert_eq!(session.run_frame(&mut input, &mut display).unwrap(), ControlFlow::Continue);
    assert_eq!(display.frames[2].1, EditorMode::Walkability);

    assert_eq!(session.run_frame(&mut input, &mut display).unwrap(), ControlFlow::Quit);
    assert_eq!(display.frames.len(), 3);

    // idle frames still redraw
    assert_eq!(session.run_frame(&mut input, &mut display).unwrap(), ControlFlow::Continue);
    assert_eq!(display.frames.len(), 4);
    assert_eq!(display.frames[3].0, display.frames[2].0);
}
