use egui::{Color32, pos2};
use mood_journal::{
    EntryExporter, JournalConfig, JournalPrefs, Mood, MoodJournalApp, SaveError, ToolController,
    ToolKind,
};
use std::fs;
use std::path::PathBuf;

fn temp_journal(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mood_journal_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&dir).ok();
    dir
}

fn sketch() -> ToolController {
    let mut controller = ToolController::default();
    controller.set_pen_color(Color32::RED);
    controller.on_pointer_down(pos2(50.0, 50.0));
    controller.on_pointer_drag(pos2(300.0, 200.0));
    controller.on_pointer_up();
    controller.select_tool(ToolKind::Heart);
    controller.on_pointer_down(pos2(400.0, 300.0));
    controller
}

#[test]
fn test_save_writes_note_and_drawing() {
    let dir = temp_journal("save");
    let controller = sketch();
    let snapshot = controller.snapshot();

    let exporter = EntryExporter::new(&dir);
    let saved = exporter
        .save_entry("01/02/2024", Mood::Sad.label(), "hello", &snapshot)
        .unwrap();

    assert_eq!(saved.text_path, dir.join("MoodJournal_01-02-2024.doc"));
    assert_eq!(saved.image_path, dir.join("MoodDrawing_01-02-2024.png"));

    let text = fs::read_to_string(&saved.text_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Date: 01/02/2024", "Mood: Sad", "", "Note:", "hello"]);

    let decoded = image::open(&saved.image_path).unwrap().to_rgba8();
    assert_eq!(decoded, snapshot);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_overwrites_same_day() {
    let dir = temp_journal("overwrite");
    let exporter = EntryExporter::new(&dir);
    let controller = ToolController::default();

    exporter.save_entry("05/06/2024", "Happy", "first", &controller.snapshot()).unwrap();
    let saved = exporter.save_entry("05/06/2024", "Okay", "second", &controller.snapshot()).unwrap();

    let text = fs::read_to_string(&saved.text_path).unwrap();
    assert!(text.contains("Mood: Okay"));
    assert!(text.ends_with("Note:\nsecond\n"));
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_folder_creation_failure_is_reported() {
    let dir = temp_journal("blocked");
    fs::create_dir_all(&dir).unwrap();
    // A plain file where the journal folder should go
    let blocker = dir.join("PersonalJournal");
    fs::write(&blocker, "not a folder").unwrap();

    let controller = sketch();
    let before = controller.snapshot();
    let err = EntryExporter::new(&blocker)
        .save_entry("01/02/2024", "Happy", "note", &before)
        .unwrap_err();

    assert!(matches!(err, SaveError::FolderCreation { .. }));
    assert_eq!(err.path(), blocker.as_path());
    assert!(err.user_message().starts_with("Error saving: "));
    assert_eq!(controller.snapshot(), before);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_text_write_failure_is_reported() {
    let dir = temp_journal("text_blocked");
    // A folder where the note file should go
    fs::create_dir_all(dir.join("MoodJournal_01-02-2024.doc")).unwrap();

    let err = EntryExporter::new(&dir)
        .save_entry("01/02/2024", "Happy", "note", &ToolController::default().snapshot())
        .unwrap_err();
    assert!(matches!(err, SaveError::TextWrite { .. }));
    // The drawing is not written after a failed note
    assert!(!dir.join("MoodDrawing_01-02-2024.png").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_image_failure_is_reported() {
    let dir = temp_journal("image_blocked");
    fs::create_dir_all(dir.join("MoodDrawing_01-02-2024.png")).unwrap();

    let err = EntryExporter::new(&dir)
        .save_entry("01/02/2024", "Happy", "note", &ToolController::default().snapshot())
        .unwrap_err();
    assert!(matches!(err, SaveError::ImageEncode { .. }));
    assert!(dir.join("MoodJournal_01-02-2024.doc").is_file());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_app_save_keeps_state_and_queues_message() {
    let dir = temp_journal("app");
    let prefs = JournalPrefs {
        config: JournalConfig {
            journal_dir: dir.clone(),
        },
        mood: Mood::Okay,
        ..Default::default()
    };
    let mut app = MoodJournalApp::from_prefs(prefs);
    // Skip if the environment points the journal elsewhere
    if std::env::var_os(mood_journal::config::JOURNAL_DIR_ENV).is_some() {
        return;
    }

    app.note_mut().push_str("a calm day");
    app.controller_mut().on_pointer_down(pos2(10.0, 10.0));
    app.controller_mut().on_pointer_drag(pos2(90.0, 10.0));
    let before = app.controller().snapshot();

    let saved = app.save_entry().unwrap();
    assert_eq!(app.message(), Some(saved.summary().as_str()));
    assert_eq!(app.note(), "a calm day");
    assert_eq!(app.controller().snapshot(), before);

    let text = fs::read_to_string(&saved.text_path).unwrap();
    assert!(text.starts_with(&format!("Date: {}\nMood: Okay\n", app.today())));

    app.dismiss_message();
    assert_eq!(app.message(), None);

    fs::remove_dir_all(&dir).ok();
}
