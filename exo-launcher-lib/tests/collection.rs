use std::fs;
use std::path::{Path, PathBuf};

use exo_launcher_lib::{
    CollectionKind, CollectionLocation, CollectionSession, LauncherError, catalog_path,
    list_game_files, load_collection, prepare_launch, validate_selected_folder,
};

/// Build a collection root named `name` with a catalog and the given game
/// folders under the DOS layout.
fn make_collection(parent: &Path, name: &str, catalog_file: &str, games: &[(&str, &str)]) -> PathBuf {
    let root = parent.join(name);
    let xml_dir = root.join("xml");
    fs::create_dir_all(&xml_dir).unwrap();

    let mut body = String::new();
    for (title, app_path) in games {
        body.push_str(&format!(
            "<Game><Title>{title}</Title><ApplicationPath>{app_path}</ApplicationPath><Genre>Action</Genre></Game>\n"
        ));
    }
    fs::write(
        xml_dir.join(catalog_file),
        format!("<?xml version=\"1.0\"?>\n<LaunchBox>\n{body}</LaunchBox>\n"),
    )
    .unwrap();
    root
}

fn add_dos_game(root: &Path, folder: &str) -> PathBuf {
    let path = root.join("eXo").join("eXoDOS").join("!dos").join(folder);
    fs::create_dir_all(&path).unwrap();
    path
}

#[test]
fn one_resolvable_and_one_missing_game() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_collection(
        dir.path(),
        "eXoDOS",
        "MS-DOS.xml",
        &[
            ("Doom", r"eXo\eXoDOS\!dos\doom\doom.bat"),
            ("Vapor", r"eXo\eXoDOS\!dos\vapor\vapor.bat"),
        ],
    );
    let doom = add_dos_game(&root, "doom");

    let location = validate_selected_folder(&root).unwrap();
    assert_eq!(location.kind, CollectionKind::Dos);

    let load = load_collection(&location).unwrap();
    assert_eq!(load.games.len(), 1);
    assert_eq!(load.games[0].title, "Doom");
    assert_eq!(load.games[0].genre, "Action");
    assert_eq!(load.games[0].folder_path, doom);
    assert_eq!(load.dropped, 1);
}

#[test]
fn missing_catalog_has_descriptive_error() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("eXoDOS");
    fs::create_dir_all(root.join("xml")).unwrap();

    let err = load_collection(&CollectionLocation::new(&root)).unwrap_err();
    assert!(matches!(err, LauncherError::CatalogMissing { .. }));
    assert_eq!(
        err.to_string(),
        "MS-DOS.xml not found. Run setup.bat to extract metadata."
    );
}

#[test]
fn win3x_prefers_its_own_catalog_then_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_collection(dir.path(), "eXoWin3x", "MS-DOS.xml", &[]);
    let location = CollectionLocation::new(&root);
    assert_eq!(location.kind, CollectionKind::Win3x);
    assert_eq!(catalog_path(&location).unwrap(), root.join("xml").join("MS-DOS.xml"));

    fs::write(root.join("xml").join("Windows 3x.xml"), "<LaunchBox/>").unwrap();
    assert_eq!(
        catalog_path(&location).unwrap(),
        root.join("xml").join("Windows 3x.xml")
    );
}

#[test]
fn win3x_missing_catalog_names_dos_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("eXoWin3x");
    fs::create_dir_all(root.join("xml")).unwrap();
    let err = load_collection(&CollectionLocation::new(&root)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "MS-DOS.xml not found. Run setup.bat to extract metadata."
    );
}

#[test]
fn session_keeps_previous_list_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let good = make_collection(
        dir.path(),
        "eXoDOS",
        "MS-DOS.xml",
        &[("Keen", r"eXo\eXoDOS\!dos\keen\keen.bat")],
    );
    let keen = add_dos_game(&good, "keen");

    let broken = dir.path().join("broken");
    fs::create_dir_all(broken.join("xml")).unwrap();
    fs::write(broken.join("xml").join("MS-DOS.xml"), "<LaunchBox><Game>").unwrap();

    let mut session = CollectionSession::new();
    assert_eq!(session.load(CollectionLocation::new(&good)).unwrap().len(), 1);

    assert!(session.load(CollectionLocation::new(&broken)).is_err());
    assert_eq!(session.games().len(), 1);
    assert_eq!(session.location().unwrap().root_path, good);
    assert!(session.find(&keen).is_some());
}

#[test]
fn session_refresh_picks_up_new_folders() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_collection(
        dir.path(),
        "eXoDOS",
        "MS-DOS.xml",
        &[
            ("A", r"eXo\eXoDOS\!dos\a\a.bat"),
            ("B", r"eXo\eXoDOS\!dos\b\b.bat"),
        ],
    );
    add_dos_game(&root, "a");

    let mut session = CollectionSession::new();
    assert!(session.refresh().unwrap().is_empty());
    session.load(CollectionLocation::new(&root)).unwrap();
    assert_eq!(session.games().len(), 1);
    assert_eq!(session.dropped(), 1);

    add_dos_game(&root, "b");
    assert_eq!(session.refresh().unwrap().len(), 2);
    assert_eq!(session.dropped(), 0);
}

#[test]
fn resolved_game_can_be_prepared_and_listed() {
    let dir = tempfile::tempdir().unwrap();
    let root = make_collection(
        dir.path(),
        "eXoDOS",
        "MS-DOS.xml",
        &[("Keen", r"eXo\eXoDOS\!dos\keen\keen.bat")],
    );
    let folder = add_dos_game(&root, "keen");
    fs::write(folder.join("dosbox.conf"), "[cpu]\ncycles=auto\n").unwrap();
    fs::write(folder.join("dosbox.bat"), "@echo off\nmount c .\nKEEN1.EXE\n").unwrap();
    fs::write(folder.join("KEEN1.EXE"), b"MZ").unwrap();

    let load = load_collection(&CollectionLocation::new(&root)).unwrap();
    let game = &load.games[0];

    let launch = prepare_launch(&game.folder_path).unwrap();
    assert_eq!(launch.start_command, "KEEN1.EXE");
    assert_eq!(launch.dosbox_conf.get("cpu", "cycles"), Some("auto"));
    assert_eq!(launch.game_path, folder);

    let files = list_game_files(&game.folder_path).unwrap();
    assert_eq!(files.len(), 3);
}
