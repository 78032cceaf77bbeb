use std::fs;

use lupe_backend::{verify_outputs, STEM_NAMES};
use tempfile::tempdir;

#[test]
fn verify_outputs_returns_four_paths_in_fixed_order() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("song.mp3");
    let out = tmp.path().join("out");

    let stem_dir = out.join("song");
    fs::create_dir_all(&stem_dir).unwrap();
    for name in STEM_NAMES {
        fs::write(stem_dir.join(format!("{name}.wav")), b"riff").unwrap();
    }

    let paths = verify_outputs(&input, &out).unwrap();

    assert_eq!(paths.len(), 4);
    for (path, name) in paths.iter().zip(STEM_NAMES) {
        assert_eq!(path.file_stem().unwrap(), name);
        assert!(path.is_file());
    }
}

#[test]
fn verify_outputs_names_the_missing_file() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("song.mp3");
    let out = tmp.path().join("out");

    let stem_dir = out.join("song");
    fs::create_dir_all(&stem_dir).unwrap();
    for name in ["vocals", "drums", "other"] {
        fs::write(stem_dir.join(format!("{name}.wav")), b"riff").unwrap();
    }

    let err = verify_outputs(&input, &out).unwrap_err();
    assert!(
        err.to_string().contains("bass.wav"),
        "error should name the missing stem: {err}"
    );
}

#[test]
fn verify_outputs_fails_when_tool_wrote_nothing() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("song.mp3");
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();

    assert!(verify_outputs(&input, &out).is_err());
}
