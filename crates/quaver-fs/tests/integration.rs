use std::fs;
use std::thread;

use tempfile::tempdir;

#[test]
fn concurrent_relocations_never_collide() {
    let staging = tempdir().unwrap();
    let dest = tempdir().unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let source = staging.path().join(format!("incoming-{i}"));
        fs::write(&source, format!("payload-{i}")).unwrap();
        let dest_dir = dest.path().to_path_buf();
        handles.push(thread::spawn(move || {
            quaver_fs::relocate_into(&source, &dest_dir, "mp4").unwrap()
        }));
    }

    let mut paths: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 8);

    let entries = fs::read_dir(dest.path()).unwrap().count();
    assert_eq!(entries, 8);
}

#[test]
fn relocated_file_is_fully_visible_or_absent() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("incoming");
    let payload = vec![0xABu8; 512 * 1024];
    fs::write(&source, &payload).unwrap();

    let dest = quaver_fs::relocate_into(&source, dir.path(), "mp4").unwrap();

    // A published destination always carries the full payload.
    assert_eq!(fs::read(&dest).unwrap(), payload);
    assert!(!source.exists());
}
