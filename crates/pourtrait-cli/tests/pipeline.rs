//! Integration tests for the pipeline module.

use std::fs;

use pourtrait_cli::pipeline::{load_catalog_set, read_lines, write_output};

#[test]
fn test_read_lines_trims_and_drops_blanks() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("drinks.txt");
    fs::write(&path, "  Guinness Draught  \n\n\tpacifico\n   \nTanqueray\n").expect("write lines");

    let lines = read_lines(&path).expect("read lines");

    assert_eq!(lines, vec!["Guinness Draught", "pacifico", "Tanqueray"]);
}

#[test]
fn test_read_lines_missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.txt");

    let error = read_lines(&path).expect_err("missing file should fail");

    assert!(error.to_string().contains("absent.txt"));
}

#[test]
fn test_write_output_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out").join("poster.txt");

    write_output("DRINKS\n", Some(&path)).expect("write output");

    assert_eq!(fs::read_to_string(&path).expect("read back"), "DRINKS\n");
}

#[test]
fn test_load_catalog_set_reads_all_three_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("beers.csv"),
        "name,brewery\nGuinness Draught,Guinness\n",
    )
    .expect("write beers");
    fs::write(dir.path().join("wines.csv"), "name\nPenfolds Bin 28\n").expect("write wines");
    fs::write(
        dir.path().join("spirits.csv"),
        "name,brand\nTanqueray,Tanqueray\n",
    )
    .expect("write spirits");

    let catalogs = load_catalog_set(Some(dir.path())).expect("load catalogs");

    assert_eq!(catalogs.beers.len(), 1);
    assert_eq!(catalogs.wines.len(), 1);
    assert_eq!(catalogs.spirits.len(), 1);
}

#[test]
fn test_load_catalog_set_missing_dir_names_the_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nowhere");

    let error = load_catalog_set(Some(&missing)).expect_err("missing catalogs should fail");

    assert!(error.to_string().contains("nowhere"));
}
