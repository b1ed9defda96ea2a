//! Catalog loading tests against real files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use pourtrait_catalog::{CatalogError, load_beers, load_catalogs, load_spirits, load_wines};

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_beers_with_one_based_ids_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "beers.csv",
        "name,brewery,style,abv,country,mid_strength,notes\n\
         Guinness Draught,Guinness,Stout,4.2,Ireland,true,\"Dry stout, nitro pour\"\n\
         Pacífico,Grupo Modelo,Lager,4.5,Mexico,false,\n\
         Mystery Keg,,,,,,\n",
    );

    let beers = load_beers(&path).unwrap();
    assert_eq!(beers.len(), 3);
    assert_eq!(beers[0].id, 1);
    assert_eq!(beers[0].name, "Guinness Draught");
    assert_eq!(beers[0].abv, Some(4.2));
    assert!(beers[0].mid_strength);
    assert_eq!(beers[0].notes.as_deref(), Some("Dry stout, nitro pour"));

    assert_eq!(beers[1].id, 2);
    assert_eq!(beers[1].name, "Pacífico");
    assert!(!beers[1].mid_strength);

    assert_eq!(beers[2].id, 3);
    assert_eq!(beers[2].brewery, None);
    assert_eq!(beers[2].abv, None);
}

#[test]
fn blank_optional_cells_read_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "wines.csv",
        "name,producer,varietal,region,country,abv,sweetness,vintage,notes\n\
         Penfolds Bin 28,Penfolds,Shiraz,South Australia,Australia,14.5,dry,2019,\n\
         House Red,,,,,n/a,,,\n",
    );

    let wines = load_wines(&path).unwrap();
    assert_eq!(wines[0].vintage, Some(2019));
    assert_eq!(wines[0].sweetness.as_deref(), Some("dry"));
    // Unparseable abv reads as missing, same as a blank cell.
    assert_eq!(wines[1].abv, None);
    assert_eq!(wines[1].vintage, None);
    assert_eq!(wines[1].producer, None);
}

#[test]
fn header_may_carry_a_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "spirits.csv",
        "\u{feff}name,brand,category,subtype,abv,country,flavor_notes,aging\n\
         Tanqueray,Tanqueray,Gin,London Dry,43.1,UK,,\n",
    );

    let spirits = load_spirits(&path).unwrap();
    assert_eq!(spirits.len(), 1);
    assert_eq!(spirits[0].name, "Tanqueray");
    assert_eq!(spirits[0].category.as_deref(), Some("Gin"));
}

#[test]
fn missing_name_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "beers.csv",
        "title,brewery\nGuinness Draught,Guinness\n",
    );

    let err = load_beers(&path).unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumn { ref column, .. } if column == "name"));
}

#[test]
fn blank_name_cell_is_an_error_naming_the_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "beers.csv",
        "name,brewery,style,abv,country,mid_strength,notes\n\
         Guinness Draught,Guinness,Stout,4.2,Ireland,true,\n\
         ,Orphan Brewing,,,,,\n",
    );

    let err = load_beers(&path).unwrap_err();
    assert!(matches!(err, CatalogError::MissingName { row: 2, .. }));
}

#[test]
fn load_catalogs_requires_all_three_files() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "beers.csv",
        "name,brewery,style,abv,country,mid_strength,notes\n\
         Guinness Draught,Guinness,Stout,4.2,Ireland,true,\n",
    );
    write_file(
        dir.path(),
        "wines.csv",
        "name,producer,varietal,region,country,abv,sweetness,vintage,notes\n\
         Penfolds Bin 28,Penfolds,Shiraz,South Australia,Australia,14.5,dry,2019,\n",
    );

    let err = load_catalogs(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));

    write_file(
        dir.path(),
        "spirits.csv",
        "name,brand,category,subtype,abv,country,flavor_notes,aging\n\
         Tanqueray,Tanqueray,Gin,London Dry,43.1,UK,,\n",
    );

    let catalogs = load_catalogs(dir.path()).unwrap();
    assert_eq!(catalogs.beers.len(), 1);
    assert_eq!(catalogs.wines.len(), 1);
    assert_eq!(catalogs.spirits.len(), 1);
    assert_eq!(catalogs.len(), 3);
}
