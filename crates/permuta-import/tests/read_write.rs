//! Files written by the exporters read back through the importers.
#![allow(clippy::expect_used)]

use std::io::Cursor;

use permuta_core::{ExchangeEngine, Participant, RouteFilter};
use permuta_import::{
    EXPORT_SHEET, ImportError, load_participants, read_xlsx, write_path, write_xlsx,
};

fn sample() -> Vec<Participant> {
    vec![
        Participant::new("Ana", "São Paulo", &["Goiânia", "TJMG"], Some("Final"))
            .expect("valid"),
        Participant::new("Bia", "Goiânia", &["sao paulo"], None).expect("valid"),
        Participant::new("Caio", "TJMG", &[] as &[&str], Some("Inicial")).expect("valid"),
    ]
}

#[test]
fn xlsx_export_reads_back_identically() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("participantes.xlsx");
    write_path(&path, &sample()).expect("write");
    let loaded = load_participants(&path).expect("read");
    assert_eq!(loaded, sample());
}

#[test]
fn csv_export_reads_back_identically() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("participantes.csv");
    write_path(&path, &sample()).expect("write");
    let loaded = load_participants(&path).expect("read");
    assert_eq!(loaded, sample());

    let engine = ExchangeEngine::new(loaded);
    assert_eq!(engine.direct_swaps(&RouteFilter::none()).len(), 1);
}

#[test]
fn sheet_can_be_selected_by_name() {
    let mut bytes = Vec::new();
    write_xlsx(&mut bytes, &sample()).expect("write");

    let records = read_xlsx(Cursor::new(&bytes), Some(EXPORT_SHEET)).expect("read");
    assert_eq!(records.len(), 3);

    let err = read_xlsx(Cursor::new(&bytes), Some("Plan2")).expect_err("no such sheet");
    assert!(matches!(err, ImportError::MissingSheet { ref sheet } if sheet == "Plan2"));
}

#[test]
fn garbage_is_not_a_workbook() {
    let err = read_xlsx(Cursor::new(b"not a zip".to_vec()), None).expect_err("garbage");
    assert!(matches!(err, ImportError::WorkbookRead { .. }));
}

#[test]
fn unsupported_extension_is_rejected_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("participantes.ods");
    let err = write_path(&path, &sample()).expect_err("ods");
    assert!(matches!(err, ImportError::UnsupportedExtension { .. }));
    assert!(!path.exists());
}
