//! Integration tests for djread
//!
//! These tests write Rekordbox exports to disk and read them back through the
//! public file drivers and the CLI pipeline.

use djread::config::Settings;
use djread::export::read_json;
use djread::import::rekordbox::{parse_collection, parse_playlists, parse_xml_file};
use djread::{pipeline, DjreadError, Library};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a collection entry with every required attribute
fn track_xml(id: u32, name: &str, marks: &str) -> String {
    format!(
        r#"<TRACK TrackID="{id}" Name="{name}" Artist="Artist {id}" Album="Album" Genre="Techno"
  Kind="MP3 File" Size="{size}" TotalTime="{time}" Year="2021" AverageBpm="{bpm:.2}"
  DateAdded="2022-04-03" BitRate="320" SampleRate="44100" Comments="" PlayCount="{id}"
  Rating="0" Tonality="Am" Label="" Location="file://localhost/Music/{name}.mp3">{marks}</TRACK>"#,
        size = id * 1000,
        time = 300 + id,
        bpm = 120.0 + id as f64,
    )
}

/// Write a complete export with three tracks and a two-level playlist tree
fn write_export(dir: &Path) -> PathBuf {
    let tracks = [
        track_xml(
            1,
            "Opener",
            r#"<POSITION_MARK Name="A" Type="0" Start="0.100" Num="0" Red="40" Green="226" Blue="20"/>
               <POSITION_MARK Name="Loop" Type="4" Start="32.000" Num="1"/>
               <POSITION_MARK Type="0" Start="64.000" Num="-1"/>"#,
        ),
        track_xml(2, "Peak", ""),
        track_xml(3, "Closer", r#"<POSITION_MARK/>"#),
    ]
    .join("\n");

    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<DJ_PLAYLISTS Version="1.0.0">
  <PRODUCT Name="rekordbox" Version="6.6.4" Company="AlphaTheta"/>
  <COLLECTION Entries="3">
{tracks}
  </COLLECTION>
  <PLAYLISTS>
    <NODE Type="0" Name="ROOT" Count="3">
      <NODE Type="0" Name="Gigs" Count="1">
        <NODE Name="Club" Type="1" KeyType="0" Entries="2">
          <TRACK Key="2"/>
          <TRACK Key="1"/>
        </NODE>
      </NODE>
      <NODE Name="All" Type="1" KeyType="0" Entries="5">
        <TRACK Key="1"/>
        <TRACK Key="2"/>
        <TRACK Key="3"/>
      </NODE>
      <NODE Type="0" Name="Archive" Count="0"/>
    </NODE>
  </PLAYLISTS>
</DJ_PLAYLISTS>
"#
    );

    let path = dir.join("rekordbox.xml");
    fs::write(&path, xml).expect("Failed to write export");
    path
}

#[test]
fn test_parse_xml_file_reads_collection() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_export(dir.path());

    let tracks = parse_xml_file(&path).expect("Collection should parse");

    assert_eq!(tracks.len(), 3);
    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Opener", "Peak", "Closer"]);

    let opener = &tracks[0];
    assert_eq!(opener.track_id, 1);
    assert_eq!(opener.size, 1000);
    assert_eq!(opener.total_time, 301);
    assert_eq!(opener.average_bpm, 121.0);
    assert_eq!(opener.path(), PathBuf::from("/Music/Opener.mp3"));
    assert_eq!(opener.cue_points.len(), 3);
    assert_eq!(opener.cue_points[0].color.to_hex(), "#28E214");
    assert_eq!(opener.cue_points[1].name, "Loop");
    assert_eq!(opener.cue_points[2].name, "");
    assert_eq!(opener.memory_cues().count(), 1);

    assert!(tracks[1].cue_points.is_empty());
    assert_eq!(tracks[2].cue_points[0], djread::CuePoint::default());
}

#[test]
fn test_playlists_from_parsed_document() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_export(dir.path());

    let text = fs::read_to_string(&path).unwrap();
    let doc = roxmltree::Document::parse(&text).unwrap();
    let roots = parse_playlists(doc.root_element()).expect("Playlists should parse");

    assert_eq!(roots.len(), 1);
    let root = &roots[0];
    assert_eq!(root.name, "ROOT");
    assert_eq!(root.folders.len(), 2);
    assert_eq!(root.folders[0].name, "Gigs");
    assert_eq!(root.folders[1].name, "Archive");
    assert_eq!(root.playlists.len(), 1);

    // Declared Entries is kept as written, not the key count
    let all = &root.playlists[0];
    assert_eq!(all.entries, 5);
    assert_eq!(all.tracks, vec!["1", "2", "3"]);

    let club = &root.folders[0].playlists[0];
    assert_eq!(club.tracks, vec!["2", "1"]);

    let paths: Vec<String> = root.walk_playlists().into_iter().map(|(p, _)| p).collect();
    assert_eq!(paths, vec!["All".to_string(), "Gigs/Club".to_string()]);
}

#[test]
fn test_same_element_parsed_twice_is_equal() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_export(dir.path());
    let text = fs::read_to_string(&path).unwrap();
    let doc = roxmltree::Document::parse(&text).unwrap();

    let first = parse_collection(doc.root_element()).unwrap();
    let second = parse_collection(doc.root_element()).unwrap();
    assert_eq!(first, second);

    let first = parse_playlists(doc.root_element()).unwrap();
    let second = parse_playlists(doc.root_element()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_document_without_sections() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("empty.xml");
    fs::write(&path, r#"<DJ_PLAYLISTS Version="1.0.0"><PRODUCT Name="rekordbox"/></DJ_PLAYLISTS>"#).unwrap();

    assert!(parse_xml_file(&path).unwrap().is_empty());
    let library = Library::load(&path).unwrap();
    assert!(library.tracks.is_empty());
    assert!(library.playlists.is_empty());
}

#[test]
fn test_missing_required_attribute_aborts() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xml");
    let entry = track_xml(9, "Nameless", "").replace(r#"Name="Nameless" "#, "");
    fs::write(
        &path,
        format!("<DJ_PLAYLISTS><COLLECTION>{}{}</COLLECTION></DJ_PLAYLISTS>", track_xml(1, "Ok", ""), entry),
    )
    .unwrap();

    match parse_xml_file(&path) {
        Err(DjreadError::MissingAttribute { element, attribute }) => {
            assert_eq!(element, "TRACK");
            assert_eq!(attribute, "Name");
        }
        other => panic!("Expected MissingAttribute, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_xml_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("truncated.xml");
    fs::write(&path, "<DJ_PLAYLISTS><COLLECTION Entries=\"1\">").unwrap();

    let err = parse_xml_file(&path).unwrap_err();
    assert!(matches!(err, DjreadError::Xml { .. }));
    assert!(err.is_document_error());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = parse_xml_file(dir.path().join("nope.xml")).unwrap_err();
    assert!(matches!(err, DjreadError::FileNotFound(_)));
}

#[test]
fn test_pipeline_writes_json() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_export(dir.path());
    let json_path = dir.path().join("library.json");

    let settings = Settings {
        input: input.clone(),
        show_playlists: false,
        json_output: Some(json_path.clone()),
    };
    let result = pipeline::run(&settings).expect("Pipeline should succeed");

    assert_eq!(result.tracks, 3);
    assert_eq!(result.cue_points, 4);
    assert_eq!(
        result.cue_kinds,
        vec![(djread::types::CueKind::Cue, 3), (djread::types::CueKind::Loop, 1)]
    );
    assert_eq!(result.playlists, 2);
    assert!(result.json_written);

    let json = read_json(&json_path).expect("JSON should read back");
    assert_eq!(json.metadata.track_count, 3);
    assert_eq!(json.into_library(), Library::load(&input).unwrap());
}

#[test]
fn test_pipeline_without_json() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings {
        input: write_export(dir.path()),
        show_playlists: true,
        json_output: None,
    };

    let result = pipeline::run(&settings).expect("Pipeline should succeed");
    assert!(!result.json_written);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
