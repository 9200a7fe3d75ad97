//! End-to-end tests for label preparation over a small on-disk corpus.

use std::fs;
use std::path::{Path, PathBuf};

use fisher_labels::corpus::Speaker;
use fisher_labels::discovery::find_label_files;
use fisher_labels::global::mapping_file;
use fisher_labels::labels::{label_path, npy};
use fisher_labels::vocab::Vocabulary;
use fisher_labels::{read_transcripts, LabelError};
use tempfile::TempDir;

const SESSION_1: &str = "\
# fe_03_00001.sph

0.36 2.37 A: Hello there.
2.50 4.10 B: [laughter] hi
4.20 5.00 A: well, (( uh )) yes?
5.10 6.00 A: [pause]
6.20 8.00 B: he said <german ja wohl>
8.10 9.00 A: rock & roll
";

const SESSION_2: &str = "\
# fe_03_00002.sph
1.235 3.00 A: [noise] okay
3.10 4.00 B: it's fine
";

fn write_corpus(root: &Path) -> Vec<PathBuf> {
    let trans = root.join("corpus/trans/000");
    fs::create_dir_all(&trans).unwrap();
    fs::write(trans.join("fe_03_00001.txt"), SESSION_1).unwrap();
    fs::write(trans.join("fe_03_00002.txt"), SESSION_2).unwrap();
    find_label_files(&root.join("corpus"), "txt").unwrap()
}

#[test]
fn test_reads_only_requested_speaker() {
    let dir = TempDir::new().unwrap();
    let paths = write_corpus(dir.path());
    let mapping = mapping_file(dir.path());

    let run = read_transcripts(&paths, Speaker::A, &mapping, None, None).unwrap();

    let speakers: Vec<&str> = run.table.keys().map(String::as_str).collect();
    assert_eq!(speakers, vec!["fe_03_00001A", "fe_03_00002A"]);

    let session_1 = &run.table["fe_03_00001A"];
    let keys: Vec<&str> = session_1.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["0000", "0001", "0002"]);
    assert_eq!(session_1["0000"].transcript, "_hello_there_");
    assert_eq!(session_1["0001"].transcript, "_well_uh_yes_");
    assert_eq!(session_1["0002"].transcript, "_rock_and_roll_");
    assert_eq!(session_1["0002"].start_frame, 810);
    assert_eq!(session_1["0002"].end_frame, 900);

    let session_2 = &run.table["fe_03_00002A"];
    assert_eq!(session_2.len(), 1);
    assert_eq!(session_2["0000"].transcript, "_N_okay_");
    assert_eq!(session_2["0000"].start_frame, 123);
    assert_eq!(session_2["0000"].end_frame, 300);

    assert_eq!(run.summary.utterances, 4);
    assert_eq!(run.summary.labels_written, 0);
}

#[test]
fn test_every_transcript_is_bounded_by_silence() {
    let dir = TempDir::new().unwrap();
    let paths = write_corpus(dir.path());

    for speaker in [Speaker::A, Speaker::B] {
        let run = read_transcripts(&paths, speaker, &mapping_file(dir.path()), None, None).unwrap();
        for utterances in run.table.values() {
            for utterance in utterances.values() {
                assert!(utterance.transcript.starts_with('_'));
                assert!(utterance.transcript.ends_with('_'));
                assert!(!utterance.transcript.contains("__"));
                assert!(utterance.transcript.len() > 2);
            }
        }
    }
}

#[test]
fn test_mapping_file_is_sorted_and_has_reserved_chars() {
    let dir = TempDir::new().unwrap();
    let paths = write_corpus(dir.path());
    let mapping = mapping_file(dir.path());

    read_transcripts(&paths, Speaker::B, &mapping, None, None).unwrap();

    let content = fs::read_to_string(&mapping).unwrap();
    let entries: Vec<(char, usize)> = content
        .lines()
        .map(|line| {
            let (c, i) = line.split_once("  ").unwrap();
            (c.chars().next().unwrap(), i.parse().unwrap())
        })
        .collect();

    // Speaker B says "[laughter] hi" and "it's fine"
    let chars: String = entries.iter().map(|(c, _)| *c).collect();
    assert_eq!(chars, "'59LN_efhilnst");
    for (expected, (_, index)) in entries.iter().enumerate() {
        assert_eq!(*index, expected);
    }
}

#[test]
fn test_mapping_file_is_regenerated_each_run() {
    let dir = TempDir::new().unwrap();
    let paths = write_corpus(dir.path());
    let mapping = mapping_file(dir.path());

    read_transcripts(&paths, Speaker::A, &mapping, None, None).unwrap();
    let first = fs::read_to_string(&mapping).unwrap();

    read_transcripts(&paths[1..], Speaker::B, &mapping, None, None).unwrap();
    let second = fs::read_to_string(&mapping).unwrap();

    assert_ne!(first, second);
    assert!(!second.contains("r  "));
}

#[test]
fn test_saves_one_label_file_per_utterance() {
    let dir = TempDir::new().unwrap();
    let paths = write_corpus(dir.path());
    let mapping = mapping_file(dir.path());
    let save_dir = dir.path().join("labels/train");

    let run = read_transcripts(&paths, Speaker::A, &mapping, Some(&save_dir), None).unwrap();
    assert_eq!(run.summary.labels_written, 4);

    let vocab = Vocabulary::load(&mapping).unwrap();
    for (speaker_name, utterances) in &run.table {
        for (utt_index, utterance) in utterances {
            let path = label_path(&save_dir, speaker_name, utt_index);
            assert!(path.exists(), "missing {:?}", path);

            let labels = npy::read_int64(&path).unwrap();
            assert_eq!(labels.len(), utterance.transcript.chars().count());
            assert_eq!(vocab.decode(&labels).unwrap(), utterance.transcript);
        }
    }

    assert!(save_dir.join("fe_03_00002A/fe_03_00002A_0000.npy").exists());
    assert!(!save_dir.join("fe_03_00002A/fe_03_00002A_0001.npy").exists());
}

#[test]
fn test_missing_label_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let paths = vec![dir.path().join("fe_03_99999.txt")];

    let err = read_transcripts(&paths, Speaker::A, &mapping_file(dir.path()), None, None).unwrap_err();
    assert!(matches!(err, LabelError::MissingFile { .. }));
}

#[test]
fn test_malformed_time_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fe_03_00003.txt");
    fs::write(&path, "0.00 1.00 A: fine\none 2.00 A: broken\n").unwrap();

    let mapping = mapping_file(dir.path());
    let err = read_transcripts(&[path], Speaker::A, &mapping, None, None).unwrap_err();
    match err {
        LabelError::MalformedLine { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!mapping.exists());
}
