use std::io::Write;
use steno_drill::dictionary::StenoDictionary;
use steno_drill::stroke::Outline;
use steno_drill::wordmap::WordMap;
use tempfile::NamedTempFile;

const DICTIONARY: &str = r#"{
    "KAT": "cat",
    "KA": "ca",
    "KA/T": "cat",
    "KAT/-S": "cats",
    "TKPWAOD": "good",
    "TKPWAOD/PWAOEU": "goodbye",
    "": "ignored"
}"#;

fn dictionary() -> StenoDictionary {
    StenoDictionary::from_json_str(DICTIONARY).expect("Dictionary should parse")
}

#[test]
fn test_dictionary_lookup() {
    let dict = dictionary();
    assert_eq!(dict.len(), 6, "Empty outline keys are dropped");
    assert_eq!(dict.lookup(&Outline::parse("KAT/-S")), Some("cats"));
    assert_eq!(dict.lookup(&Outline::parse("KAT/KAT")), None);
}

#[test]
fn test_dictionary_reverse_lookup_is_sorted() {
    let dict = dictionary();
    let outlines: Vec<String> = dict
        .reverse_lookup("cat")
        .iter()
        .map(|o| o.to_string())
        .collect();
    assert_eq!(outlines, vec!["KA/T", "KAT"]);
    assert!(dict.reverse_lookup("mouse").is_empty());
}

#[test]
fn test_generate_collects_prefix_translations() {
    let map = WordMap::generate(&dictionary(), &["cat", "cats", "goodbye"]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.prefixes("cat").unwrap(), &["ca", "cat"]);
    assert_eq!(map.prefixes("cats").unwrap(), &["cat", "cats"]);
    assert_eq!(map.prefixes("goodbye").unwrap(), &["good", "goodbye"]);
}

#[test]
fn test_generate_unknown_and_duplicate_words() {
    let words = vec!["mouse".to_string(), "cat".to_string(), "cat".to_string()];
    let map = WordMap::generate(&dictionary(), &words);
    assert_eq!(map.len(), 2);
    assert!(map.contains("mouse"));
    assert!(map.prefixes("mouse").unwrap().is_empty());
    assert!(!map.contains("dog"));
    assert_eq!(map.prefixes("dog"), None);
}

#[test]
fn test_json_output_has_sorted_keys() {
    let map = WordMap::generate(&dictionary(), &["goodbye", "cats", "cat"]);
    let json = map.to_json_string().unwrap();
    let cat = json.find("\"cat\":").unwrap();
    let cats = json.find("\"cats\":").unwrap();
    let goodbye = json.find("\"goodbye\":").unwrap();
    assert!(cat < cats && cats < goodbye, "Keys out of order:\n{}", json);

    let reloaded = WordMap::from_json_str(&json).unwrap();
    assert_eq!(reloaded, map);
}

#[test]
fn test_word_map_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"すし": ["す", "すし"]}}"#).unwrap();

    let map = WordMap::from_reader(std::fs::File::open(file.path()).unwrap()).unwrap();
    assert_eq!(map.prefixes("すし").unwrap().len(), 2);
}

#[test]
fn test_bad_word_map_json() {
    assert!(WordMap::from_json_str(r#"{"cat": "ca"}"#).is_err());
}
