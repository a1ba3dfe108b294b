//! Gist and gist file models.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::user::User;

/// A gist as returned by either API base.
///
/// Two gists are equal iff their identifiers match; every other field is
/// ignored by equality and hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gist {
    pub id: String,
    pub url: Option<String>,
    pub forks_url: Option<String>,
    pub commits_url: Option<String>,
    pub node_id: Option<String>,
    pub git_pull_url: Option<String>,
    pub git_push_url: Option<String>,
    pub html_url: Option<String>,
    #[serde(default)]
    pub files: GistFiles,
    pub public: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub comments: Option<u64>,
    pub comments_url: Option<String>,
    pub owner: Option<User>,
    pub truncated: Option<bool>,
}

impl PartialEq for Gist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gist {}

impl Hash for Gist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A single file inside a gist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GistFile {
    pub filename: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub language: Option<String>,
    pub raw_url: Option<String>,
    pub size: Option<u64>,
    /// Set when the server truncated `content`.
    pub truncated: Option<bool>,
    pub content: Option<String>,
}

/// Files of a gist, keyed by file name and iterated in ascending name order.
///
/// The wire format is an unordered JSON object, so entries are sorted by key
/// (lexicographic, case-sensitive) right after decode. Iteration order is a
/// pure function of the key set, never of wire order, which keeps file
/// listings reproducible across fetches and across devices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GistFiles {
    entries: Vec<(String, GistFile)>,
}

impl GistFiles {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GistFile> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, file)| file)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GistFile)> {
        self.entries.iter().map(|(key, file)| (key.as_str(), file))
    }

    /// File names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// The first file name in sorted order, used as a gist's display title.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.entries.first().map(|(key, _)| key.as_str())
    }

    fn from_unordered(raw: HashMap<String, GistFile>) -> Self {
        raw.into_iter().collect()
    }
}

impl FromIterator<(String, GistFile)> for GistFiles {
    fn from_iter<I: IntoIterator<Item = (String, GistFile)>>(iter: I) -> Self {
        let mut entries: Vec<(String, GistFile)> = iter
            .into_iter()
            .map(|(name, mut file)| {
                // Reconcile each entry's own filename with its map key.
                if file.filename.is_none() {
                    file.filename = Some(name.clone());
                }
                (name, file)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }
}

impl<'de> Deserialize<'de> for GistFiles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, GistFile>::deserialize(deserializer)?;
        Ok(Self::from_unordered(raw))
    }
}

impl Serialize for GistFiles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(key, file)| (key, file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(gist: &Gist) -> u64 {
        let mut hasher = DefaultHasher::new();
        gist.hash(&mut hasher);
        hasher.finish()
    }

    fn gist_json(id: &str, files: &str) -> String {
        format!(r#"{{"id": "{id}", "files": {files}}}"#)
    }

    #[test]
    fn files_iterate_in_ascending_name_order_regardless_of_wire_order() {
        let forward: Gist = serde_json::from_str(&gist_json(
            "xyz",
            r#"{"a.txt": {"content": "a"}, "b.txt": {"content": "b"}}"#,
        ))
        .unwrap();
        let reversed: Gist = serde_json::from_str(&gist_json(
            "xyz",
            r#"{"b.txt": {"content": "b"}, "a.txt": {"content": "a"}}"#,
        ))
        .unwrap();

        let names: Vec<&str> = reversed.files.names().collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(forward.files, reversed.files);
    }

    #[test]
    fn file_ordering_is_case_sensitive_lexicographic() {
        let gist: Gist = serde_json::from_str(&gist_json(
            "xyz",
            r#"{"b.txt": {}, "B.txt": {}, "a.txt": {}}"#,
        ))
        .unwrap();

        // Uppercase sorts before lowercase in byte order.
        let names: Vec<&str> = gist.files.names().collect();
        assert_eq!(names, vec!["B.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn empty_files_object_decodes_to_empty_map() {
        let gist: Gist = serde_json::from_str(&gist_json("xyz", "{}")).unwrap();
        assert!(gist.files.is_empty());
        assert_eq!(gist.files.first_name(), None);
    }

    #[test]
    fn missing_files_field_decodes_to_empty_map() {
        let gist: Gist = serde_json::from_str(r#"{"id": "xyz"}"#).unwrap();
        assert!(gist.files.is_empty());
    }

    #[test]
    fn entry_filename_is_reconciled_with_its_map_key() {
        let gist: Gist = serde_json::from_str(&gist_json(
            "xyz",
            r#"{"named.txt": {"filename": "named.txt", "content": "x"}, "bare.txt": {"content": "y"}}"#,
        ))
        .unwrap();

        let bare = gist.files.get("bare.txt").expect("bare entry");
        assert_eq!(bare.filename.as_deref(), Some("bare.txt"));
        let named = gist.files.get("named.txt").expect("named entry");
        assert_eq!(named.filename.as_deref(), Some("named.txt"));
    }

    #[test]
    fn first_name_is_the_smallest_key() {
        let files: GistFiles = [
            ("z.md".to_string(), GistFile::default()),
            ("a.md".to_string(), GistFile::default()),
        ]
        .into_iter()
        .collect();
        assert_eq!(files.first_name(), Some("a.md"));
    }

    #[test]
    fn gist_equality_and_hash_are_identifier_only() {
        let left: Gist = serde_json::from_str(
            r#"{"id": "abc123", "description": "one", "public": true}"#,
        )
        .unwrap();
        let right: Gist = serde_json::from_str(
            r#"{"id": "abc123", "description": "two", "public": false}"#,
        )
        .unwrap();
        let other: Gist = serde_json::from_str(r#"{"id": "def456"}"#).unwrap();

        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
        assert_ne!(left, other);
    }

    #[test]
    fn gist_decodes_github_shaped_payload() {
        let json = r#"{
            "id": "abc123",
            "node_id": "G_kwDO",
            "html_url": "https://gist.github.com/abc123",
            "public": true,
            "created_at": "2022-10-12T08:00:00Z",
            "updated_at": "2022-10-13T09:30:00Z",
            "description": "scratch",
            "comments": 2,
            "truncated": false,
            "owner": {"id": 1, "login": "octocat", "avatar_url": "https://example.com/a.png"},
            "files": {
                "main.rs": {
                    "filename": "main.rs",
                    "type": "text/plain",
                    "language": "Rust",
                    "size": 120,
                    "content": "fn main() {}"
                }
            }
        }"#;

        let gist: Gist = serde_json::from_str(json).unwrap();
        assert_eq!(gist.id, "abc123");
        assert_eq!(gist.comments, Some(2));
        assert_eq!(gist.owner.as_ref().and_then(|o| o.login.as_deref()), Some("octocat"));
        assert_eq!(
            gist.created_at.map(|t| t.timestamp()),
            Some(1_665_561_600)
        );

        let file = gist.files.get("main.rs").expect("file present");
        assert_eq!(file.language.as_deref(), Some("Rust"));
        assert_eq!(file.file_type.as_deref(), Some("text/plain"));
        assert_eq!(file.size, Some(120));
    }
}
