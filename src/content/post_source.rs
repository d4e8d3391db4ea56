use std::fs;
use std::path::{Path, PathBuf};

use spdlog::{debug, warn};

use crate::content::front_matter::parse_document;
use crate::content::markdown_renderer::render_body;
use crate::content::{PostRecord, PostSlug};
use crate::error::FeedError;

/// A post that was found but not read yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDocument {
    pub path: PathBuf,
    pub slug: PostSlug,
}

/// Where posts come from. `resolve` is called from several threads at once.
pub trait PostSource: Sync {
    fn documents(&self) -> Result<Vec<PostDocument>, FeedError>;

    fn resolve(&self, document: &PostDocument) -> Result<PostRecord, FeedError>;
}

/// Markdown posts in a single directory, either as `<slug>.md` or as
/// `<slug>/index.md` for posts carrying their own assets.
pub struct DirPostSource {
    pub root_dir: PathBuf,
    pub index_file: String,
}

impl DirPostSource {
    pub fn new(root_dir: PathBuf, index_file: String) -> Self {
        DirPostSource { root_dir, index_file }
    }

    fn collection_error(&self, source: std::io::Error) -> FeedError {
        FeedError::Collection {
            path: self.root_dir.clone(),
            source,
        }
    }

    fn file_document(path: PathBuf) -> Option<PostDocument> {
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            return None;
        }
        let slug = path.file_stem()?.to_str()?.to_string();
        Some(PostDocument {
            path,
            slug: PostSlug(slug),
        })
    }

    fn dir_document(&self, dir: &Path) -> Option<PostDocument> {
        let index_path = dir.join(&self.index_file);
        if !index_path.is_file() {
            return None;
        }
        let slug = dir.file_name()?.to_str()?.to_string();
        Some(PostDocument {
            path: index_path,
            slug: PostSlug(slug),
        })
    }
}

impl PostSource for DirPostSource {
    fn documents(&self) -> Result<Vec<PostDocument>, FeedError> {
        let entries = fs::read_dir(&self.root_dir).map_err(|e| self.collection_error(e))?;

        let mut documents = vec![];
        for entry in entries {
            let entry = entry.map_err(|e| self.collection_error(e))?;
            let file_type = entry.file_type().map_err(|e| self.collection_error(e))?;
            let path = entry.path();

            let document = if file_type.is_file() {
                Self::file_document(path)
            } else if file_type.is_dir() {
                self.dir_document(&path)
            } else {
                None
            };

            match document {
                Some(document) => documents.push(document),
                None => debug!("Skipping {}", entry.path().display()),
            }
        }

        // read_dir order is platform dependent
        documents.sort_by(|a, b| a.path.cmp(&b.path));

        if documents.is_empty() {
            warn!("No posts found in {}", self.root_dir.display());
        }

        Ok(documents)
    }

    fn resolve(&self, document: &PostDocument) -> Result<PostRecord, FeedError> {
        let raw_content = fs::read_to_string(&document.path).map_err(|e| FeedError::Read {
            path: document.path.clone(),
            source: e,
        })?;

        let (front_matter, body) = parse_document(&document.path, &raw_content)?;
        let rendered_body = render_body(&document.path, &body)?;

        Ok(PostRecord {
            path: document.path.clone(),
            slug: document.slug.clone(),
            front_matter,
            rendered_body,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::test_data::{POST_EMPTY_BODY, POST_HELLO, POST_WORLD};

    use super::*;

    fn blog_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hello.md"), POST_HELLO).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a post").unwrap();
        fs::create_dir(dir.path().join("world")).unwrap();
        fs::write(dir.path().join("world").join("index.md"), POST_WORLD).unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        dir
    }

    #[test]
    fn test_documents() {
        let dir = blog_dir();
        let source = DirPostSource::new(dir.path().to_path_buf(), "index.md".to_string());
        let documents = source.documents().unwrap();

        let slugs: Vec<&str> = documents.iter().map(|d| d.slug.0.as_str()).collect();
        assert_eq!(slugs, ["hello", "world"]);
        assert_eq!(documents[1].path, dir.path().join("world").join("index.md"));
    }

    #[test]
    fn test_unreadable_dir() {
        let source = DirPostSource::new(PathBuf::from("does/not/exist"), "index.md".to_string());
        let err = source.documents().unwrap_err();
        assert!(matches!(err, FeedError::Collection { .. }));
    }

    #[test]
    fn test_resolve() {
        let dir = blog_dir();
        let source = DirPostSource::new(dir.path().to_path_buf(), "index.md".to_string());
        let document = PostDocument {
            path: dir.path().join("hello.md"),
            slug: PostSlug("hello".to_string()),
        };

        let record = source.resolve(&document).unwrap();
        assert_eq!(record.front_matter.title, "Hello");
        assert_eq!(record.slug, PostSlug("hello".to_string()));
        assert!(record.rendered_body.unwrap().contains("Hello there"));
    }

    #[test]
    fn test_resolve_empty_body() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.md");
        fs::write(&path, POST_EMPTY_BODY).unwrap();
        let source = DirPostSource::new(dir.path().to_path_buf(), "index.md".to_string());

        let record = source.resolve(&PostDocument { path, slug: PostSlug("empty".to_string()) }).unwrap();
        assert!(record.rendered_body.is_none());
        assert_eq!(record.front_matter.tags, ["Rust"]);
    }

    #[test]
    fn test_resolve_missing_file() {
        let source = DirPostSource::new(PathBuf::from("."), "index.md".to_string());
        let document = PostDocument {
            path: PathBuf::from("missing.md"),
            slug: PostSlug("missing".to_string()),
        };
        assert!(matches!(source.resolve(&document), Err(FeedError::Read { .. })));
    }
}
