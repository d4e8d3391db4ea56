use std::path::Path;

use markdown::Options;

use crate::error::FeedError;

const START_COMMENT: &str = "<!--";
const END_COMMENT: &str = "-->";

/// Renders a post body to HTML. Blank bodies have nothing to render.
pub fn render_body(file_name: &Path, md_text: &str) -> Result<Option<String>, FeedError> {
    let buf = remove_comments(md_text).ok_or_else(|| FeedError::Render {
        path: file_name.to_path_buf(),
        reason: "Error finding end of comment".to_string(),
    })?;

    if buf.trim().is_empty() {
        return Ok(None);
    }

    match markdown::to_html_with_options(buf.as_str(), &Options::gfm()) {
        Ok(html) => Ok(Some(html)),
        Err(e) => Err(FeedError::Render {
            path: file_name.to_path_buf(),
            reason: e.reason,
        }),
    }
}

/// Strips `<!-- ... -->` blocks. Returns None for an unterminated comment.
fn remove_comments(md_post: &str) -> Option<String> {
    let mut res = String::with_capacity(md_post.len());
    let mut block = md_post;

    while let Some(start) = block.find(START_COMMENT) {
        res.push_str(&block[..start]);
        let next = &block[start + START_COMMENT.len()..];
        let end = next.find(END_COMMENT)?;
        block = &next[end + END_COMMENT.len()..];
    }
    res.push_str(block);

    Some(res)
}
