use std::fmt::{self, Write};

use chrono::{DateTime, Duration, Utc};

use blog_core::domain::{Article, Comment, DeletionMetrics};

use super::{PageRenderer, RenderError};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
article,.comment{border-bottom:1px solid #ddd;padding:.5rem 0}\
.deleted{color:#999;font-style:italic}\
table{border-collapse:collapse}td,th{padding:.25rem .75rem;text-align:left}\
form label{display:block;margin-top:.5rem}";

const DELETE_SCRIPT: &str = "function deleteComment(articleId, id) {\
fetch('/comment?article_id=' + encodeURIComponent(articleId) + '&id=' + encodeURIComponent(id), {method: 'DELETE'})\
.then(function () { window.location.reload(); });\
}";

/// HTML-escapes the wrapped text when displayed.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn lifetime(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    let (h, m, s) = (secs / 3600, secs % 3600 / 60, secs % 60);
    match (h, m) {
        (0, 0) => format!("{s}s"),
        (0, _) => format!("{m}m {s}s"),
        _ => format!("{h}h {m}m {s}s"),
    }
}

/// Built-in server-side HTML pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn open(out: &mut String, title: &str) -> fmt::Result {
        write!(
            out,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title>\
             <style>{STYLE}</style></head><body>",
            Escaped(title)
        )
    }

    fn close(out: &mut String) -> fmt::Result {
        write!(out, "</body></html>")
    }

    fn comment(out: &mut String, article_id: &str, c: &Comment) -> fmt::Result {
        if c.is_deleted() {
            return write!(
                out,
                "<div class=\"comment deleted\">[deleted] <small>{}</small></div>",
                timestamp(&c.created_at)
            );
        }

        write!(
            out,
            "<div class=\"comment\"><strong>{}</strong> <small>{}</small><p>{}</p>\
             <button onclick=\"deleteComment(&quot;{}&quot;,&quot;{}&quot;)\">Delete</button></div>",
            Escaped(&c.name),
            timestamp(&c.created_at),
            Escaped(&c.text),
            Escaped(article_id),
            Escaped(&c.id),
        )
    }
}

impl PageRenderer for HtmlRenderer {
    fn index(
        &self,
        articles: &[Article],
        metrics: &DeletionMetrics,
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        Self::open(&mut out, "Blog")?;
        write!(out, "<h1>Blog</h1>")?;

        if articles.is_empty() {
            write!(out, "<p>No articles yet.</p>")?;
        }
        for art in articles {
            write!(
                out,
                "<article><h2><a href=\"/article?id={}\">{}</a></h2>\
                 <p>by {} &middot; {} comments</p></article>",
                Escaped(&art.id),
                Escaped(&art.title),
                Escaped(&art.author),
                art.live_comments().count(),
            )?;
        }

        write!(
            out,
            "<h2>New article</h2><form method=\"post\" action=\"/article\">\
             <label>Title <input name=\"title\"></label>\
             <label>Author <input name=\"author\"></label>\
             <label>Content <textarea name=\"content\"></textarea></label>\
             <button type=\"submit\">Publish</button></form>"
        )?;

        write!(out, "<h2>Deleted comments</h2>")?;
        if metrics.is_empty() {
            write!(out, "<p>No comments have been deleted.</p>")?;
        } else {
            write!(
                out,
                "<table><tr><th>Created</th><th>Deleted</th><th>Lifetime</th></tr>"
            )?;
            for entry in &metrics.data {
                write!(
                    out,
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    timestamp(&entry.created_at),
                    timestamp(&entry.deleted_at),
                    lifetime(entry.lifetime()),
                )?;
            }
            write!(out, "</table>")?;
        }

        Self::close(&mut out)?;
        Ok(out)
    }

    fn article(&self, article: &Article) -> Result<String, RenderError> {
        let mut out = String::new();
        Self::open(&mut out, &article.title)?;
        write!(
            out,
            "<p><a href=\"/\">&larr; All articles</a></p>\
             <h1>{}</h1><p>by {}</p><div>{}</div><h2>Comments</h2>",
            Escaped(&article.title),
            Escaped(&article.author),
            Escaped(&article.content),
        )?;

        for c in &article.comments {
            Self::comment(&mut out, &article.id, c)?;
        }

        write!(
            out,
            "<form method=\"post\" action=\"/comment?article_id={}\">\
             <label>Name <input name=\"name\"></label>\
             <label>Comment <textarea name=\"comment\"></textarea></label>\
             <button type=\"submit\">Comment</button></form>\
             <script>{DELETE_SCRIPT}</script>",
            Escaped(&article.id),
        )?;

        Self::close(&mut out)?;
        Ok(out)
    }
}
