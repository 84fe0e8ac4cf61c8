mod html;

use html::{find_from, first_block, inner, main_script, splice};
pub use html::{
    APP_SCRIPT, BODY_OPEN, HEAD_CLOSE, SCRIPT_CLOSE, SCRIPT_OPEN, STYLESHEET_LINK, STYLE_CLOSE,
    STYLE_OPEN,
};

use crate::{
    error::{SplitError, SplitResult},
    models::{Cleanup, Extraction, Finish, Fix},
};

/// Scripts mentioning this are left inline by [`finish`].
const FIREBASE_MARKER: &str = "firebase";
/// [`finish`] only externalizes scripts longer than this many characters.
const MAIN_SCRIPT_MIN_CHARS: usize = 1000;

/// Move the first `<style>` block and the main `<script>` block out of `doc`.
///
/// The main script starts at the first `<script>` after the first `</style>`
/// (or the top of the document when there is none) and ends at the last
/// `</script>`. Blocks that are not found are skipped; the returned HTML
/// carries whichever replacements did apply.
pub fn extract(doc: &str) -> Extraction {
    let style = first_block(doc, STYLE_OPEN, STYLE_CLOSE);
    let origin = doc.find(STYLE_CLOSE).unwrap_or(0);
    let script = main_script(doc, origin)
        .filter(|script| style.map_or(true, |style| !script.overlaps(&style)));

    let mut edits = Vec::with_capacity(2);
    let css = style.map(|span| {
        edits.push((span, STYLESHEET_LINK));
        inner(doc, span, STYLE_OPEN, STYLE_CLOSE).to_string()
    });
    let js = script.map(|span| {
        edits.push((span, APP_SCRIPT));
        inner(doc, span, SCRIPT_OPEN, SCRIPT_CLOSE).to_string()
    });

    Extraction {
        css,
        js,
        html: splice(doc, edits),
    }
}

/// Marker positions shared by [`clean`] and [`fix`].
struct HeadResidue {
    link: usize,
    /// Just past the link tag's line, never beyond `head_close`.
    line_end: usize,
    head_close: usize,
}

fn head_residue(doc: &str) -> SplitResult<HeadResidue> {
    let link = doc
        .find(STYLESHEET_LINK)
        .ok_or_else(|| SplitError::LinkTagMissing(STYLESHEET_LINK.to_string()))?;

    let line_end = find_from(doc, "\n", link)
        .map(|newline| newline + 1)
        .unwrap_or(link + STYLESHEET_LINK.len());

    let head_close = find_from(doc, HEAD_CLOSE, link).ok_or_else(|| {
        SplitError::HeadCloseMissing(format!("no {} after byte {}", HEAD_CLOSE, link))
    })?;

    // `</head>` on the link's own line: nothing lies in between.
    Ok(HeadResidue {
        link,
        line_end: line_end.min(head_close),
        head_close,
    })
}

/// Drop everything between the line holding [`STYLESHEET_LINK`] and the
/// following `</head>`.
pub fn clean(doc: &str) -> SplitResult<Cleanup> {
    let HeadResidue {
        line_end,
        head_close,
        ..
    } = head_residue(doc)?;
    let removed = doc[line_end..head_close].chars().count();

    let mut html = String::with_capacity(doc.len() - (head_close - line_end));
    html.push_str(&doc[..line_end]);
    html.push_str(&doc[head_close..]);

    Ok(Cleanup { html, removed })
}

/// Tolerant cleanup for half-transformed pages.
///
/// Cleans the head when both markers are present, then swaps a long,
/// non-firebase main script after `</head>` for [`APP_SCRIPT`].
pub fn finish(doc: &str) -> Finish {
    let (mut html, removed) = match clean(doc) {
        Ok(cleanup) => (cleanup.html, Some(cleanup.removed)),
        Err(_) => (doc.to_string(), None),
    };

    let origin = html.find(HEAD_CLOSE).unwrap_or(0);
    let script = main_script(&html, origin).filter(|&span| {
        let body = inner(&html, span, SCRIPT_OPEN, SCRIPT_CLOSE);
        !body.contains(FIREBASE_MARKER) && body.chars().count() > MAIN_SCRIPT_MIN_CHARS
    });

    if let Some(span) = script {
        html = splice(&html, vec![(span, APP_SCRIPT)]);
    }

    Finish {
        html,
        removed,
        script_replaced: script.is_some(),
    }
}

/// Recover a page whose CSS still sits between the stylesheet link and
/// `</head>`.
///
/// The residue becomes the CSS, the head is cut back to the link tag, and the
/// main script from the first `<script>` after `<body>` through the last
/// `</script>` is swapped for [`APP_SCRIPT`]. Both assets are trimmed.
pub fn fix(doc: &str) -> SplitResult<Fix> {
    let HeadResidue {
        link,
        line_end,
        head_close,
    } = head_residue(doc)?;
    let css = doc[line_end..head_close].trim().to_string();

    let link_end = link + STYLESHEET_LINK.len();
    let mut html = String::with_capacity(doc.len());
    html.push_str(&doc[..link_end]);
    html.push('\n');
    html.push_str(&doc[head_close..]);

    let origin = html.find(BODY_OPEN).unwrap_or(0);
    let script = main_script(&html, origin);
    let js = script.map(|span| {
        inner(&html, span, SCRIPT_OPEN, SCRIPT_CLOSE)
            .trim()
            .to_string()
    });

    if let Some(span) = script {
        html = splice(&html, vec![(span, APP_SCRIPT)]);
    }

    Ok(Fix { css, js, html })
}
