//! Word document paragraph text

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::error::{Error, Result};

use super::catch_parser_panic;

/// Extract body paragraph text, one paragraph per line
///
/// Tables, headers and footers are not part of the output.
pub fn extract_docx_text(data: &[u8]) -> Result<String> {
    let doc = catch_parser_panic("Word", || {
        docx_rs::read_docx(data).map_err(|e| Error::file_parse("Word", e.to_string()))
    })?;

    let mut content = String::new();
    for child in doc.document.children {
        match child {
            DocumentChild::Paragraph(p) => {
                for child in p.children {
                    push_paragraph_child(&mut content, child);
                }
                content.push('\n');
            }
            DocumentChild::Table(_) => {
                // Tables are out of scope
            }
            _ => {}
        }
    }

    Ok(content)
}

fn push_paragraph_child(content: &mut String, child: ParagraphChild) {
    match child {
        ParagraphChild::Run(run) => {
            for child in run.children {
                match child {
                    RunChild::Text(t) => content.push_str(&t.text),
                    RunChild::Tab(_) => content.push('\t'),
                    RunChild::Break(_) => content.push('\n'),
                    _ => {}
                }
            }
        }
        ParagraphChild::Hyperlink(link) => {
            for child in link.children {
                push_paragraph_child(content, child);
            }
        }
        _ => {}
    }
}
