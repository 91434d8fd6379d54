/// Text document templates: one fixed layout per format.
use std::fmt::Write as _;

use super::{ExportError, Exporter};
use crate::tiers::TierTable;

/// `## Name price` followed by a bullet list.
pub struct Markdown;

impl Exporter for Markdown {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        Ok(headed_bullets(table, "##").into_bytes())
    }
}

/// `== Name price` followed by a bullet list.
pub struct AsciiDoc;

impl Exporter for AsciiDoc {
    fn extension(&self) -> &'static str {
        "adoc"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        Ok(headed_bullets(table, "==").into_bytes())
    }
}

fn headed_bullets(table: &TierTable, marker: &str) -> String {
    let mut out = String::new();
    for tier in table {
        let _ = writeln!(out, "{marker} {}", tier.heading());
        for benefit in &tier.benefits {
            let _ = writeln!(out, "- {benefit}");
        }
        out.push('\n');
    }
    out
}

pub struct Html;

impl Exporter for Html {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        let mut out = String::from("<html><body>\n");
        for tier in table {
            let _ = write!(out, "<h2>{}</h2><ul>", escape_xml(&tier.heading()));
            for benefit in &tier.benefits {
                let _ = write!(out, "<li>{}</li>", escape_xml(benefit));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</body></html>\n");
        Ok(out.into_bytes())
    }
}

pub struct Xml;

impl Exporter for Xml {
    fn extension(&self) -> &'static str {
        "xml"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        let mut out = String::from("<tiers>\n");
        for tier in table {
            let _ = write!(
                out,
                "  <tier name=\"{}\" price=\"{}\">",
                escape_xml(&tier.display_name()),
                escape_xml(&tier.price)
            );
            for benefit in &tier.benefits {
                let _ = write!(out, "<benefit>{}</benefit>", escape_xml(benefit));
            }
            out.push_str("</tier>\n");
        }
        out.push_str("</tiers>\n");
        Ok(out.into_bytes())
    }
}

pub struct Latex;

impl Exporter for Latex {
    fn extension(&self) -> &'static str {
        "tex"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        let mut out = String::from("\\documentclass{article}\n\\begin{document}\n");
        for tier in table {
            let _ = writeln!(out, "\\section*{{{}}}", escape_latex(&tier.heading()));
            out.push_str("\\begin{itemize}\n");
            for benefit in &tier.benefits {
                let _ = writeln!(out, "\\item {}", escape_latex(benefit));
            }
            out.push_str("\\end{itemize}\n");
        }
        out.push_str("\\end{document}\n");
        Ok(out.into_bytes())
    }
}

/// A minimal RSS 2.0 channel with one item per tier.
pub struct Rss;

const RSS_TITLE: &str = "Patreon Tiers";
const RSS_LINK: &str = "http://example.com";
const RSS_DESCRIPTION: &str = "Patreon Tiers Description";

impl Exporter for Rss {
    fn extension(&self) -> &'static str {
        "rss"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        let mut out = String::from("<?xml version='1.0' encoding='UTF-8' ?>\n");
        out.push_str("<rss version='2.0'><channel>\n");
        let _ = writeln!(out, "<title>{RSS_TITLE}</title>");
        let _ = writeln!(out, "<link>{RSS_LINK}</link>");
        let _ = writeln!(out, "<description>{RSS_DESCRIPTION}</description>");
        for tier in table {
            let _ = writeln!(
                out,
                "<item><title>{}</title><description>",
                escape_xml(&tier.heading())
            );
            // The description is character data, so the line breaks are escaped too.
            for benefit in &tier.benefits {
                let _ = writeln!(out, "{}&lt;br /&gt;", escape_xml(benefit));
            }
            out.push_str("</description></item>\n");
        }
        out.push_str("</channel></rss>\n");
        Ok(out.into_bytes())
    }
}

/// RDF Turtle: one `ex:Tier` subject per tier.
pub struct Turtle;

impl Exporter for Turtle {
    fn extension(&self) -> &'static str {
        "ttl"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        let mut out = String::from("@prefix ex: <http://example.org/> .\n");
        for tier in table {
            out.push('\n');
            let _ = writeln!(out, "ex:{} a ex:Tier ;", turtle_local_name(&tier.display_name()));
            let _ = write!(out, "    ex:price \"{}\"", escape_turtle(&tier.price));
            for benefit in &tier.benefits {
                let _ = write!(out, " ;\n    ex:benefit \"{}\"", escape_turtle(benefit));
            }
            out.push_str(" .\n");
        }
        Ok(out.into_bytes())
    }
}

/// Escape the five XML special characters.
#[must_use]
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_latex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn escape_turtle(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep only characters valid in a prefixed-name local part.
fn turtle_local_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}
