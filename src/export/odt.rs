/// OpenDocument Text export.
///
/// An `.odt` file is a zip package whose first entry is an uncompressed
/// `mimetype`. We write the minimum a reader needs: the mimetype, the
/// manifest, and `content.xml` with one heading per tier and one paragraph
/// per benefit.
use std::fmt::Write as _;
use std::io::{Cursor, Write};

use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use super::markup::escape_xml;
use super::{ExportError, Exporter};
use crate::tiers::TierTable;

const MIMETYPE: &str = "application/vnd.oasis.opendocument.text";

const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
 <manifest:file-entry manifest:full-path="/" manifest:version="1.2" manifest:media-type="application/vnd.oasis.opendocument.text"/>
 <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>
</manifest:manifest>
"#;

const CONTENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" office:version="1.2"><office:body><office:text>"#;

const CONTENT_CLOSE: &str = "</office:text></office:body></office:document-content>\n";

pub struct Odt;

impl Exporter for Odt {
    fn extension(&self) -> &'static str {
        "odt"
    }

    fn render(&self, table: &TierTable) -> Result<Vec<u8>, ExportError> {
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("mimetype", stored)?;
        zip.write_all(MIMETYPE.as_bytes())?;
        zip.start_file("META-INF/manifest.xml", deflated)?;
        zip.write_all(MANIFEST.as_bytes())?;
        zip.start_file("content.xml", deflated)?;
        zip.write_all(content_xml(table).as_bytes())?;

        Ok(zip.finish()?.into_inner())
    }
}

fn content_xml(table: &TierTable) -> String {
    let mut out = String::from(CONTENT_OPEN);
    for tier in table {
        let _ = write!(
            out,
            "<text:h text:outline-level=\"1\">{}</text:h>",
            escape_xml(&tier.heading())
        );
        for benefit in &tier.benefits {
            let _ = write!(out, "<text:p>{}</text:p>", escape_xml(benefit));
        }
    }
    out.push_str(CONTENT_CLOSE);
    out
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use zip::ZipArchive;

    use super::*;
    use crate::tiers::Tier;

    fn table() -> TierTable {
        let mut table = TierTable::new();
        let mut basic = Tier::new("basic", "5$");
        basic.benefits = vec!["Discord role".to_owned(), "Stickers".to_owned()];
        table.insert(basic);
        table
    }

    #[test]
    fn test_package_layout() {
        let bytes = Odt.render(&table()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut mimetype = String::new();
        {
            let mut first = archive.by_index(0).unwrap();
            assert_eq!(first.name(), "mimetype");
            assert_eq!(first.compression(), CompressionMethod::Stored);
            first.read_to_string(&mut mimetype).unwrap();
        }
        assert_eq!(mimetype, MIMETYPE);
        assert!(archive.by_name("META-INF/manifest.xml").is_ok());
    }

    #[test]
    fn test_content_has_heading_and_paragraphs() {
        let bytes = Odt.render(&table()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name("content.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.contains("<text:h text:outline-level=\"1\">Basic 5$</text:h>"));
        assert_eq!(content.matches("<text:p>").count(), 2);
    }
}
