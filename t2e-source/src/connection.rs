//! Connection-string resolution.

use std::path::Path;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use table2enum_manifest::ConnectionSource;
use tracing::debug;

use crate::{Error, Result};

const SECTION: &[u8] = b"connectionStrings";
const ENTRY: &[u8] = b"add";
const ATTRIBUTE: &str = "connectionString";

/// The connection string to use for `source`.
pub fn resolve_connection(source: &ConnectionSource) -> Result<String> {
    match source {
        ConnectionSource::Direct(s) => Ok(s.clone()),
        ConnectionSource::ConfigFile(path) => {
            debug!(path = %path.display(), "reading connection string from config file");
            let content = std::fs::read_to_string(path).map_err(|e| {
                Box::new(Error::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            })?;
            resolve_from_xml(&content, path)
        }
    }
}

/// Find the `connectionString` attribute of the first `add` child of the
/// first `connectionStrings` element in `xml`.
///
/// `path` is only used for error messages. Later `connectionStrings`
/// sections are never consulted, even when the first one has no usable
/// entry.
///
/// ```
/// use std::path::Path;
/// use table2enum_source::resolve_from_xml;
///
/// let xml = r#"<configuration>
///   <connectionStrings>
///     <add name="main" connectionString="host=db user=app" />
///   </connectionStrings>
/// </configuration>"#;
///
/// let conn = resolve_from_xml(xml, Path::new("app.config")).unwrap();
/// assert_eq!(conn, "host=db user=app");
/// ```
pub fn resolve_from_xml(xml: &str, path: &Path) -> Result<String> {
    let xml_error = |source: quick_xml::Error| {
        Box::new(Error::Xml {
            path: path.to_path_buf(),
            source,
        })
    };
    let not_found = || {
        Box::new(Error::ConnectionNotFound {
            path: path.to_path_buf(),
        })
    };

    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    // Depth of the open `connectionStrings` element, once found.
    let mut section: Option<usize> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                depth += 1;
                match section {
                    Some(d) if depth == d + 1 && e.name().as_ref() == ENTRY => {
                        let value = connection_attribute(&e).map_err(xml_error)?;
                        return value.ok_or_else(not_found);
                    }
                    None if e.name().as_ref() == SECTION => section = Some(depth),
                    _ => {}
                }
            }
            Event::Empty(e) => match section {
                Some(d) if depth == d && e.name().as_ref() == ENTRY => {
                    let value = connection_attribute(&e).map_err(xml_error)?;
                    return value.ok_or_else(not_found);
                }
                // `<connectionStrings/>` has no children.
                None if e.name().as_ref() == SECTION => return Err(not_found()),
                _ => {}
            },
            Event::End(_) => {
                if section == Some(depth) {
                    return Err(not_found());
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => return Err(not_found()),
            _ => {}
        }
    }
}

fn connection_attribute(
    element: &BytesStart<'_>,
) -> std::result::Result<Option<String>, quick_xml::Error> {
    let Some(attr) = element
        .try_get_attribute(ATTRIBUTE)
        .map_err(quick_xml::Error::from)?
    else {
        return Ok(None);
    };
    let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
    Ok(Some(value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(xml: &str) -> Result<String> {
        resolve_from_xml(xml, Path::new("app.config"))
    }

    #[test]
    fn test_direct_connection() {
        let source = ConnectionSource::Direct("host=localhost".to_string());
        assert_eq!(resolve_connection(&source).unwrap(), "host=localhost");
    }

    #[test]
    fn test_root_is_connection_strings() {
        let xml = r#"<connectionStrings><add connectionString="a=b"/></connectionStrings>"#;
        assert_eq!(resolve(xml).unwrap(), "a=b");
    }

    #[test]
    fn test_first_add_wins() {
        let xml = r#"
            <configuration>
              <connectionStrings>
                <add name="one" connectionString="first" />
                <add name="two" connectionString="second" />
              </connectionStrings>
            </configuration>"#;
        assert_eq!(resolve(xml).unwrap(), "first");
    }

    #[test]
    fn test_unescapes_entities() {
        let xml = r#"<connectionStrings><add connectionString="password=a&amp;b"/></connectionStrings>"#;
        assert_eq!(resolve(xml).unwrap(), "password=a&b");
    }

    #[test]
    fn test_nested_add_is_not_a_child() {
        let xml = r#"
            <connectionStrings>
              <group><add connectionString="nested" /></group>
              <add connectionString="direct" />
            </connectionStrings>"#;
        assert_eq!(resolve(xml).unwrap(), "direct");
    }

    #[test]
    fn test_add_without_attribute() {
        let xml = r#"<connectionStrings><add name="main" /></connectionStrings>"#;
        assert!(matches!(
            *resolve(xml).unwrap_err(),
            Error::ConnectionNotFound { .. }
        ));
    }

    #[test]
    fn test_only_first_section_is_used() {
        let xml = r#"
            <configuration>
              <connectionStrings></connectionStrings>
              <connectionStrings><add connectionString="late" /></connectionStrings>
            </configuration>"#;
        assert!(matches!(
            *resolve(xml).unwrap_err(),
            Error::ConnectionNotFound { .. }
        ));
    }

    #[test]
    fn test_missing_section() {
        assert!(matches!(
            *resolve("<configuration />").unwrap_err(),
            Error::ConnectionNotFound { .. }
        ));
    }

    #[test]
    fn test_malformed_xml() {
        let xml = "<configuration><connectionStrings></configuration>";
        assert!(matches!(*resolve(xml).unwrap_err(), Error::Xml { .. }));
    }
}
