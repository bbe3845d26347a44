use schema::{DateFormatExtension, FieldExtensions, LinkExtension, TypeExtensions};
use std::fmt;

/// Field directives, each preceded by a space.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldDirectives<'a>(pub(crate) &'a FieldExtensions);

impl fmt::Display for FieldDirectives<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(link) = &self.0.link {
            write!(f, " {}", Link(link))?;
        }

        if let Some(dateformat) = &self.0.dateformat {
            write!(f, " {}", DateFormat(dateformat))?;
        }

        Ok(())
    }
}

/// Type directives, each preceded by a space.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeDirectives(pub(crate) TypeExtensions);

impl fmt::Display for TypeDirectives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.infer {
            f.write_str(" @dontInfer")?;
        }

        Ok(())
    }
}

struct Link<'a>(&'a LinkExtension);

impl fmt::Display for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@link(by: {:?}, from: {:?})", self.0.by, self.0.from)
    }
}

struct DateFormat<'a>(&'a DateFormatExtension);

impl fmt::Display for DateFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DateFormatExtension {
            format_string,
            from_now,
            difference,
            locale,
        } = self.0;

        let mut args = Vec::new();

        if let Some(format_string) = format_string {
            args.push(format!("formatString: {format_string:?}"));
        }

        if let Some(from_now) = from_now {
            args.push(format!("fromNow: {from_now}"));
        }

        if let Some(difference) = difference {
            args.push(format!("difference: {difference:?}"));
        }

        if let Some(locale) = locale {
            args.push(format!("locale: {locale:?}"));
        }

        f.write_str("@dateformat")?;

        if !args.is_empty() {
            write!(f, "({})", args.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dateformat_has_no_arguments() {
        let extensions = FieldExtensions {
            link: None,
            dateformat: Some(DateFormatExtension::default()),
        };

        assert_eq!(FieldDirectives(&extensions).to_string(), " @dateformat");
    }

    #[test]
    fn filled_dateformat_lists_set_arguments() {
        let dateformat = DateFormatExtension {
            format_string: Some("DD MMMM, YYYY".to_owned()),
            locale: Some("de".to_owned()),
            ..DateFormatExtension::default()
        };

        assert_eq!(
            DateFormat(&dateformat).to_string(),
            r#"@dateformat(formatString: "DD MMMM, YYYY", locale: "de")"#
        );
    }

    #[test]
    fn links_come_before_date_formats() {
        let extensions = FieldExtensions {
            link: Some(LinkExtension::node_reference("publishedAt")),
            dateformat: Some(DateFormatExtension::default()),
        };

        assert_eq!(
            FieldDirectives(&extensions).to_string(),
            r#" @link(by: "id", from: "publishedAt___NODE") @dateformat"#
        );
    }

    #[test]
    fn inferring_types_have_no_directive() {
        assert_eq!(TypeDirectives(TypeExtensions::default()).to_string(), "");
        assert_eq!(TypeDirectives(TypeExtensions { infer: false }).to_string(), " @dontInfer");
    }
}
