use crate::errors::{CpilensError, CpilensResult};

/// Delimiter behaviour as specified in the command line
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Delimiter {
    /// Use the default delimiter (comma)
    #[default]
    Default,

    /// Use tab as the delimiter
    Tab,

    /// Use the specified delimiter
    Character(u8),
}

impl Delimiter {
    /// Create a Delimiter by parsing the command line argument for the delimiter
    pub fn from_arg(delimiter_arg: &Option<String>, tab_separation: bool) -> CpilensResult<Self> {
        if tab_separation {
            return Ok(Delimiter::Tab);
        }

        if let Some(s) = delimiter_arg {
            if s == r"\t" {
                return Ok(Delimiter::Tab);
            }
            let mut chars = s.chars();
            let c = chars.next().ok_or(CpilensError::DelimiterEmpty)?;
            if !c.is_ascii() {
                return Err(CpilensError::DelimiterNotAscii(c));
            }
            if chars.next().is_some() {
                return Err(CpilensError::DelimiterMultipleCharacters(s.clone()));
            }
            Ok(Delimiter::Character(c.try_into()?))
        } else {
            Ok(Delimiter::Default)
        }
    }

    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Default => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Character(d) => *d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_comma() {
        let d = Delimiter::from_arg(&None, false).unwrap();
        assert_eq!(d, Delimiter::Default);
        assert_eq!(d.as_byte(), b',');
    }

    #[test]
    fn test_tab() {
        assert_eq!(Delimiter::from_arg(&None, true).unwrap().as_byte(), b'\t');
        let escaped = Some(r"\t".to_string());
        assert_eq!(Delimiter::from_arg(&escaped, false).unwrap().as_byte(), b'\t');
    }

    #[test]
    fn test_character() {
        let d = Delimiter::from_arg(&Some(";".to_string()), false).unwrap();
        assert_eq!(d, Delimiter::Character(b';'));
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            Delimiter::from_arg(&Some("".to_string()), false),
            Err(CpilensError::DelimiterEmpty)
        ));
        assert!(matches!(
            Delimiter::from_arg(&Some("é".to_string()), false),
            Err(CpilensError::DelimiterNotAscii('é'))
        ));
        assert!(matches!(
            Delimiter::from_arg(&Some(";;".to_string()), false),
            Err(CpilensError::DelimiterMultipleCharacters(_))
        ));
    }
}
